use crate::error::Result;
use crate::models::ResultRow;
use std::path::{Path, PathBuf};

pub const OUTPUT_FILE_NAME: &str = "github_data.csv";
const HEADER: [&str; 3] = ["Repository", "Stars", "Open Pull Requests"];

/// The output file lives next to the executable, falling back to the
/// current directory when the executable path cannot be determined.
pub fn default_output_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(OUTPUT_FILE_NAME)
}

/// Writes the rows as CSV, header first, overwriting any existing file.
/// An empty row list still produces a file containing the header line.
pub fn write_csv(rows: &[ResultRow], path: &Path) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;

    writer.write_record(HEADER)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    Ok(())
}
