//! Collects star counts and open pull request totals for GitHub
//! repositories and writes them to a CSV report.

pub mod cli;
pub mod collector;
pub mod error;
pub mod github;
pub mod models;
pub mod output;
pub mod types;
