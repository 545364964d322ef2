//! Command implementations for `tenjitool`.

pub mod commands;
pub mod corpus;

use tenji::settings::SettingsError;
use tenji::TableError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid table: {0}")]
    Table(#[from] TableError),
    #[error("invalid settings: {0}")]
    Settings(#[from] SettingsError),
    #[error("invalid corpus: {0}")]
    Corpus(String),
}

/// Read a whole file, tagging errors with the path.
pub fn read_file(path: &str) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_string(),
        source,
    })
}
