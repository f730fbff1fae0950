use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChargingError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error at line {line}, column {column}: {message}")]
    Parse {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("Missing column {column} (row {row} has {found} columns)")]
    MissingColumn {
        row: usize,
        column: usize,
        found: usize,
    },

    #[error("Irradiance table is empty")]
    EmptyTable,

    #[error("Interpolation error: {0}")]
    Interpolation(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<figment::Error> for ChargingError {
    fn from(err: figment::Error) -> Self {
        ChargingError::Config(err.to_string())
    }
}

pub type ChargingResult<T> = Result<T, ChargingError>;

pub(crate) fn io_error(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> ChargingError {
    let path = path.into();
    move |source| ChargingError::Io { path, source }
}
