#![deny(unsafe_code)]

use std::path::PathBuf;

use growth_model::Sex;

#[derive(Debug, thiserror::Error)]
pub enum StandardsError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse CSV {source_name}: {message}")]
    Csv { source_name: String, message: String },

    #[error("failed to parse TOML options {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid option {field} = {value} in {path}")]
    InvalidOptions {
        path: PathBuf,
        field: &'static str,
        value: f64,
    },

    #[error("invalid sex code {code} in {source_name} (expected 1 or 2)")]
    InvalidSex { source_name: String, code: u8 },

    #[error("growth reference {source_name} has no rows")]
    EmptyTable { source_name: String },

    #[error("duplicate row for sex {sex} at {age_months} months in {source_name}")]
    DuplicateRow {
        source_name: String,
        sex: Sex,
        age_months: f64,
    },

    #[error(
        "percentiles not increasing for sex {sex} at {age_months} months in {source_name} (column {column})"
    )]
    NonMonotonic {
        source_name: String,
        sex: Sex,
        age_months: f64,
        column: String,
    },

    #[error("bundled growth reference failed to load: {message}")]
    Bundled { message: String },
}

impl StandardsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn csv(source_name: &str, message: impl ToString) -> Self {
        Self::Csv {
            source_name: source_name.to_string(),
            message: message.to_string(),
        }
    }
}
