use thiserror::Error;

use crate::sex::Sex;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GrowthError {
    #[error("No data found for age {age_years} ({age_months} months) and sex {sex}")]
    DataNotFound {
        age_years: f64,
        age_months: i64,
        sex: Sex,
    },
    #[error("unknown sex code: {0}")]
    UnknownSex(String),
    #[error("growth reference unavailable: {message}")]
    ReferenceUnavailable { message: String },
}

pub type Result<T> = std::result::Result<T, GrowthError>;
