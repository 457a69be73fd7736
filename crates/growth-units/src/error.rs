use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitError {
    #[error("height is empty")]
    Empty,
    #[error("unrecognized height: {input}")]
    Unparseable { input: String },
    #[error("height out of range: {input}")]
    OutOfRange { input: String },
}
