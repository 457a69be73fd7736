//! Height unit conversion.
//!
//! - **convert**: the [`HeightConverter`] seam and its imperial implementation
//! - **feet_inches**: whole-inch display values with carry into feet
//! - **parse**: free-form height strings back to centimeters

pub mod convert;
pub mod error;
pub mod feet_inches;
pub mod parse;

pub use convert::{CM_PER_INCH, HeightConverter, ImperialConverter};
pub use error::UnitError;
pub use feet_inches::FeetInches;
pub use parse::parse_height_cm;
