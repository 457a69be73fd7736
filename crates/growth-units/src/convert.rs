use crate::error::UnitError;
use crate::feet_inches::FeetInches;
use crate::parse::parse_height_cm;

pub const CM_PER_INCH: f64 = 2.54;

/// Unit conversion used wherever a height string is produced or consumed.
pub trait HeightConverter {
    fn cm_to_inches(&self, cm: f64) -> f64 {
        cm / CM_PER_INCH
    }

    fn inches_to_cm(&self, inches: f64) -> f64 {
        inches * CM_PER_INCH
    }

    /// Formats centimeters as a `F'I"` string.
    fn format_cm(&self, cm: f64) -> String {
        self.format_inches(self.cm_to_inches(cm))
    }

    /// Formats inches as a `F'I"` string, rounding to whole inches.
    fn format_inches(&self, inches: f64) -> String {
        FeetInches::from_inches(inches).to_string()
    }

    /// Parses a free-form height into centimeters.
    fn parse_cm(&self, input: &str) -> Result<f64, UnitError>;
}

/// Feet/inches display with centimeter storage.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImperialConverter;

impl HeightConverter for ImperialConverter {
    fn parse_cm(&self, input: &str) -> Result<f64, UnitError> {
        parse_height_cm(input)
    }
}
