use std::fmt;

/// A height rounded to whole inches and split into feet and inches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FeetInches {
    pub feet: u32,
    pub inches: u32,
}

impl FeetInches {
    /// Rounds to the nearest whole inch (half away from zero), then carries
    /// every 12 inches into feet. Negative and non-finite input yields `0'0"`.
    pub fn from_inches(total_inches: f64) -> Self {
        let rounded = total_inches.round();
        let total = if rounded.is_finite() && rounded > 0.0 {
            rounded.min(f64::from(u32::MAX)) as u32
        } else {
            0
        };
        Self {
            feet: total / 12,
            inches: total % 12,
        }
    }

    pub fn total_inches(&self) -> u32 {
        self.feet * 12 + self.inches
    }
}

impl fmt::Display for FeetInches {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}'{}\"", self.feet, self.inches)
    }
}
