//! Value types shared by the growth reference, unit and engine crates.
//!
//! Everything here is a plain value computed per call; nothing owns
//! mutable state across calls.

pub mod error;
pub mod health;
pub mod options;
pub mod percentile;
pub mod probability;
pub mod projection;
pub mod sex;

pub use error::{GrowthError, Result};
pub use health::HealthGoals;
pub use options::ProjectionOptions;
pub use percentile::{GrowthTableRow, Percentile, PercentileMatch};
pub use probability::{
    DreamHeightInput, PROBABILITY_CEILING, PROBABILITY_FLOOR, ProbabilityLabel, ProbabilityResult,
};
pub use projection::{AdultHeightsCm, HeightInput, ProjectedHeights, ProjectionResult};
pub use sex::Sex;
