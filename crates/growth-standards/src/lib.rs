#![deny(unsafe_code)]

//! Stature-for-age growth reference.
//!
//! - **csv**: reader for `Sex,Agemos,P3..P97` files
//! - **reference**: the validated, frozen (sex, month) lookup structure
//! - **loaders**: bundled table, external files and options files

pub mod csv;
pub mod error;
pub mod loaders;
pub mod reference;

pub use crate::error::StandardsError;
pub use crate::loaders::{
    BUNDLED_SOURCE, REFERENCE_ENV_VAR, configured_reference_path, load_default_reference,
    load_options, load_reference, load_reference_or_bundled, parse_reference,
};
pub use crate::reference::GrowthReference;
