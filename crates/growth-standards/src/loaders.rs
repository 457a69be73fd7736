#![deny(unsafe_code)]

//! Reference and options loading.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use growth_model::ProjectionOptions;

use crate::csv::{read_rows, read_rows_from_path};
use crate::error::StandardsError;
use crate::reference::GrowthReference;

/// Environment variable pointing at an external stature-for-age CSV.
pub const REFERENCE_ENV_VAR: &str = "GROWTH_REFERENCE_CSV";

/// Source name reported for the embedded table.
pub const BUNDLED_SOURCE: &str = "bundled";

const BUNDLED_CSV: &str = include_str!("../../../standards/growth/stature_for_age.csv");

static BUNDLED: LazyLock<Result<GrowthReference, StandardsError>> =
    LazyLock::new(|| parse_reference(BUNDLED_CSV, BUNDLED_SOURCE));

impl GrowthReference {
    /// The reference shipped with the crate, parsed on first use.
    pub fn bundled() -> Result<&'static GrowthReference, StandardsError> {
        BUNDLED.as_ref().map_err(|e| StandardsError::Bundled {
            message: e.to_string(),
        })
    }
}

/// Parses and validates a reference from CSV text.
pub fn parse_reference(csv: &str, source_name: &str) -> Result<GrowthReference, StandardsError> {
    let rows = read_rows(csv.as_bytes(), source_name)?;
    let reference = GrowthReference::from_rows(source_name, rows)?;
    log_loaded(&reference);
    Ok(reference)
}

/// Loads and validates a reference CSV from disk.
pub fn load_reference(path: &Path) -> Result<GrowthReference, StandardsError> {
    let rows = read_rows_from_path(path)?;
    let reference = GrowthReference::from_rows(path.display().to_string(), rows)?;
    log_loaded(&reference);
    Ok(reference)
}

/// Path configured through `GROWTH_REFERENCE_CSV`, if any.
pub fn configured_reference_path() -> Option<PathBuf> {
    std::env::var_os(REFERENCE_ENV_VAR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Loads the configured external reference, or a copy of the bundled one.
pub fn load_default_reference() -> Result<GrowthReference, StandardsError> {
    load_reference_or_bundled(configured_reference_path().as_deref())
}

/// Loads `path` when given, otherwise a copy of the bundled reference.
pub fn load_reference_or_bundled(path: Option<&Path>) -> Result<GrowthReference, StandardsError> {
    match path {
        Some(path) => load_reference(path),
        None => GrowthReference::bundled().cloned(),
    }
}

/// Reads projection options from a TOML file. Missing keys keep defaults;
/// out-of-range values are rejected.
pub fn load_options(path: &Path) -> Result<ProjectionOptions, StandardsError> {
    let text = std::fs::read_to_string(path).map_err(|e| StandardsError::io(path, e))?;
    let options: ProjectionOptions =
        toml::from_str(&text).map_err(|source| StandardsError::Toml {
            path: path.to_path_buf(),
            source,
        })?;
    if let Some((field, value)) = options.first_invalid() {
        return Err(StandardsError::InvalidOptions {
            path: path.to_path_buf(),
            field,
            value,
        });
    }
    Ok(options)
}

fn log_loaded(reference: &GrowthReference) {
    let male_rows = reference.rows(growth_model::Sex::Male).len();
    let female_rows = reference.rows(growth_model::Sex::Female).len();
    tracing::info!(
        source = reference.source(),
        male_rows,
        female_rows,
        "loaded growth reference"
    );
}
