#![deny(unsafe_code)]

//! Reader for stature-for-age CSV files.
//!
//! Expected header: `Sex,Agemos,P3,P5,P10,P25,P50,P75,P90,P95,P97`.
//! Extra columns (for example LMS parameters) are ignored.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use growth_model::{GrowthTableRow, Sex};

use crate::error::StandardsError;

#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Sex")]
    sex: u8,
    #[serde(rename = "Agemos")]
    age_months: f64,
    #[serde(rename = "P3")]
    p3: f64,
    #[serde(rename = "P5")]
    p5: f64,
    #[serde(rename = "P10")]
    p10: f64,
    #[serde(rename = "P25")]
    p25: f64,
    #[serde(rename = "P50")]
    p50: f64,
    #[serde(rename = "P75")]
    p75: f64,
    #[serde(rename = "P90")]
    p90: f64,
    #[serde(rename = "P95")]
    p95: f64,
    #[serde(rename = "P97")]
    p97: f64,
}

impl RawRow {
    fn into_row(self, source_name: &str) -> Result<GrowthTableRow, StandardsError> {
        let sex = Sex::from_code(self.sex).ok_or_else(|| StandardsError::InvalidSex {
            source_name: source_name.to_string(),
            code: self.sex,
        })?;
        Ok(GrowthTableRow::new(
            sex,
            self.age_months,
            [
                self.p3, self.p5, self.p10, self.p25, self.p50, self.p75, self.p90, self.p95,
                self.p97,
            ],
        ))
    }
}

/// Parses reference rows from any reader.
pub fn read_rows<R: Read>(
    reader: R,
    source_name: &str,
) -> Result<Vec<GrowthTableRow>, StandardsError> {
    let mut reader = ::csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(::csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in reader.deserialize::<RawRow>() {
        let record = record.map_err(|e| StandardsError::csv(source_name, e))?;
        rows.push(record.into_row(source_name)?);
    }
    Ok(rows)
}

/// Parses reference rows from a CSV file on disk.
pub fn read_rows_from_path(path: &Path) -> Result<Vec<GrowthTableRow>, StandardsError> {
    let bytes = std::fs::read(path).map_err(|e| StandardsError::io(path, e))?;
    read_rows(bytes.as_slice(), &path.display().to_string())
}
