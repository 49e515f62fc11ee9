//! CSV Loader
//!
//! Reads launch records from a CSV file with a header row. Columns are
//! located by exact header name; extra columns are ignored. Rows without a
//! valid outcome class are skipped and reported, never fatal. A blank or
//! unparseable payload only leaves the record without a payload mass.

use super::error::{DatasetError, DatasetResult};
use super::types::{LaunchRecord, Outcome};
use super::Dataset;
use std::io::Read;
use std::path::Path;

/// Default header of the launch site column
pub const SITE_COLUMN: &str = "Launch Site";
/// Default header of the payload mass column
pub const PAYLOAD_COLUMN: &str = "Payload Mass (kg)";
/// Default header of the outcome class column
pub const CLASS_COLUMN: &str = "class";
/// Default header of the booster category column
pub const BOOSTER_COLUMN: &str = "Booster Version Category";

/// Maximum number of row errors kept in a `LoadReport`
const MAX_REPORTED_ERRORS: usize = 100;

/// CSV loader with configurable column headers
#[derive(Debug, Clone)]
pub struct DatasetLoader {
    site_column: &'static str,
    payload_column: &'static str,
    class_column: &'static str,
    booster_column: &'static str,
}

/// Summary of a load
#[derive(Debug, Default)]
pub struct LoadReport {
    pub rows_loaded: usize,
    pub rows_skipped: usize,
    /// Loaded rows whose payload mass was blank or unparseable
    pub rows_missing_payload: usize,
    pub errors: Vec<String>,
}

impl Default for DatasetLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetLoader {
    /// Create a loader for the standard launch CSV headers
    pub fn new() -> Self {
        Self {
            site_column: SITE_COLUMN,
            payload_column: PAYLOAD_COLUMN,
            class_column: CLASS_COLUMN,
            booster_column: BOOSTER_COLUMN,
        }
    }

    pub fn with_site_column(mut self, header: &'static str) -> Self {
        self.site_column = header;
        self
    }

    pub fn with_payload_column(mut self, header: &'static str) -> Self {
        self.payload_column = header;
        self
    }

    pub fn with_class_column(mut self, header: &'static str) -> Self {
        self.class_column = header;
        self
    }

    pub fn with_booster_column(mut self, header: &'static str) -> Self {
        self.booster_column = header;
        self
    }

    /// Load a dataset from a CSV file
    pub fn load(&self, path: &Path) -> DatasetResult<(Dataset, LoadReport)> {
        let file = std::fs::File::open(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let (dataset, report) = self.load_reader(file)?;

        tracing::info!(
            path = %path.display(),
            rows_loaded = report.rows_loaded,
            rows_skipped = report.rows_skipped,
            rows_missing_payload = report.rows_missing_payload,
            "Loaded launch dataset"
        );

        Ok((dataset, report))
    }

    /// Load a dataset from CSV text (useful for testing)
    pub fn load_str(&self, csv_data: &str) -> DatasetResult<(Dataset, LoadReport)> {
        self.load_reader(csv_data.as_bytes())
    }

    fn load_reader<R: Read>(&self, source: R) -> DatasetResult<(Dataset, LoadReport)> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(source);

        let headers = reader.headers()?.clone();
        let column = |name: &'static str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or(DatasetError::MissingColumn(name))
        };
        let site_idx = column(self.site_column)?;
        let payload_idx = column(self.payload_column)?;
        let class_idx = column(self.class_column)?;
        let booster_idx = column(self.booster_column)?;

        let mut records = Vec::new();
        let mut report = LoadReport::default();

        for (row_num, result) in reader.records().enumerate() {
            // Header is line 1
            let line = row_num + 2;

            let parsed = result
                .map_err(|e| e.to_string())
                .and_then(|row| parse_row(&row, site_idx, payload_idx, class_idx, booster_idx));

            match parsed {
                Ok(record) => {
                    if record.payload_mass_kg.is_none() {
                        tracing::debug!(line, "Launch row has no payload mass");
                        report.rows_missing_payload += 1;
                    }
                    records.push(record);
                    report.rows_loaded += 1;
                }
                Err(reason) => {
                    tracing::warn!(line, reason = %reason, "Skipping malformed launch row");
                    report.rows_skipped += 1;
                    report.errors.push(format!("Line {}: {}", line, reason));
                }
            }
        }

        // Truncate errors if too many
        if report.errors.len() > MAX_REPORTED_ERRORS {
            let total = report.errors.len();
            report.errors.truncate(MAX_REPORTED_ERRORS);
            report
                .errors
                .push(format!("... and {} more errors", total - MAX_REPORTED_ERRORS));
        }

        Ok((Dataset::new(records), report))
    }
}

fn parse_row(
    row: &csv::StringRecord,
    site_idx: usize,
    payload_idx: usize,
    class_idx: usize,
    booster_idx: usize,
) -> Result<LaunchRecord, String> {
    let field = |idx: usize, name: &str| {
        row.get(idx)
            .ok_or_else(|| format!("missing {} column", name))
    };

    let site = field(site_idx, "site")?;

    // Blank, unparseable and non-finite masses all count as unknown
    let payload_mass_kg = field(payload_idx, "payload")?
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|mass| mass.is_finite());

    let class_str = field(class_idx, "class")?.trim();
    let outcome = class_str
        .parse::<f64>()
        .ok()
        .and_then(Outcome::from_class)
        .ok_or_else(|| format!("invalid outcome class '{}'", class_str))?;

    let booster = field(booster_idx, "booster category")?;

    Ok(LaunchRecord::new(site, payload_mass_kg, outcome, booster))
}

/// Load a dataset from a CSV file with the standard headers
pub fn load_dataset(path: &Path) -> DatasetResult<(Dataset, LoadReport)> {
    DatasetLoader::new().load(path)
}
