//! Catalog CSV importer.
//!
//! Parses raw catalog CSV into [`FabricDraft`]s under a deliberate leniency
//! policy: row-shape malformation is never an error. Short rows resolve to
//! fallback values, unparseable prices become zero, blank lines vanish. The
//! only rejected outcome is a total read failure (undecodable input).

use csv::{ReaderBuilder, StringRecord};
use uuid::Uuid;

use crate::error::{TkaniError, TkaniResult};
use tkani_models::{FabricDetails, FabricDraft};

use super::schema;

/// Result of one import call.
#[derive(Debug, Clone)]
pub struct ImportReport {
    pub id: Uuid,
    pub filename: String,
    /// Drafts produced, one per non-blank data line, in file order.
    pub drafts: Vec<FabricDraft>,
    pub total_rows: usize,
    /// Per-row degradations worth surfacing; never fatal.
    pub warnings: Vec<String>,
}

/// Catalog CSV parser.
pub struct CatalogImporter {
    /// Delimiter character (default: comma)
    delimiter: u8,
}

impl Default for CatalogImporter {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl CatalogImporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Parse raw file bytes.
    ///
    /// Fails only when the content is not valid UTF-8; that is the importer's
    /// single rejected outcome, and it produces zero records.
    pub fn import_bytes(&self, filename: &str, data: &[u8]) -> TkaniResult<ImportReport> {
        let content = std::str::from_utf8(data)
            .map_err(|e| TkaniError::io(format!("File is not valid UTF-8: {}", e)))?;
        self.import_str(filename, content)
    }

    /// Parse CSV content from a string.
    ///
    /// The first line is a header: required by the format, skipped without
    /// inspection. Blank lines are skipped entirely.
    pub fn import_str(&self, filename: &str, content: &str) -> TkaniResult<ImportReport> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .flexible(true) // Rows may carry fewer than 18 fields
            .from_reader(content.as_bytes());

        let mut drafts = Vec::new();
        let mut warnings = Vec::new();

        for (idx, result) in reader.records().enumerate() {
            // Line numbering: +2 accounts for the header and 1-based counting.
            let line = idx + 2;
            match result {
                Ok(record) => {
                    if record.len() > schema::COLUMN_COUNT {
                        warnings.push(format!(
                            "Row {}: {} fields, extra columns ignored",
                            line,
                            record.len()
                        ));
                    }
                    drafts.push(map_row(&record));
                }
                Err(e) => {
                    warnings.push(format!("Row {}: Parse error - {}", line, e));
                }
            }
        }

        Ok(ImportReport {
            id: Uuid::new_v4(),
            filename: filename.to_string(),
            total_rows: drafts.len(),
            drafts,
            warnings,
        })
    }
}

/// Maps one positional row to a draft under the fallback policy.
fn map_row(record: &StringRecord) -> FabricDraft {
    FabricDraft {
        name: scalar(record, schema::COL_NAME, schema::FALLBACK_NAME),
        category: scalar(record, schema::COL_CATEGORY, schema::FALLBACK_CATEGORY),
        price: record
            .get(schema::COL_PRICE)
            .and_then(|v| v.trim().parse::<f64>().ok())
            .unwrap_or(0.0),
        image: scalar(record, schema::COL_IMAGE, schema::FALLBACK_IMAGE),
        description: scalar(record, schema::COL_DESCRIPTION, schema::FALLBACK_DESCRIPTION),
        details: FabricDetails {
            width: scalar(record, schema::COL_WIDTH, schema::FALLBACK_DETAIL),
            weight: scalar(record, schema::COL_WEIGHT, schema::FALLBACK_DETAIL),
            composition: scalar(record, schema::COL_COMPOSITION, schema::FALLBACK_DETAIL),
            origin: scalar(record, schema::COL_ORIGIN, schema::FALLBACK_DETAIL),
            care_instructions: scalar(record, schema::COL_CARE, schema::FALLBACK_DETAIL),
        },
        features: list(record, schema::COL_FEATURES),
        applications: list(record, schema::COL_APPLICATIONS),
    }
}

fn scalar(record: &StringRecord, index: usize, fallback: &str) -> String {
    match record.get(index) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => fallback.to_string(),
    }
}

/// Collects the four list slots starting at `first`, dropping entries that
/// are empty after trimming and preserving the order of the rest.
fn list(record: &StringRecord, first: usize) -> Vec<String> {
    (first..first + schema::LIST_SLOTS)
        .filter_map(|index| record.get(index))
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .collect()
}
