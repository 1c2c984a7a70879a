//! Catalog CSV exporter.
//!
//! Serializes records into the fixed 18-column layout: the Russian header
//! line first, then one line per record. List fields are right-padded with
//! empty strings to exactly four slots; a list longer than four is a
//! validation error rather than a silent header misalignment.

use csv::WriterBuilder;

use crate::error::{TkaniError, TkaniResult};
use tkani_models::FabricRecord;

use super::schema;

/// Catalog CSV writer.
pub struct CatalogExporter {
    delimiter: u8,
}

impl Default for CatalogExporter {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl CatalogExporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Serializes the record sequence to CSV text.
    ///
    /// An empty sequence yields header-only output. Quoting is applied only
    /// where a field requires it.
    pub fn export(&self, records: &[FabricRecord]) -> TkaniResult<String> {
        let mut writer = WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_writer(Vec::new());

        writer.write_record(schema::HEADER)?;
        for record in records {
            writer.write_record(&row(record)?)?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| TkaniError::internal(format!("Failed to flush CSV writer: {}", e)))?;
        String::from_utf8(bytes)
            .map_err(|e| TkaniError::internal(format!("Exported CSV is not UTF-8: {}", e)))
    }
}

fn row(record: &FabricRecord) -> TkaniResult<Vec<String>> {
    let mut fields = Vec::with_capacity(schema::COLUMN_COUNT);
    fields.push(record.name.clone());
    fields.push(record.category.clone());
    fields.push(record.price.to_string());
    fields.push(record.image.clone());
    fields.push(record.description.clone());
    fields.push(record.details.width.clone());
    fields.push(record.details.weight.clone());
    fields.push(record.details.composition.clone());
    fields.push(record.details.origin.clone());
    fields.push(record.details.care_instructions.clone());
    pad_list(&mut fields, &record.features, "features")?;
    pad_list(&mut fields, &record.applications, "applications")?;
    Ok(fields)
}

/// Right-pads `items` into exactly [`schema::LIST_SLOTS`] columns.
///
/// The data-model boundary already caps list length; refusing here keeps an
/// out-of-invariant record from producing columns the header cannot name.
fn pad_list(fields: &mut Vec<String>, items: &[String], field: &str) -> TkaniResult<()> {
    if items.len() > schema::LIST_SLOTS {
        return Err(TkaniError::validation(
            field,
            format!(
                "{} entries exceed the {} reserved CSV columns",
                items.len(),
                schema::LIST_SLOTS
            ),
        ));
    }
    for slot in 0..schema::LIST_SLOTS {
        fields.push(items.get(slot).cloned().unwrap_or_default());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csv::import::CatalogImporter;
    use tkani_models::{FabricDraft, FabricRecord};

    fn record(draft: FabricDraft) -> FabricRecord {
        FabricRecord::new("1".to_string(), draft)
    }

    #[test]
    fn test_empty_catalog_exports_header_only() {
        let output = CatalogExporter::new().export(&[]).unwrap();
        assert_eq!(output.trim_end(), schema::HEADER.join(","));
    }

    #[test]
    fn test_short_lists_pad_to_four_columns() {
        let mut draft = FabricDraft::sample();
        draft.features = vec!["Прочность".to_string(), "Мягкость".to_string()];
        draft.applications = Vec::new();
        let output = CatalogExporter::new().export(&[record(draft)]).unwrap();

        let data_line = output.lines().nth(1).unwrap();
        assert!(data_line.contains("Прочность,Мягкость,,"));
        // 18 columns; none of the sample fields need quoting here.
        assert_eq!(data_line.split(',').count(), schema::COLUMN_COUNT);
    }

    #[test]
    fn test_oversized_list_is_a_validation_error() {
        let mut draft = FabricDraft::sample();
        draft.features = vec!["x".to_string(); 6];
        let result = CatalogExporter::new().export(&[record(draft)]);
        assert!(matches!(result, Err(TkaniError::Validation { .. })));
    }

    #[test]
    fn test_fields_with_commas_and_quotes_are_quoted() {
        let mut draft = FabricDraft::sample();
        draft.name = "Лён, классический".to_string();
        draft.description = "Ткань \"люкс\"".to_string();
        let output = CatalogExporter::new().export(&[record(draft)]).unwrap();
        assert!(output.contains("\"Лён, классический\""));
        assert!(output.contains("\"Ткань \"\"люкс\"\"\""));
    }

    #[test]
    fn test_price_formats_without_trailing_zeroes() {
        let mut draft = FabricDraft::sample();
        draft.price = 1200.0;
        let output = CatalogExporter::new().export(&[record(draft)]).unwrap();
        assert!(output.lines().nth(1).unwrap().contains(",1200,"));
    }

    #[test]
    fn test_round_trip_preserves_fields_except_identity() {
        let mut draft = FabricDraft::sample();
        draft.name = "Лён, классический".to_string();
        draft.description = "Ткань \"люкс\"\nдве строки".to_string();
        let original = record(draft);

        let output = CatalogExporter::new().export(&[original.clone()]).unwrap();
        let report = CatalogImporter::new()
            .import_str("tkani-catalog.csv", &output)
            .unwrap();
        assert_eq!(report.total_rows, 1);

        let imported = &report.drafts[0];
        assert_eq!(imported.name, original.name);
        assert_eq!(imported.category, original.category);
        assert_eq!(imported.price, original.price);
        assert_eq!(imported.image, original.image);
        assert_eq!(imported.description, original.description);
        assert_eq!(imported.details, original.details);
        assert_eq!(imported.features, original.features);
        assert_eq!(imported.applications, original.applications);
    }

    mod round_trip_properties {
        use super::*;
        use proptest::prelude::*;

        prop_compose! {
            // Free text including commas, quotes, and line breaks; the quoted
            // dialect must carry all of it.
            fn arb_field()(s in "[а-яА-Яa-zA-Z0-9 ,\"«»°%./-]{1,30}") -> String {
                s
            }
        }

        prop_compose! {
            fn arb_record()(
                name in arb_field(),
                category in arb_field(),
                price in 0.0f64..100_000.0,
                image in arb_field(),
                description in "[а-яa-z \n,\"]{1,40}",
                width in arb_field(),
                weight in arb_field(),
                composition in arb_field(),
                origin in arb_field(),
                care_instructions in arb_field(),
                features in prop::collection::vec(arb_field(), 0..=schema::LIST_SLOTS),
                applications in prop::collection::vec(arb_field(), 0..=schema::LIST_SLOTS),
            ) -> FabricRecord {
                FabricRecord::new("1".to_string(), FabricDraft {
                    name,
                    category,
                    price,
                    image,
                    description,
                    details: tkani_models::FabricDetails {
                        width,
                        weight,
                        composition,
                        origin,
                        care_instructions,
                    },
                    features,
                    applications,
                })
            }
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(100))]

            #[test]
            fn prop_export_import_round_trip(records in prop::collection::vec(arb_record(), 0..5)) {
                // Imported list entries are trimmed; pre-trim so equality is exact.
                let records: Vec<FabricRecord> = records
                    .into_iter()
                    .map(|mut r| {
                        r.features = r.features.iter().map(|s| s.trim().to_string())
                            .filter(|s| !s.is_empty()).collect();
                        r.applications = r.applications.iter().map(|s| s.trim().to_string())
                            .filter(|s| !s.is_empty()).collect();
                        r
                    })
                    .collect();

                let output = CatalogExporter::new().export(&records).unwrap();
                let report = CatalogImporter::new()
                    .import_str("tkani-catalog.csv", &output)
                    .unwrap();

                prop_assert_eq!(report.total_rows, records.len());
                for (imported, original) in report.drafts.iter().zip(&records) {
                    prop_assert_eq!(&imported.name, &original.name);
                    prop_assert_eq!(&imported.category, &original.category);
                    // Display→parse keeps f64 identity for finite values.
                    prop_assert_eq!(imported.price, original.price);
                    prop_assert_eq!(&imported.description, &original.description);
                    prop_assert_eq!(&imported.details, &original.details);
                    prop_assert_eq!(&imported.features, &original.features);
                    prop_assert_eq!(&imported.applications, &original.applications);
                }
            }
        }
    }
}
