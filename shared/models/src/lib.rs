//! # Tkani Core Domain Models
//!
//! This module contains the core domain models for the Tkani fabric catalog.
//! All models implement serialization/deserialization with serde and
//! validation with the validator crate.
//!
//! ## Key Models
//!
//! - **FabricRecord**: a catalog entry with pricing, details, and usage lists
//! - **FabricDraft**: the input shape for creating or updating a record;
//!   carries the admin-workflow validation rules
//! - **CatalogQuery**: browse parameters (category filter, search, sort order)
//!
//! ## Validation
//!
//! Drafts enforce the data-model boundary invariants:
//! - non-empty name and category
//! - at most [`MAX_LIST_SLOTS`] entries in `features` and `applications`
//!
//! Price validation (`> 0`) belongs to the admin create/edit workflow and
//! lives in `tkani-utils`; CSV import deliberately bypasses it.

pub mod fabric;
pub mod query;

#[cfg(test)]
pub mod property_tests;

pub use fabric::{FabricDetails, FabricDraft, FabricRecord, MAX_LIST_SLOTS};
pub use query::{CatalogQuery, SortOrder};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_validation_accepts_complete_draft() {
        let draft = FabricDraft::sample();
        assert!(validator::Validate::validate(&draft).is_ok());
    }

    #[test]
    fn test_draft_validation_rejects_empty_name() {
        let mut draft = FabricDraft::sample();
        draft.name = String::new();
        assert!(validator::Validate::validate(&draft).is_err());
    }

    #[test]
    fn test_draft_validation_rejects_oversized_lists() {
        let mut draft = FabricDraft::sample();
        draft.features = vec!["x".to_string(); MAX_LIST_SLOTS + 1];
        assert!(validator::Validate::validate(&draft).is_err());
    }

    #[test]
    fn test_record_serializes_camel_case() {
        let record = FabricRecord::new("1".to_string(), FabricDraft::sample());
        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("careInstructions").is_none());
        assert!(json["details"].get("careInstructions").is_some());
        assert!(json.get("createdAt").is_some());
    }

    #[test]
    fn test_sort_order_wire_names() {
        assert_eq!(
            serde_json::to_string(&SortOrder::PriceAsc).unwrap(),
            "\"price-asc\""
        );
        assert_eq!(
            serde_json::from_str::<SortOrder>("\"name\"").unwrap(),
            SortOrder::Name
        );
    }
}
