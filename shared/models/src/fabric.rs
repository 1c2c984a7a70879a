//! Fabric domain models for the Tkani catalog.
//!
//! This module defines the catalog record structures, the draft input shape
//! used by the admin workflow and the CSV importer, and the list-size
//! invariant shared with the transfer format.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Maximum number of entries in `features` and `applications`.
///
/// The CSV transfer format reserves exactly four columns per list, so the
/// data-model boundary enforces the same ceiling rather than letting export
/// emit misaligned columns.
pub const MAX_LIST_SLOTS: usize = 4;

/// A fabric entry in the catalog.
///
/// Identity (`id`) and timestamps are owned by the catalog store; everything
/// else comes from a [`FabricDraft`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FabricRecord {
    pub id: String,
    pub name: String,
    pub category: String,
    /// Price per metre. The admin workflow rejects values `<= 0`; lenient
    /// CSV import may still produce `0` for unparseable input.
    pub price: f64,
    pub image: String,
    pub description: String,
    pub details: FabricDetails,
    pub features: Vec<String>,
    pub applications: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fixed sub-record of free-text fabric specifications. No unit validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FabricDetails {
    pub width: String,
    pub weight: String,
    pub composition: String,
    pub origin: String,
    pub care_instructions: String,
}

/// The input shape for creating or updating a catalog record.
///
/// Carries the admin-workflow validation rules. The CSV importer produces
/// drafts but never validates them (row-shape leniency policy).
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FabricDraft {
    #[validate(length(min = 1, max = 255, message = "Fabric name must be between 1 and 255 characters"))]
    pub name: String,
    #[validate(length(min = 1, max = 100, message = "Category must be between 1 and 100 characters"))]
    pub category: String,
    pub price: f64,
    pub image: String,
    pub description: String,
    pub details: FabricDetails,
    #[validate(custom = "validate_list_slots")]
    pub features: Vec<String>,
    #[validate(custom = "validate_list_slots")]
    pub applications: Vec<String>,
}

fn validate_list_slots(items: &[String]) -> Result<(), ValidationError> {
    if items.len() > MAX_LIST_SLOTS {
        return Err(ValidationError::new("too_many_list_entries"));
    }
    Ok(())
}

impl FabricRecord {
    /// Creates a record from a draft with store-assigned identity.
    pub fn new(id: String, draft: FabricDraft) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: draft.name,
            category: draft.category,
            price: draft.price,
            image: draft.image,
            description: draft.description,
            details: draft.details,
            features: draft.features,
            applications: draft.applications,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces all draft-owned fields, preserving identity and `created_at`.
    pub fn apply_draft(&mut self, draft: FabricDraft) {
        self.name = draft.name;
        self.category = draft.category;
        self.price = draft.price;
        self.image = draft.image;
        self.description = draft.description;
        self.details = draft.details;
        self.features = draft.features;
        self.applications = draft.applications;
        self.updated_at = Utc::now();
    }

    /// Case-insensitive match against a search term over name and description.
    pub fn matches_search(&self, term: &str) -> bool {
        let needle = term.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
    }
}

impl FabricDraft {
    /// Drops list entries that are empty after trimming, preserving order.
    ///
    /// Both the admin form and the CSV importer store lists this way, so a
    /// record never carries blank feature/application slots.
    pub fn normalized(mut self) -> Self {
        self.features = normalize_list(self.features);
        self.applications = normalize_list(self.applications);
        self
    }

    /// A complete, valid draft for fixtures and tests.
    pub fn sample() -> Self {
        Self {
            name: "Хлопок Премиум".to_string(),
            category: "Хлопок".to_string(),
            price: 850.0,
            image: "https://images.unsplash.com/photo-1528459199957-0ff28496a7f6".to_string(),
            description: "Мягкий хлопок высокого качества для пошива одежды".to_string(),
            details: FabricDetails {
                width: "150 см".to_string(),
                weight: "240 г/м²".to_string(),
                composition: "100% хлопок".to_string(),
                origin: "Россия".to_string(),
                care_instructions: "Машинная стирка при 30°C".to_string(),
            },
            features: vec![
                "Высокая прочность".to_string(),
                "Гипоаллергенность".to_string(),
            ],
            applications: vec![
                "Пошив повседневной одежды".to_string(),
                "Детская одежда".to_string(),
            ],
        }
    }
}

fn normalize_list(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}
