//! Property-based tests for Tkani core domain models
//!
//! Validates universal properties across the domain models, focusing on
//! serialization round-trip consistency and the list-size invariant.

use proptest::prelude::*;

use crate::{CatalogQuery, FabricDetails, FabricDraft, FabricRecord, SortOrder, MAX_LIST_SLOTS};

prop_compose! {
    fn arb_text()(s in "[а-яА-Яa-zA-Z0-9 ,.\"«»°%-]{0,40}") -> String {
        s
    }
}

prop_compose! {
    fn arb_details()(
        width in arb_text(),
        weight in arb_text(),
        composition in arb_text(),
        origin in arb_text(),
        care_instructions in arb_text(),
    ) -> FabricDetails {
        FabricDetails { width, weight, composition, origin, care_instructions }
    }
}

prop_compose! {
    fn arb_draft()(
        name in "[а-яА-Яa-zA-Z0-9 ]{1,40}",
        category in "[а-яА-Яa-zA-Z ]{1,20}",
        price in 0.0f64..100_000.0,
        image in arb_text(),
        description in arb_text(),
        details in arb_details(),
        features in prop::collection::vec(arb_text(), 0..=MAX_LIST_SLOTS),
        applications in prop::collection::vec(arb_text(), 0..=MAX_LIST_SLOTS),
    ) -> FabricDraft {
        FabricDraft {
            name,
            category,
            price,
            image,
            description,
            details,
            features,
            applications,
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// A record survives a JSON round trip unchanged.
    #[test]
    fn prop_record_json_round_trip(draft in arb_draft()) {
        let record = FabricRecord::new("42".to_string(), draft);
        let json = serde_json::to_string(&record).unwrap();
        let back: FabricRecord = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(record, back);
    }

    /// Normalization never grows a list and is idempotent.
    #[test]
    fn prop_normalized_is_idempotent(draft in arb_draft()) {
        let once = draft.normalized();
        prop_assert!(once.features.len() <= MAX_LIST_SLOTS);
        let twice = once.clone().normalized();
        prop_assert_eq!(once, twice);
    }

    /// Drafts within the list-slot ceiling always pass the list rule.
    #[test]
    fn prop_draft_within_slots_validates(draft in arb_draft()) {
        prop_assert!(validator::Validate::validate(&draft).is_ok());
    }

    /// Any draft with an oversized list fails validation.
    #[test]
    fn prop_oversized_list_rejected(
        draft in arb_draft(),
        extra in (MAX_LIST_SLOTS + 1)..=(MAX_LIST_SLOTS + 4),
    ) {
        let mut draft = draft;
        draft.features = vec!["поле".to_string(); extra];
        prop_assert!(validator::Validate::validate(&draft).is_err());
    }

    /// Query wire names round-trip through serde.
    #[test]
    fn prop_query_round_trip(
        category in proptest::option::of("[а-яА-Я]{1,10}"),
        search in proptest::option::of("[a-z]{1,10}"),
        sort in proptest::option::of(prop_oneof![
            Just(SortOrder::Default),
            Just(SortOrder::PriceAsc),
            Just(SortOrder::PriceDesc),
            Just(SortOrder::Name),
        ]),
    ) {
        let query = CatalogQuery { category, search, sort };
        let json = serde_json::to_string(&query).unwrap();
        let back: CatalogQuery = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(query, back);
    }
}
