//! Fixed positional layout of a catalog CSV row.
//!
//! 18 columns: 10 scalar/detail fields followed by four feature slots and
//! four application slots. Field identity is column position; the Russian
//! header names below are emitted on export and skipped on import.

/// Total columns in a well-formed row.
pub const COLUMN_COUNT: usize = 18;

/// Reserved columns per list (`features`, `applications`).
pub const LIST_SLOTS: usize = tkani_models::MAX_LIST_SLOTS;

/// Canonical download filename for a catalog export.
pub const EXPORT_FILE_NAME: &str = "tkani-catalog.csv";

/// The fixed header row, in column order.
pub const HEADER: [&str; COLUMN_COUNT] = [
    "название",
    "категория",
    "цена",
    "ссылка_на_изображение",
    "описание",
    "ширина",
    "плотность",
    "состав",
    "происхождение",
    "уход",
    "особенность1",
    "особенность2",
    "особенность3",
    "особенность4",
    "применение1",
    "применение2",
    "применение3",
    "применение4",
];

// Column indices.
pub const COL_NAME: usize = 0;
pub const COL_CATEGORY: usize = 1;
pub const COL_PRICE: usize = 2;
pub const COL_IMAGE: usize = 3;
pub const COL_DESCRIPTION: usize = 4;
pub const COL_WIDTH: usize = 5;
pub const COL_WEIGHT: usize = 6;
pub const COL_COMPOSITION: usize = 7;
pub const COL_ORIGIN: usize = 8;
pub const COL_CARE: usize = 9;
/// First of the four feature columns.
pub const COL_FEATURES: usize = 10;
/// First of the four application columns.
pub const COL_APPLICATIONS: usize = 14;

// Fallback values substituted for missing or empty scalar fields on import.
pub const FALLBACK_NAME: &str = "Название не указано";
pub const FALLBACK_CATEGORY: &str = "Категория не указана";
pub const FALLBACK_DESCRIPTION: &str = "Описание отсутствует";
pub const FALLBACK_DETAIL: &str = "Не указано";
pub const FALLBACK_IMAGE: &str = "https://images.unsplash.com/photo-1620437064667-949239d3540e";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_is_consistent() {
        assert_eq!(HEADER.len(), COLUMN_COUNT);
        assert_eq!(COL_FEATURES + LIST_SLOTS, COL_APPLICATIONS);
        assert_eq!(COL_APPLICATIONS + LIST_SLOTS, COLUMN_COUNT);
    }
}
