//! Catalog CSV transfer format
//!
//! Bidirectional mapper between [`tkani_models`] records and the fixed
//! 18-column catalog CSV layout. Column position is the contract — the
//! header line is required on import but its content is never consulted.
//!
//! Both directions speak the standard quoted dialect (double-quote
//! enclosure, doubled-quote escaping), so free text containing commas,
//! quotes, or newlines round-trips safely.

pub mod export;
pub mod import;
pub mod schema;

pub use export::CatalogExporter;
pub use import::{CatalogImporter, ImportReport};
pub use schema::{EXPORT_FILE_NAME, HEADER, LIST_SLOTS, COLUMN_COUNT};
