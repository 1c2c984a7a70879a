//! # Tkani Catalog Store
//!
//! The owned, in-memory catalog collection shared by every view of the
//! system. Replaces ambient mutable state with an explicit store object:
//! reads and writes go through [`CatalogStore`], identity comes from a
//! counter the store owns, and interested parties subscribe to a revision
//! signal instead of polling.
//!
//! Nothing here persists across process restarts by design.

pub mod catalog;
pub mod seed;

pub use catalog::CatalogStore;
pub use seed::demo_fabrics;
