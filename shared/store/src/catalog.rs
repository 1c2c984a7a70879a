//! In-memory catalog store with counter-based identity and a change signal.

use std::cmp::Ordering;

use tokio::sync::{watch, RwLock};
use tracing::debug;

use tkani_models::{CatalogQuery, FabricDraft, FabricRecord, SortOrder};

/// The catalog collection.
///
/// Identifiers come from a monotonically increasing counter; values are never
/// reused, so deleting or reordering entries cannot corrupt references held
/// elsewhere. Every mutation bumps a revision observable via [`subscribe`].
///
/// [`subscribe`]: CatalogStore::subscribe
pub struct CatalogStore {
    inner: RwLock<CatalogInner>,
    revision_tx: watch::Sender<u64>,
}

struct CatalogInner {
    fabrics: Vec<FabricRecord>,
    next_id: u64,
    revision: u64,
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogStore {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        let (revision_tx, _) = watch::channel(0);
        Self {
            inner: RwLock::new(CatalogInner {
                fabrics: Vec::new(),
                next_id: 1,
                revision: 0,
            }),
            revision_tx,
        }
    }

    /// Lists records matching the query, in the requested order.
    pub async fn list(&self, query: &CatalogQuery) -> Vec<FabricRecord> {
        let inner = self.inner.read().await;
        let mut result: Vec<FabricRecord> = inner
            .fabrics
            .iter()
            .filter(|fabric| {
                query
                    .category
                    .as_deref()
                    .map_or(true, |category| fabric.category == category)
            })
            .filter(|fabric| {
                query
                    .search
                    .as_deref()
                    .map_or(true, |term| fabric.matches_search(term))
            })
            .cloned()
            .collect();

        match query.sort_order() {
            SortOrder::Default => {}
            SortOrder::PriceAsc => result.sort_by(|a, b| compare_price(a, b)),
            SortOrder::PriceDesc => result.sort_by(|a, b| compare_price(b, a)),
            SortOrder::Name => result.sort_by(|a, b| a.name.cmp(&b.name)),
        }

        result
    }

    /// Fetches a single record by id.
    pub async fn get(&self, id: &str) -> Option<FabricRecord> {
        let inner = self.inner.read().await;
        inner.fabrics.iter().find(|f| f.id == id).cloned()
    }

    /// Up to `limit` other records from the same category.
    ///
    /// Returns `None` when `id` itself is unknown.
    pub async fn related(&self, id: &str, limit: usize) -> Option<Vec<FabricRecord>> {
        let inner = self.inner.read().await;
        let subject = inner.fabrics.iter().find(|f| f.id == id)?;
        Some(
            inner
                .fabrics
                .iter()
                .filter(|f| f.id != id && f.category == subject.category)
                .take(limit)
                .cloned()
                .collect(),
        )
    }

    /// Distinct category names in first-seen order.
    pub async fn categories(&self) -> Vec<String> {
        let inner = self.inner.read().await;
        let mut categories: Vec<String> = Vec::new();
        for fabric in &inner.fabrics {
            if !categories.contains(&fabric.category) {
                categories.push(fabric.category.clone());
            }
        }
        categories
    }

    /// Appends a record, assigning the next identifier.
    pub async fn create(&self, draft: FabricDraft) -> FabricRecord {
        let mut inner = self.inner.write().await;
        let record = Self::append(&mut inner, draft);
        self.bump(&mut inner);
        record
    }

    /// Appends a batch under a single lock acquisition.
    ///
    /// One CSV upload is one atomic append: two overlapping imports
    /// interleave at upload granularity, never record granularity.
    pub async fn create_many(&self, drafts: Vec<FabricDraft>) -> Vec<FabricRecord> {
        let mut inner = self.inner.write().await;
        let records: Vec<FabricRecord> = drafts
            .into_iter()
            .map(|draft| Self::append(&mut inner, draft))
            .collect();
        if !records.is_empty() {
            self.bump(&mut inner);
        }
        debug!(appended = records.len(), total = inner.fabrics.len(), "catalog batch append");
        records
    }

    /// Replaces the draft-owned fields of an existing record.
    ///
    /// Returns the updated record, or `None` for an unknown id.
    pub async fn update(&self, id: &str, draft: FabricDraft) -> Option<FabricRecord> {
        let mut inner = self.inner.write().await;
        let position = inner.fabrics.iter().position(|f| f.id == id)?;
        inner.fabrics[position].apply_draft(draft.normalized());
        let record = inner.fabrics[position].clone();
        self.bump(&mut inner);
        Some(record)
    }

    /// Removes a record. Returns `false` for an unknown id.
    pub async fn delete(&self, id: &str) -> bool {
        let mut inner = self.inner.write().await;
        let Some(position) = inner.fabrics.iter().position(|f| f.id == id) else {
            return false;
        };
        inner.fabrics.remove(position);
        self.bump(&mut inner);
        true
    }

    /// A copy of the full catalog in insertion order, as export consumes it.
    pub async fn snapshot(&self) -> Vec<FabricRecord> {
        self.inner.read().await.fabrics.clone()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.fabrics.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.fabrics.is_empty()
    }

    /// Current revision; bumped once per mutation (batch appends count once).
    pub async fn revision(&self) -> u64 {
        self.inner.read().await.revision
    }

    /// Subscribes to revision changes.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision_tx.subscribe()
    }

    fn append(inner: &mut CatalogInner, draft: FabricDraft) -> FabricRecord {
        let id = inner.next_id.to_string();
        inner.next_id += 1;
        let record = FabricRecord::new(id, draft.normalized());
        inner.fabrics.push(record.clone());
        record
    }

    fn bump(&self, inner: &mut CatalogInner) {
        inner.revision += 1;
        let _ = self.revision_tx.send(inner.revision);
    }
}

fn compare_price(a: &FabricRecord, b: &FabricRecord) -> Ordering {
    a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal)
}
