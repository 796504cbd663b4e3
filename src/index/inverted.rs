use std::borrow::Borrow;
use std::fmt::Debug;
use std::hash::Hash;
use log::debug;
use serde::{Serialize, Deserialize};
use crate::core::error::{Error, Result};
use crate::core::types::{DocKey, FieldIndex};
use crate::index::indexer::AnalyzedField;
use crate::index::posting::{PostingList, TermPostings};
use crate::index::registry::{DocumentRegistry, TombstoneSet};
use crate::index::stats::{FieldStatistics, FieldStats};
use crate::index::store::PostingsStore;

/// What a vacuum pass removed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacuumSummary {
    pub purged_documents: usize,
    pub purged_postings: usize,
    pub purged_terms: usize,
}

/// Inverted index structure
///
/// Owns the postings, the per-field length statistics and the document
/// registry. Removal only tombstones a key; `vacuum` purges tombstoned keys
/// from postings and statistics.
#[derive(Debug, Clone)]
pub struct InvertedIndex<I> {
    postings: PostingsStore,
    field_stats: FieldStatistics,
    registry: DocumentRegistry<I>,
}

impl<I> InvertedIndex<I>
where
    I: Eq + Hash + Clone + Debug,
{
    pub fn new(field_count: usize) -> Self {
        InvertedIndex {
            postings: PostingsStore::new(),
            field_stats: FieldStatistics::new(field_count),
            registry: DocumentRegistry::new(field_count),
        }
    }

    /// Appends a field slot. Only valid before any document was added.
    pub fn add_field(&mut self) -> Result<FieldIndex> {
        if self.registry.assigned_keys() > 0 {
            return Err(Error::configuration("fields must be registered before the first document is added"));
        }
        self.registry.push_field();
        Ok(self.field_stats.push_field())
    }

    pub fn field_count(&self) -> usize {
        self.field_stats.len()
    }

    /// Live documents. Reflects removals immediately.
    pub fn size(&self) -> usize {
        self.registry.live_count()
    }

    pub fn tombstone_count(&self) -> usize {
        self.registry.tombstones().len()
    }

    pub fn term_count(&self) -> usize {
        self.postings.term_count()
    }

    pub fn contains<Q>(&self, id: &Q) -> bool
    where
        I: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.registry.live_key(id).is_some()
    }

    pub fn check_absent(&self, id: &I) -> Result<()> {
        self.registry.check_absent(id)
    }

    /// Registers `id` and records its analyzed fields. Nothing is mutated on error.
    pub fn insert(&mut self, id: I, fields: Vec<AnalyzedField>) -> Result<DocKey> {
        let field_count = self.field_count();
        if field_count == 0 {
            return Err(Error::configuration("no fields registered"));
        }
        if fields.len() != field_count {
            return Err(Error::invalid_argument(format!(
                "expected {} analyzed fields, got {}",
                field_count,
                fields.len()
            )));
        }
        self.registry.check_absent(&id)?;

        let lengths: Box<[u32]> = fields.iter().map(|field| field.length).collect();
        let key = self.registry.register(id, lengths.clone())?;

        for (field_index, field) in fields.iter().enumerate() {
            for (term, &count) in &field.term_freqs {
                self.postings.add_occurrences(term, field_index, key, count);
            }
        }

        self.field_stats.add_lengths(&lengths);
        self.field_stats.recompute(self.registry.registered());
        Ok(key)
    }

    /// Tombstones the live document `id`. Postings and length sums are untouched.
    pub fn remove<Q>(&mut self, id: &Q) -> Result<DocKey>
    where
        I: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        self.registry.tombstone(id)
    }

    /// Purges tombstoned documents and restores exact field statistics.
    pub fn vacuum(&mut self) -> Result<VacuumSummary> {
        let tombstoned = self.registry.tombstones().len();
        if tombstoned == 0 {
            return Ok(VacuumSummary::default());
        }

        let purge = self.postings.purge(self.registry.tombstones());
        let freed = self.registry.purge_tombstoned();
        self.field_stats.subtract_lengths(&freed)?;
        self.field_stats.recompute(self.registry.registered());

        let summary = VacuumSummary {
            purged_documents: tombstoned,
            purged_postings: purge.postings_removed,
            purged_terms: purge.terms_removed,
        };
        debug!(
            "vacuum purged {} documents, {} postings, {} terms",
            summary.purged_documents, summary.purged_postings, summary.purged_terms
        );
        Ok(summary)
    }

    pub fn lookup(&self, term: &str) -> Option<&TermPostings> {
        self.postings.lookup(term)
    }

    pub fn postings(&self, term: &str, field: FieldIndex) -> Option<&PostingList> {
        self.postings.postings(term, field)
    }

    /// Indexed terms starting with `prefix`, ascending.
    pub fn expand(&self, prefix: &str) -> Vec<String> {
        self.postings.expand(prefix)
    }

    pub fn tombstones(&self) -> &TombstoneSet {
        self.registry.tombstones()
    }

    pub fn is_tombstoned(&self, key: DocKey) -> bool {
        self.registry.is_tombstoned(key)
    }

    pub fn resolve(&self, key: DocKey) -> Option<&I> {
        self.registry.id(key)
    }

    pub fn field_length(&self, key: DocKey, field: FieldIndex) -> Option<u32> {
        self.registry.field_length(key, field)
    }

    /// Stored statistics; tombstoned lengths stay counted until vacuum.
    pub fn field_stats(&self, field: FieldIndex) -> Option<&FieldStats> {
        self.field_stats.get(field)
    }

    /// Average field length over live documents only.
    pub fn live_avg_field_length(&self, field: FieldIndex) -> f64 {
        let live = self.size();
        let Some(stats) = self.field_stats.get(field) else {
            return 0.0;
        };
        if live == 0 {
            return 0.0;
        }
        let tombstoned = self.registry.tombstoned_lengths().get(field).copied().unwrap_or(0);
        stats.sum_lengths.saturating_sub(tombstoned) as f64 / live as f64
    }

    /// Live documents containing `term` in `field`.
    pub fn doc_frequency(&self, term: &str, field: FieldIndex) -> usize {
        self.postings(term, field)
            .map(|list| list.live_doc_freq(self.registry.tombstones()))
            .unwrap_or(0)
    }

    /// Per-field length sums recomputed from the registry.
    pub fn recount_lengths(&self) -> Vec<u64> {
        self.registry.recount_lengths()
    }
}
