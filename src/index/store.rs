use crate::core::types::{DocKey, FieldIndex};
use crate::index::dictionary::TermDictionary;
use crate::index::posting::{PostingList, TermPostings};
use crate::index::registry::TombstoneSet;

/// What a purge removed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PurgeStats {
    pub postings_removed: usize,
    pub terms_removed: usize,
}

/// Postings for every indexed term, keyed through the term dictionary.
#[derive(Debug, Clone, Default)]
pub struct PostingsStore {
    terms: TermDictionary<TermPostings>,
}

impl PostingsStore {
    pub fn new() -> Self {
        PostingsStore {
            terms: TermDictionary::new(),
        }
    }

    pub fn add_occurrence(&mut self, term: &str, field: FieldIndex, key: DocKey) {
        self.add_occurrences(term, field, key, 1);
    }

    pub fn add_occurrences(&mut self, term: &str, field: FieldIndex, key: DocKey, count: u32) {
        if count == 0 {
            return;
        }
        self.terms
            .get_or_insert_with(term, TermPostings::new)
            .field_mut(field)
            .add_occurrences(key, count);
    }

    pub fn lookup(&self, term: &str) -> Option<&TermPostings> {
        self.terms.get(term)
    }

    pub fn postings(&self, term: &str, field: FieldIndex) -> Option<&PostingList> {
        self.lookup(term).and_then(|postings| postings.field(field))
    }

    pub fn dictionary(&self) -> &TermDictionary<TermPostings> {
        &self.terms
    }

    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    pub fn expand(&self, prefix: &str) -> Vec<String> {
        self.terms.expand(prefix)
    }

    /// Removes every posting of a tombstoned key and every term left without postings.
    pub fn purge(&mut self, tombstones: &TombstoneSet) -> PurgeStats {
        let mut stats = PurgeStats::default();
        if tombstones.is_empty() {
            return stats;
        }
        self.terms.retain(|_, postings| {
            stats.postings_removed += postings.purge(tombstones);
            if postings.is_empty() {
                stats.terms_removed += 1;
                false
            } else {
                true
            }
        });
        stats
    }
}
