use crate::core::types::{DocKey, FieldIndex};
use crate::index::registry::TombstoneSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Posting {
    pub key: DocKey,
    pub term_freq: u32,       // Occurrences of the term in this field of the document
}

/// Posting list for a term in one field
/// Note: Sorted by key for merge-style scans
#[derive(Debug, Clone, Default)]
pub struct PostingList {
    pub postings: Vec<Posting>,  // Sorted by key
}

impl PostingList {
    pub fn new() -> Self {
        PostingList {
            postings: Vec::new(),
        }
    }

    pub fn add_occurrences(&mut self, key: DocKey, count: u32) {
        // Keys are handed out in increasing order, so appending is the common case
        let last_key = self.postings.last().map(|p| p.key);
        match last_key {
            Some(last) if last >= key => {
                match self.postings.binary_search_by_key(&key, |p| p.key) {
                    Ok(pos) => self.postings[pos].term_freq += count,
                    Err(pos) => self.postings.insert(pos, Posting { key, term_freq: count }),
                }
            }
            _ => self.postings.push(Posting { key, term_freq: count }),
        }
    }

    pub fn term_freq(&self, key: DocKey) -> Option<u32> {
        self.postings
            .binary_search_by_key(&key, |p| p.key)
            .ok()
            .map(|pos| self.postings[pos].term_freq)
    }

    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    pub fn iter_live<'a>(&'a self, tombstones: &'a TombstoneSet) -> impl Iterator<Item = &'a Posting> + 'a {
        self.postings.iter().filter(move |p| !tombstones.contains(p.key))
    }

    /// Documents holding the term, tombstones excluded.
    pub fn live_doc_freq(&self, tombstones: &TombstoneSet) -> usize {
        if tombstones.is_empty() {
            return self.postings.len();
        }
        self.iter_live(tombstones).count()
    }

    /// Drops postings of tombstoned documents, returning how many were dropped.
    pub fn purge(&mut self, tombstones: &TombstoneSet) -> usize {
        let before = self.postings.len();
        self.postings.retain(|p| !tombstones.contains(p.key));
        before - self.postings.len()
    }
}

/// All postings of one term, one list per field.
#[derive(Debug, Clone, Default)]
pub struct TermPostings {
    pub fields: Vec<PostingList>,
}

impl TermPostings {
    pub fn new() -> Self {
        TermPostings { fields: Vec::new() }
    }

    pub fn field(&self, field: FieldIndex) -> Option<&PostingList> {
        self.fields.get(field).filter(|list| !list.is_empty())
    }

    pub fn field_mut(&mut self, field: FieldIndex) -> &mut PostingList {
        if self.fields.len() <= field {
            self.fields.resize_with(field + 1, PostingList::new);
        }
        &mut self.fields[field]
    }

    pub fn is_empty(&self) -> bool {
        self.fields.iter().all(PostingList::is_empty)
    }

    pub fn purge(&mut self, tombstones: &TombstoneSet) -> usize {
        let removed = self.fields.iter_mut().map(|list| list.purge(tombstones)).sum();
        while self.fields.last().is_some_and(PostingList::is_empty) {
            self.fields.pop();
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulates_frequency_for_same_key() {
        let mut list = PostingList::new();
        list.add_occurrences(DocKey(0), 1);
        list.add_occurrences(DocKey(0), 2);
        list.add_occurrences(DocKey(3), 1);
        assert_eq!(list.len(), 2);
        assert_eq!(list.term_freq(DocKey(0)), Some(3));
        assert_eq!(list.term_freq(DocKey(3)), Some(1));
        assert_eq!(list.term_freq(DocKey(1)), None);
    }

    #[test]
    fn keeps_keys_sorted_on_out_of_order_insert() {
        let mut list = PostingList::new();
        for key in [5, 1, 3, 1] {
            list.add_occurrences(DocKey(key), 1);
        }
        let keys: Vec<u32> = list.postings.iter().map(|p| p.key.0).collect();
        assert_eq!(keys, vec![1, 3, 5]);
        assert_eq!(list.term_freq(DocKey(1)), Some(2));
    }

    #[test]
    fn purge_and_live_counts_skip_tombstones() {
        let mut list = PostingList::new();
        for key in 0..4 {
            list.add_occurrences(DocKey(key), 1);
        }
        let mut tombstones = TombstoneSet::new();
        tombstones.insert(DocKey(1));
        tombstones.insert(DocKey(2));

        assert_eq!(list.live_doc_freq(&tombstones), 2);
        assert_eq!(list.iter_live(&tombstones).count(), 2);
        assert_eq!(list.purge(&tombstones), 2);
        assert_eq!(list.len(), 2);
        assert_eq!(list.purge(&tombstones), 0);
    }

    #[test]
    fn term_postings_grow_per_field_and_shrink_when_purged() {
        let mut postings = TermPostings::new();
        postings.field_mut(2).add_occurrences(DocKey(7), 1);
        assert_eq!(postings.fields.len(), 3);
        assert!(postings.field(0).is_none());
        assert!(postings.field(2).is_some());

        let mut tombstones = TombstoneSet::new();
        tombstones.insert(DocKey(7));
        assert_eq!(postings.purge(&tombstones), 1);
        assert!(postings.is_empty());
        assert!(postings.fields.is_empty());
    }
}
