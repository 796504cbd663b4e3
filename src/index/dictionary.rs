use std::collections::BTreeMap;
use std::collections::btree_map;
use std::ops::Bound;

/// Sorted term dictionary supporting exact lookup and prefix walks.
///
/// Terms are kept in a `BTreeMap`, so a prefix walk is a range scan starting
/// at the prefix and stopping at the first term that no longer shares it.
#[derive(Debug, Clone)]
pub struct TermDictionary<V> {
    terms: BTreeMap<String, V>,
}

impl<V> Default for TermDictionary<V> {
    fn default() -> Self {
        TermDictionary::new()
    }
}

impl<V> TermDictionary<V> {
    pub fn new() -> Self {
        TermDictionary {
            terms: BTreeMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains_key(term)
    }

    pub fn get(&self, term: &str) -> Option<&V> {
        self.terms.get(term)
    }

    pub fn get_or_insert_with<F>(&mut self, term: &str, default: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        self.terms.entry(term.to_string()).or_insert_with(default)
    }

    /// Visits every entry mutably and drops those for which `keep` returns false.
    pub fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&String, &mut V) -> bool,
    {
        self.terms.retain(keep);
    }

    /// Entries whose term starts with `prefix`, ascending. Empty prefix yields nothing.
    pub fn prefix_iter<'a>(&'a self, prefix: &'a str) -> PrefixIter<'a, V> {
        PrefixIter {
            inner: self
                .terms
                .range::<str, _>((Bound::Included(prefix), Bound::Unbounded)),
            prefix,
        }
    }

    /// Every term starting with `prefix`, including `prefix` itself when indexed.
    pub fn expand(&self, prefix: &str) -> Vec<String> {
        self.prefix_iter(prefix)
            .map(|(term, _)| term.to_string())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.terms.iter().map(|(term, value)| (term.as_str(), value))
    }
}

pub struct PrefixIter<'a, V> {
    inner: btree_map::Range<'a, String, V>,
    prefix: &'a str,
}

impl<'a, V> Iterator for PrefixIter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.prefix.is_empty() {
            return None;
        }
        let (term, value) = self.inner.next()?;
        if term.starts_with(self.prefix) {
            Some((term.as_str(), value))
        } else {
            // Sorted order: nothing after this can match either.
            self.prefix = "";
            None
        }
    }
}
