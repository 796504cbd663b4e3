use std::borrow::Borrow;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Arc;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use crate::core::engine::SearchEngine;
use crate::core::error::Result;
use crate::index::inverted::VacuumSummary;
use crate::search::results::{SearchHit, SearchOptions};

/// Thread-safe handle to a `SearchEngine`.
///
/// Mutations take the write lock; searches share the read lock. Clones
/// point at the same engine.
pub struct SharedEngine<I, D> {
    inner: Arc<RwLock<SearchEngine<I, D>>>,
}

impl<I, D> Clone for SharedEngine<I, D> {
    fn clone(&self) -> Self {
        SharedEngine {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<I, D> SharedEngine<I, D>
where
    I: Eq + Hash + Clone + Debug,
{
    pub fn new(engine: SearchEngine<I, D>) -> Self {
        SharedEngine {
            inner: Arc::new(RwLock::new(engine)),
        }
    }

    pub fn add(&self, id: I, document: &D) -> Result<()> {
        self.inner.write().add(id, document)
    }

    pub fn remove<Q>(&self, id: &Q) -> Result<()>
    where
        I: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        self.inner.write().remove(id)
    }

    pub fn search(&self, query: &str) -> Result<Vec<SearchHit<I>>> {
        self.inner.read().search(query)
    }

    pub fn search_with(&self, query: &str, options: &SearchOptions) -> Result<Vec<SearchHit<I>>> {
        self.inner.read().search_with(query, options)
    }

    pub fn extend_term(&self, term: &str) -> Vec<String> {
        self.inner.read().extend_term(term)
    }

    pub fn query_to_terms(&self, query: &str) -> Vec<String> {
        self.inner.read().query_to_terms(query)
    }

    pub fn vacuum(&self) -> Result<VacuumSummary> {
        self.inner.write().vacuum()
    }

    pub fn size(&self) -> usize {
        self.inner.read().size()
    }

    /// Holds the read lock for several calls against one consistent state.
    pub fn read(&self) -> RwLockReadGuard<'_, SearchEngine<I, D>> {
        self.inner.read()
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, SearchEngine<I, D>> {
        self.inner.write()
    }
}
