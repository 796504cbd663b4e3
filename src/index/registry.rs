use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use roaring::RoaringBitmap;
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::{DocKey, FieldIndex};

/// Keys of documents that are removed but not yet purged.
#[derive(Debug, Clone, Default)]
pub struct TombstoneSet {
    keys: RoaringBitmap,
}

impl TombstoneSet {
    pub fn new() -> Self {
        TombstoneSet {
            keys: RoaringBitmap::new(),
        }
    }

    pub fn insert(&mut self, key: DocKey) -> bool {
        self.keys.insert(key.0)
    }

    pub fn contains(&self, key: DocKey) -> bool {
        self.keys.contains(key.0)
    }

    pub fn len(&self) -> usize {
        self.keys.len() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = DocKey> + '_ {
        self.keys.iter().map(DocKey)
    }
}

#[derive(Debug, Clone)]
struct DocEntry<I> {
    id: I,
    field_lengths: Box<[u32]>,
}

/// Maps external ids to dense keys and keeps per-document field lengths.
///
/// Entries are indexed by key. A key is live while its id maps to it, and
/// tombstoned once removed; its entry is dropped by `purge_tombstoned`.
#[derive(Debug, Clone)]
pub struct DocumentRegistry<I> {
    live: HashMap<I, DocKey>,
    entries: Vec<Option<DocEntry<I>>>,
    tombstones: TombstoneSet,
    /// Entries not yet purged, live or tombstoned.
    registered: usize,
    /// Per-field length sum over tombstoned entries.
    tombstoned_lengths: Vec<u64>,
}

impl<I> DocumentRegistry<I>
where
    I: Eq + Hash + Clone + Debug,
{
    pub fn new(field_count: usize) -> Self {
        DocumentRegistry {
            live: HashMap::new(),
            entries: Vec::new(),
            tombstones: TombstoneSet::new(),
            registered: 0,
            tombstoned_lengths: vec![0; field_count],
        }
    }

    pub fn push_field(&mut self) {
        self.tombstoned_lengths.push(0);
    }

    /// Keys ever assigned, purged ones included.
    pub fn assigned_keys(&self) -> usize {
        self.entries.len()
    }

    pub fn registered(&self) -> usize {
        self.registered
    }

    pub fn live_count(&self) -> usize {
        self.registered - self.tombstones.len()
    }

    pub fn tombstones(&self) -> &TombstoneSet {
        &self.tombstones
    }

    pub fn tombstoned_lengths(&self) -> &[u64] {
        &self.tombstoned_lengths
    }

    pub fn live_key<Q>(&self, id: &Q) -> Option<DocKey>
    where
        I: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.live.get(id).copied()
    }

    /// Key the next `register` call will assign.
    pub fn next_key(&self) -> Result<DocKey> {
        u32::try_from(self.entries.len())
            .map(DocKey)
            .map_err(|_| Error::new(ErrorKind::InvalidArgument, "document key space exhausted".to_string()))
    }

    pub fn check_absent(&self, id: &I) -> Result<()> {
        if self.live.contains_key(id) {
            return Err(Error::new(
                ErrorKind::DuplicateDocument,
                format!("document {:?} is already indexed", id),
            ));
        }
        Ok(())
    }

    pub fn register(&mut self, id: I, field_lengths: Box<[u32]>) -> Result<DocKey> {
        self.check_absent(&id)?;
        let key = self.next_key()?;
        self.live.insert(id.clone(), key);
        self.entries.push(Some(DocEntry { id, field_lengths }));
        self.registered += 1;
        Ok(key)
    }

    pub fn tombstone<Q>(&mut self, id: &Q) -> Result<DocKey>
    where
        I: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        let key = self.live.remove(id).ok_or_else(|| {
            Error::new(ErrorKind::UnknownDocument, format!("document {:?} is not indexed", id))
        })?;
        self.tombstones.insert(key);
        if let Some(entry) = self.entries.get(key.index()).and_then(Option::as_ref) {
            for (sum, &len) in self.tombstoned_lengths.iter_mut().zip(entry.field_lengths.iter()) {
                *sum += u64::from(len);
            }
        }
        Ok(key)
    }

    fn entry(&self, key: DocKey) -> Option<&DocEntry<I>> {
        self.entries.get(key.index()).and_then(Option::as_ref)
    }

    pub fn id(&self, key: DocKey) -> Option<&I> {
        self.entry(key).map(|entry| &entry.id)
    }

    pub fn field_length(&self, key: DocKey, field: FieldIndex) -> Option<u32> {
        self.entry(key)
            .map(|entry| entry.field_lengths.get(field).copied().unwrap_or(0))
    }

    pub fn is_tombstoned(&self, key: DocKey) -> bool {
        self.tombstones.contains(key)
    }

    /// Drops every tombstoned entry and clears the tombstone set.
    /// Returns the per-field lengths those entries contributed.
    pub fn purge_tombstoned(&mut self) -> Vec<u64> {
        for key in self.tombstones.iter() {
            if let Some(slot) = self.entries.get_mut(key.index()) {
                if slot.take().is_some() {
                    self.registered -= 1;
                }
            }
        }
        self.tombstones.clear();
        let freed = vec![0; self.tombstoned_lengths.len()];
        std::mem::replace(&mut self.tombstoned_lengths, freed)
    }

    /// Recomputes per-field length sums over all registered entries.
    pub fn recount_lengths(&self) -> Vec<u64> {
        let mut sums = vec![0u64; self.tombstoned_lengths.len()];
        for entry in self.entries.iter().flatten() {
            for (sum, &len) in sums.iter_mut().zip(entry.field_lengths.iter()) {
                *sum += u64::from(len);
            }
        }
        sums
    }
}
