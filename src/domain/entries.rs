use crate::domain::model::{FlooringEntry, PaintEntry, WindowEntry};
use crate::utils::error::{EstimateError, Result};
use serde::Serialize;
use std::fmt;

/// Stable identity of an entry. Assigned once, never reused within a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct EntryId(u64);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Ordered, immutable entry collection. Every edit returns a new list and
/// edits are keyed by `EntryId`, not by position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntryList<T> {
    next_id: u64,
    ids: Vec<EntryId>,
    entries: Vec<T>,
}

impl<T> Default for EntryList<T> {
    fn default() -> Self {
        Self {
            next_id: 1,
            ids: Vec::new(),
            entries: Vec::new(),
        }
    }
}

impl<T: Clone> EntryList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(&self, entry: T) -> (Self, EntryId) {
        let id = EntryId(self.next_id);
        let mut next = self.clone();
        next.next_id += 1;
        next.ids.push(id);
        next.entries.push(entry);
        (next, id)
    }

    pub fn without(&self, id: EntryId) -> Result<Self> {
        let position = self.position(id)?;
        let mut next = self.clone();
        next.ids.remove(position);
        next.entries.remove(position);
        Ok(next)
    }

    pub fn with_updated<F>(&self, id: EntryId, update: F) -> Result<Self>
    where
        F: FnOnce(&mut T),
    {
        let position = self.position(id)?;
        let mut next = self.clone();
        update(&mut next.entries[position]);
        Ok(next)
    }
}

impl<T> EntryList<T> {
    fn position(&self, id: EntryId) -> Result<usize> {
        self.ids
            .iter()
            .position(|candidate| *candidate == id)
            .ok_or(EstimateError::UnknownEntry { id: id.0 })
    }

    pub fn get(&self, id: EntryId) -> Option<&T> {
        self.position(id).ok().map(|position| &self.entries[position])
    }

    pub fn ids(&self) -> &[EntryId] {
        &self.ids
    }

    pub fn as_slice(&self) -> &[T] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntryId, &T)> {
        self.ids.iter().copied().zip(self.entries.iter())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Clone> FromIterator<T> for EntryList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for entry in iter {
            list.ids.push(EntryId(list.next_id));
            list.entries.push(entry);
            list.next_id += 1;
        }
        list
    }
}

/// The three entry collections of one project.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProjectEntries {
    pub windows: EntryList<WindowEntry>,
    pub paint: EntryList<PaintEntry>,
    pub flooring: EntryList<FlooringEntry>,
}

impl ProjectEntries {
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty() && self.paint.is_empty() && self.flooring.is_empty()
    }
}
