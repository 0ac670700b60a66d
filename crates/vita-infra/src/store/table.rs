//! Id-keyed table with its own monotonic counter.

use std::collections::BTreeMap;

use vita_core::domain::EntityId;

/// Rows of one entity kind, iterated in ascending id (insertion) order.
///
/// Ids start at 1 and are never reused. Callers outside the store only ever
/// see clones of the rows.
#[derive(Debug)]
pub(crate) struct Table<T> {
    rows: BTreeMap<EntityId, T>,
    next_id: EntityId,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl<T> Table<T> {
    /// Allocate the next id and store the row built from it.
    pub fn insert_with(&mut self, build: impl FnOnce(EntityId) -> T) -> &mut T {
        let id = self.next_id;
        self.next_id += 1;
        self.rows.entry(id).or_insert(build(id))
    }

    pub fn get(&self, id: EntityId) -> Option<&T> {
        self.rows.get(&id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut T> {
        self.rows.get_mut(&id)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.rows.contains_key(&id)
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.rows.values()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

impl<T: Clone> Table<T> {
    pub fn snapshot(&self, id: EntityId) -> Option<T> {
        self.get(id).cloned()
    }

    /// Clones of every row matching `keep`, in id order.
    pub fn select(&self, keep: impl Fn(&T) -> bool) -> Vec<T> {
        self.values().filter(|row| keep(row)).cloned().collect()
    }

    pub fn all(&self) -> Vec<T> {
        self.values().cloned().collect()
    }
}
