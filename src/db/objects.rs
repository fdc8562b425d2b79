use std::collections::HashMap;

use crate::codec::plain_number;
use crate::core::catalog::Catalog;
use crate::core::index::CatalogIndex;
use crate::core::object::CelestialObject;
use crate::db::DbConfig;

/// Upper bound on dense slots; larger numbers fall back to the map
pub const MAX_DENSE_SLOTS: usize = 200_000;

/// Primary object store: a flat array for the dense catalog, a hash map
/// for everything else
#[derive(Debug, Clone, Default)]
pub struct ObjectTable {
    dense_catalog: Option<Catalog>,
    dense: Vec<Option<CelestialObject>>,
    dense_len: usize,
    sparse: HashMap<CatalogIndex, CelestialObject>,
}

impl ObjectTable {
    pub fn new(config: &DbConfig) -> Self {
        Self {
            dense_catalog: config.dense_catalog,
            ..Self::default()
        }
    }

    fn dense_slot(&self, index: CatalogIndex) -> Option<usize> {
        let number = plain_number(index, self.dense_catalog?)?;
        let slot = usize::try_from(number.checked_sub(1)?).ok()?;
        (slot < MAX_DENSE_SLOTS).then_some(slot)
    }

    pub fn get(&self, index: CatalogIndex) -> Option<&CelestialObject> {
        match self.dense_slot(index) {
            Some(slot) => self.dense.get(slot)?.as_ref(),
            None => self.sparse.get(&index),
        }
    }

    pub fn get_mut(&mut self, index: CatalogIndex) -> Option<&mut CelestialObject> {
        match self.dense_slot(index) {
            Some(slot) => self.dense.get_mut(slot)?.as_mut(),
            None => self.sparse.get_mut(&index),
        }
    }

    pub fn contains(&self, index: CatalogIndex) -> bool {
        self.get(index).is_some()
    }

    /// Insert a new object. An object already stored under the same index
    /// only gains the new common names; returns `true` if it was new.
    pub fn insert(&mut self, object: CelestialObject) -> bool {
        if let Some(existing) = self.get_mut(object.index) {
            existing.merge_common_names(object.common_names);
            return false;
        }

        match self.dense_slot(object.index) {
            Some(slot) => {
                if self.dense.len() <= slot {
                    self.dense.resize(slot + 1, None);
                }
                self.dense[slot] = Some(object);
                self.dense_len += 1;
            }
            None => {
                self.sparse.insert(object.index, object);
            }
        }
        true
    }

    pub fn len(&self) -> usize {
        self.dense_len + self.sparse.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of objects held in the flat array
    pub fn dense_len(&self) -> usize {
        self.dense_len
    }

    pub fn iter(&self) -> impl Iterator<Item = &CelestialObject> {
        self.dense.iter().flatten().chain(self.sparse.values())
    }
}
