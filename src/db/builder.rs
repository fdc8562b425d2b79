use std::collections::BTreeSet;

use tracing::{debug, info};

use crate::codec::catalog_of;
use crate::core::catalog::Catalog;
use crate::core::index::CatalogIndex;
use crate::core::object::CelestialObject;
use crate::db::aliases::AliasTable;
use crate::db::objects::ObjectTable;
use crate::db::store::ObjectDb;
use crate::db::DbConfig;

/// Single-writer ingestion front of an object database.
///
/// Derived views are recomputed on every call while ingestion is running;
/// [`build`](Self::build) freezes the data into an [`ObjectDb`].
#[derive(Debug, Clone)]
pub struct ObjectDbBuilder {
    config: DbConfig,
    objects: ObjectTable,
    aliases: AliasTable,
}

impl ObjectDbBuilder {
    pub fn new() -> Self {
        Self::with_config(DbConfig::default())
    }

    pub fn with_config(config: DbConfig) -> Self {
        Self {
            config,
            objects: ObjectTable::new(&config),
            aliases: AliasTable::new(),
        }
    }

    pub fn config(&self) -> DbConfig {
        self.config
    }

    /// Add an object; if one is already stored under its index only the
    /// common names are merged. Returns `true` if the object was new.
    pub fn add_object(&mut self, object: CelestialObject) -> bool {
        self.objects.insert(object)
    }

    /// Attach a common name to a stored object; `false` if there is none
    pub fn add_common_name(&mut self, index: CatalogIndex, name: impl Into<String>) -> bool {
        match self.objects.get_mut(index) {
            Some(object) => {
                object.common_names.insert(name.into());
                true
            }
            None => false,
        }
    }

    /// Record that `a` and `b` name the same object, in both directions.
    ///
    /// Every pair gets its own direct edge even when a longer chain already
    /// connects them: alias-only lookups follow a single hop. Returns `false`
    /// when both directions were already recorded.
    pub fn add_cross_reference(&mut self, a: CatalogIndex, b: CatalogIndex) -> bool {
        if a == b {
            return false;
        }
        let forward = self.aliases.insert_edge(a, b);
        let backward = self.aliases.insert_edge(b, a);
        if !(forward || backward) {
            debug!("Skipping alias {a} <-> {b}: already recorded");
        }
        forward || backward
    }

    /// Record that the duplicate marker `duplicate` re-observes `target`
    pub fn add_duplicate_of(&mut self, duplicate: CatalogIndex, target: CatalogIndex) -> bool {
        self.aliases.insert_edge(duplicate, target)
    }

    pub fn all_object_indices(&self) -> BTreeSet<CatalogIndex> {
        collect_object_indices(&self.objects)
    }

    pub fn catalogs(&self) -> BTreeSet<Catalog> {
        collect_catalogs(&self.objects, &self.aliases)
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    pub fn alias_count(&self) -> usize {
        self.aliases.edge_count()
    }

    pub fn try_get_cross_indices(&self, index: CatalogIndex) -> BTreeSet<CatalogIndex> {
        self.aliases.cross_indices(index)
    }

    /// Freeze into an immutable store
    pub fn build(self) -> ObjectDb {
        info!(
            "Built object database: {} objects ({} dense), {} alias edges",
            self.objects.len(),
            self.objects.dense_len(),
            self.aliases.edge_count()
        );
        ObjectDb::new(self.objects, self.aliases)
    }
}

impl Default for ObjectDbBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn collect_object_indices(objects: &ObjectTable) -> BTreeSet<CatalogIndex> {
    objects.iter().map(|object| object.index).collect()
}

pub(crate) fn collect_catalogs(objects: &ObjectTable, aliases: &AliasTable) -> BTreeSet<Catalog> {
    objects
        .iter()
        .map(|object| object.index)
        .chain(aliases.keys())
        .filter_map(catalog_of)
        .collect()
}
