use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use once_cell::sync::OnceCell;
use thiserror::Error;
use tracing::debug;

use crate::codec::{catalog_of, encode, CodecError};
use crate::core::catalog::Catalog;
use crate::core::index::CatalogIndex;
use crate::core::object::CelestialObject;
use crate::db::aliases::AliasTable;
use crate::db::builder::{collect_catalogs, collect_object_indices};
use crate::db::document::ObjectDocument;
use crate::db::objects::ObjectTable;
use crate::db::DbConfig;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("{0} is not in the object database")]
    NotFound(CatalogIndex),

    #[error("{index} is a duplicate of {} distinct objects", .candidates.len())]
    AmbiguousDuplicate {
        index: CatalogIndex,
        candidates: Vec<CatalogIndex>,
    },
}

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Failed to read object database: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse object database: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid index '{text}' in object database: {source}")]
    InvalidIndex {
        text: String,
        #[source]
        source: CodecError,
    },

    #[error("Object database is already initialized")]
    AlreadyInitialized,
}

/// Outcome of a successful resolution
#[derive(Debug, Clone, Copy)]
pub struct Resolved<'a> {
    pub object: &'a CelestialObject,
    /// Identifier the object was actually found under
    pub via: CatalogIndex,
}

#[derive(Debug, Default)]
struct CommonNameIndex {
    names: BTreeSet<String>,
    by_key: HashMap<String, BTreeSet<CatalogIndex>>,
}

fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Immutable, initialized object database.
///
/// Safe to share across threads; derived views are computed on first use
/// and memoized.
#[derive(Debug)]
pub struct ObjectDb {
    objects: ObjectTable,
    aliases: AliasTable,
    all_indices: OnceCell<BTreeSet<CatalogIndex>>,
    catalogs: OnceCell<BTreeSet<Catalog>>,
    common_names: OnceCell<CommonNameIndex>,
}

impl ObjectDb {
    pub(crate) fn new(objects: ObjectTable, aliases: AliasTable) -> Self {
        Self {
            objects,
            aliases,
            all_indices: OnceCell::new(),
            catalogs: OnceCell::new(),
            common_names: OnceCell::new(),
        }
    }

    /// Load the embedded sample database
    pub fn load_embedded() -> Result<Self, DbError> {
        // Validated at compile time by build.rs
        const EMBEDDED_OBJECTS: &str = include_str!("../../catalogs/objects.json");
        Self::from_json(EMBEDDED_OBJECTS)
    }

    /// Load a database document from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, DbError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self, DbError> {
        Self::from_json_with_config(json, DbConfig::default())
    }

    pub fn from_json_with_config(json: &str, config: DbConfig) -> Result<Self, DbError> {
        let document = ObjectDocument::from_json(json)?;
        Ok(document.into_builder(config)?.build())
    }

    /// Export as a JSON document
    pub fn to_json(&self) -> Result<String, DbError> {
        ObjectDocument::from_db(self).to_json()
    }

    /// Resolve an identifier to its physical object.
    ///
    /// # Errors
    ///
    /// `LookupError::NotFound` if nothing resolves,
    /// `LookupError::AmbiguousDuplicate` if a duplicate marker points at
    /// more than one distinct object.
    pub fn resolve(&self, index: CatalogIndex) -> Result<Resolved<'_>, LookupError> {
        let found = match self.objects.get(index) {
            Some(object) => Resolved { object, via: index },
            None => self
                .resolve_alias(index)
                .ok_or(LookupError::NotFound(index))?,
        };

        if !found.object.is_duplicate() {
            return Ok(found);
        }
        self.resolve_duplicate(index, found.via)
    }

    /// First alias of an alias-only identifier that is stored directly
    fn resolve_alias(&self, index: CatalogIndex) -> Option<Resolved<'_>> {
        if !catalog_of(index).is_some_and(Catalog::is_alias_only) {
            return None;
        }
        self.aliases.get(index)?.iter().find_map(|alias| {
            self.objects
                .get(alias)
                .map(|object| Resolved { object, via: alias })
        })
    }

    fn resolve_duplicate(
        &self,
        index: CatalogIndex,
        duplicate: CatalogIndex,
    ) -> Result<Resolved<'_>, LookupError> {
        let mut candidates: Vec<Resolved<'_>> = Vec::new();
        if let Some(entry) = self.aliases.get(duplicate) {
            for alias in entry.iter() {
                let Some(object) = self.objects.get(alias) else {
                    continue;
                };
                if object.is_duplicate() || candidates.iter().any(|c| c.object.index == object.index) {
                    continue;
                }
                candidates.push(Resolved { object, via: alias });
            }
        }

        match candidates.as_slice() {
            [single] => Ok(*single),
            [] => Err(LookupError::NotFound(index)),
            many => {
                debug!(
                    "Duplicate {duplicate} resolves to {} distinct objects, refusing to guess",
                    many.len()
                );
                Err(LookupError::AmbiguousDuplicate {
                    index,
                    candidates: many.iter().map(|c| c.object.index).collect(),
                })
            }
        }
    }

    pub fn try_lookup_by_index(&self, index: CatalogIndex) -> Option<&CelestialObject> {
        self.resolve(index).ok().map(|resolved| resolved.object)
    }

    /// Encode `name` and look it up; unrecognized names are simply not found
    pub fn try_lookup_by_name(&self, name: &str) -> Option<&CelestialObject> {
        self.try_lookup_by_index(encode(name).ok()?)
    }

    /// Every identifier transitively aliased to `index`, excluding itself
    pub fn try_get_cross_indices(&self, index: CatalogIndex) -> BTreeSet<CatalogIndex> {
        self.aliases.cross_indices(index)
    }

    /// Identifiers of the objects carrying a common name (case-insensitive)
    pub fn try_resolve_common_name(&self, name: &str) -> Option<&BTreeSet<CatalogIndex>> {
        self.common_name_index().by_key.get(&name_key(name))
    }

    pub fn common_names(&self) -> &BTreeSet<String> {
        &self.common_name_index().names
    }

    pub fn all_object_indices(&self) -> &BTreeSet<CatalogIndex> {
        self.all_indices
            .get_or_init(|| collect_object_indices(&self.objects))
    }

    /// Catalogs of stored objects and of aliased identifiers
    pub fn catalogs(&self) -> &BTreeSet<Catalog> {
        self.catalogs
            .get_or_init(|| collect_catalogs(&self.objects, &self.aliases))
    }

    fn common_name_index(&self) -> &CommonNameIndex {
        self.common_names.get_or_init(|| {
            let mut index = CommonNameIndex::default();
            for object in self.objects.iter() {
                for name in &object.common_names {
                    index.names.insert(name.clone());
                    index
                        .by_key
                        .entry(name_key(name))
                        .or_default()
                        .insert(object.index);
                }
            }
            index
        })
    }

    pub fn objects(&self) -> impl Iterator<Item = &CelestialObject> {
        self.objects.iter()
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::ObjectType;
    use crate::db::ObjectDbBuilder;

    fn idx(text: &str) -> CatalogIndex {
        encode(text).unwrap()
    }

    fn object(text: &str, object_type: ObjectType) -> CelestialObject {
        CelestialObject::new(idx(text), object_type)
    }

    fn sample() -> ObjectDb {
        let mut builder = ObjectDbBuilder::new();
        builder.add_object(object("NGC 224", ObjectType::Galaxy).with_common_name("Andromeda Galaxy"));
        builder.add_object(object("NGC 5194", ObjectType::Galaxy).with_common_name("Whirlpool Galaxy"));
        builder.add_object(object("NGC 5195", ObjectType::Galaxy));
        builder.add_object(object("NGC 2", ObjectType::Duplicate));
        builder.add_object(object("NGC 3", ObjectType::Duplicate));
        builder.add_object(object("HIP 32349", ObjectType::Star).with_common_name("Sirius"));

        builder.add_cross_reference(idx("NGC 224"), idx("M31"));
        builder.add_cross_reference(idx("NGC 5194"), idx("M51"));
        builder.add_cross_reference(idx("HIP 32349"), idx("HR 2491"));
        builder.add_duplicate_of(idx("NGC 2"), idx("NGC 224"));
        builder.add_duplicate_of(idx("NGC 3"), idx("NGC 5194"));
        builder.add_duplicate_of(idx("NGC 3"), idx("NGC 5195"));
        builder.build()
    }

    #[test]
    fn test_direct_and_alias_lookup() {
        let db = sample();
        let direct = db.resolve(idx("NGC 224")).unwrap();
        assert_eq!(direct.via, idx("NGC 224"));

        let alias = db.resolve(idx("M31")).unwrap();
        assert_eq!(alias.object.index, idx("NGC 224"));
        assert_eq!(alias.via, idx("NGC 224"));

        assert_eq!(
            db.try_lookup_by_name("HR 2491").map(|o| o.index),
            Some(idx("HIP 32349"))
        );
    }

    #[test]
    fn test_non_alias_only_catalog_does_not_fall_back() {
        // NGC is not alias-only, so an unknown NGC number never borrows an alias
        let mut builder = ObjectDbBuilder::new();
        builder.add_object(object("M40", ObjectType::DoubleStar));
        builder.add_cross_reference(idx("NGC 9999"), idx("M40"));
        let db = builder.build();

        assert_eq!(
            db.resolve(idx("NGC 9999")).unwrap_err(),
            LookupError::NotFound(idx("NGC 9999"))
        );
        assert!(db.try_lookup_by_index(idx("M40")).is_some());
    }

    #[test]
    fn test_duplicate_resolution() {
        let db = sample();
        assert_eq!(
            db.try_lookup_by_index(idx("NGC 2")).map(|o| o.index),
            Some(idx("NGC 224"))
        );

        match db.resolve(idx("NGC 3")) {
            Err(LookupError::AmbiguousDuplicate { index, candidates }) => {
                assert_eq!(index, idx("NGC 3"));
                assert_eq!(candidates, vec![idx("NGC 5194"), idx("NGC 5195")]);
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(db.try_lookup_by_index(idx("NGC 3")).is_none());
    }

    #[test]
    fn test_dangling_duplicate_is_not_found() {
        let mut builder = ObjectDbBuilder::new();
        builder.add_object(object("NGC 4", ObjectType::Duplicate));
        builder.add_duplicate_of(idx("NGC 4"), idx("NGC 5"));
        let db = builder.build();
        assert_eq!(
            db.resolve(idx("NGC 4")).unwrap_err(),
            LookupError::NotFound(idx("NGC 4"))
        );
    }

    #[test]
    fn test_unknown_names() {
        let db = sample();
        assert!(db.try_lookup_by_name("Not an index").is_none());
        assert!(db.try_lookup_by_name("NGC 7000").is_none());
    }

    #[test]
    fn test_common_names_are_case_insensitive() {
        let db = sample();
        let ids = db.try_resolve_common_name("andromeda galaxy").unwrap();
        assert_eq!(ids, &BTreeSet::from([idx("NGC 224")]));
        assert!(db.try_resolve_common_name("Crab Nebula").is_none());
        assert!(db.common_names().contains("Sirius"));
        assert_eq!(db.common_names().len(), 3);
    }

    #[test]
    fn test_memoized_views() {
        let db = sample();
        assert_eq!(db.all_object_indices().len(), 6);
        assert!(db.catalogs().contains(&Catalog::Messier));
        assert!(db.catalogs().contains(&Catalog::Hr));
        assert!(std::ptr::eq(db.catalogs(), db.catalogs()));
    }

    #[test]
    fn test_store_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ObjectDb>();
    }
}
