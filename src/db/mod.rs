//! Cross-reference resolution engine.
//!
//! Objects are ingested through a single-writer [`ObjectDbBuilder`] and
//! frozen into an immutable [`ObjectDb`] that any number of threads may
//! read without locking.
//!
//! ## Resolution
//!
//! 1. Direct hit on a non-duplicate object.
//! 2. Identifiers of alias-only catalogs (Messier, IC, HIP, ...) fall back to
//!    their alias entry: primary alias first, then the extras in order.
//! 3. A hit on a duplicate marker follows its alias entry once more and
//!    succeeds only if exactly one distinct real object is reachable.
//!
//! ```rust
//! use sky_xref::core::object::CelestialObject;
//! use sky_xref::core::types::ObjectType;
//! use sky_xref::codec::encode;
//! use sky_xref::db::ObjectDbBuilder;
//!
//! let ngc224 = encode("NGC 224").unwrap();
//! let m31 = encode("M31").unwrap();
//!
//! let mut builder = ObjectDbBuilder::new();
//! builder.add_object(CelestialObject::new(ngc224, ObjectType::Galaxy));
//! builder.add_cross_reference(ngc224, m31);
//! let db = builder.build();
//!
//! assert_eq!(db.try_lookup_by_index(m31).map(|o| o.index), Some(ngc224));
//! ```

pub mod aliases;
pub mod builder;
pub mod document;
pub mod objects;
pub mod shared;
pub mod store;

use serde::{Deserialize, Serialize};

use crate::core::catalog::Catalog;

pub use aliases::{AliasEntry, AliasTable};
pub use builder::ObjectDbBuilder;
pub use document::{ObjectDocument, DOCUMENT_VERSION};
pub use shared::SharedObjectDb;
pub use store::{DbError, LookupError, ObjectDb, Resolved};

/// Storage configuration of an object database
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbConfig {
    /// Densely numbered catalog stored in a flat array at `number - 1`
    pub dense_catalog: Option<Catalog>,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            dense_catalog: Some(Catalog::Hip),
        }
    }
}
