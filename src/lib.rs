//! # sky-xref
//!
//! A library for naming astronomical objects across historically independent
//! catalogs and resolving any alias of an object to one canonical record.
//!
//! The same galaxy is `M31`, `NGC 224`, `UGC 454` and
//! `2MASX J00424433+4116074`; a bright star is `HIP 32349`, `HR 2491`,
//! `HD 48915` and `BD-16 1591`. `sky-xref` packs each designation into a
//! single 64-bit [`CatalogIndex`] and keeps an alias graph between them.
//!
//! ## Features
//!
//! - **Reversible codec**: free-form designations become compact identifiers and render back canonically
//! - **Coordinate designations**: 2MASS, PSR, WDS, Bonner Durchmusterung and Tycho-2 names keep every field
//! - **Alias resolution**: alias-only catalogs resolve through their cross-identifications
//! - **Duplicate chains**: duplicate markers resolve to the object they re-observe, unless ambiguous
//! - **Lock-free reads**: an initialized database is immutable and shareable across threads
//!
//! ## Example
//!
//! ```rust
//! use sky_xref::{encode, ObjectDb};
//!
//! // Load the embedded sample database
//! let db = ObjectDb::load_embedded().unwrap();
//!
//! // Messier numbers resolve through their NGC cross-identification
//! let andromeda = db.try_lookup_by_name("M31").unwrap();
//! assert_eq!(andromeda.index, encode("NGC 224").unwrap());
//! assert_eq!(andromeda.index.to_string(), "NGC 0224");
//! ```
//!
//! ## Modules
//!
//! - [`codec`]: identifier encoding, decoding and rendering
//! - [`core`]: catalog registry, identifiers and object records
//! - [`db`]: cross-reference resolution engine
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod codec;
pub mod core;
pub mod db;

// Re-export commonly used types for convenience
pub use codec::{canonical, decode, encode, CodecError};
pub use core::catalog::Catalog;
pub use core::index::CatalogIndex;
pub use core::object::CelestialObject;
pub use core::types::*;
pub use db::{DbError, LookupError, ObjectDb, ObjectDbBuilder, SharedObjectDb};
