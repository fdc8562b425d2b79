//! Core data types for catalog cross-identification.
//!
//! - [`Catalog`](catalog::Catalog): the closed registry of naming schemes, with prefix, template and family
//! - [`CatalogIndex`](index::CatalogIndex): the opaque 64-bit identifier produced by the codec
//! - [`CelestialObject`](object::CelestialObject): the physical-object record stored by the resolution engine
//! - [`ObjectType`](types::ObjectType), [`Epoch`](types::Epoch), [`DisplayFormat`](types::DisplayFormat): small shared enums
//!
//! ## Identifier families
//!
//! | Catalog | Input | Abbreviation | Family |
//! |---------|-------|--------------|--------|
//! | NGC     | `NGC 526A` | `N0526_A` | plain text |
//! | Messier | `M 51a` | `M51a` | plain text |
//! | PSR     | `PSR J0002+6216` | base-91 text | coordinate encoded |
//! | Tycho-2 | `TYC 1234-5678-1` | base-91 text | coordinate encoded |

pub mod catalog;
pub mod index;
pub mod object;
pub mod types;
