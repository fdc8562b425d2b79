use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::codec::encode;
use crate::core::index::CatalogIndex;
use crate::core::object::CelestialObject;
use crate::core::types::ObjectType;
use crate::db::builder::ObjectDbBuilder;
use crate::db::store::{DbError, ObjectDb};
use crate::db::DbConfig;

/// Document version for compatibility checking
pub const DOCUMENT_VERSION: &str = "1.0.0";

fn unknown_position() -> f64 {
    f64::NAN
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_unknown(value: &f64) -> bool {
    value.is_nan()
}

/// Serializable object database
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectDocument {
    pub version: String,
    pub created_at: String,
    pub objects: Vec<ObjectRecord>,

    /// Alias edges between identifiers that have no object record
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<AliasRecord>,
}

/// One object as written in a document; indices are designation text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectRecord {
    pub index: String,

    #[serde(rename = "type", default)]
    pub object_type: ObjectType,

    #[serde(default = "unknown_position", skip_serializing_if = "is_unknown")]
    pub ra: f64,

    #[serde(default = "unknown_position", skip_serializing_if = "is_unknown")]
    pub dec: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constellation: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub v_mag: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surface_brightness: Option<f32>,

    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub common_names: BTreeSet<String>,

    /// Synonyms in other catalogs (bidirectional)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cross_ids: Vec<String>,

    /// Objects a duplicate marker re-observes (unidirectional)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub duplicate_of: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AliasRecord {
    pub index: String,
    pub cross_ids: Vec<String>,
}

fn parse_index(text: &str) -> Result<CatalogIndex, DbError> {
    encode(text).map_err(|source| DbError::InvalidIndex {
        text: text.to_string(),
        source,
    })
}

fn render_indices(indices: impl Iterator<Item = CatalogIndex>) -> Vec<String> {
    indices.map(|index| index.to_string()).collect()
}

impl ObjectRecord {
    fn to_object(&self) -> Result<CelestialObject, DbError> {
        let mut object = CelestialObject::new(parse_index(&self.index)?, self.object_type)
            .with_position(self.ra, self.dec);
        if let Some(constellation) = &self.constellation {
            object = object.with_constellation(constellation.as_str());
        }
        if let Some(v_mag) = self.v_mag {
            object = object.with_magnitude(v_mag);
        }
        object.surface_brightness = self.surface_brightness;
        object.merge_common_names(self.common_names.iter().cloned());
        Ok(object)
    }

    fn from_object(object: &CelestialObject, db: &ObjectDb) -> Self {
        let edges = db.aliases().get(object.index);
        let targets = || edges.into_iter().flat_map(|entry| entry.iter());
        let (cross_ids, duplicate_of) = if object.is_duplicate() {
            (Vec::new(), render_indices(targets()))
        } else {
            (render_indices(targets()), Vec::new())
        };

        Self {
            index: object.index.to_string(),
            object_type: object.object_type,
            ra: object.ra,
            dec: object.dec,
            constellation: object.constellation.clone(),
            v_mag: object.v_mag,
            surface_brightness: object.surface_brightness,
            common_names: object.common_names.clone(),
            cross_ids,
            duplicate_of,
        }
    }
}

impl ObjectDocument {
    /// Parse a document; a version mismatch is only logged
    pub fn from_json(json: &str) -> Result<Self, DbError> {
        let document: Self = serde_json::from_str(json)?;
        if document.version != DOCUMENT_VERSION {
            warn!(
                "Object database version mismatch (expected {}, found {})",
                DOCUMENT_VERSION, document.version
            );
        }
        Ok(document)
    }

    /// Snapshot a database, objects and alias-only entries in identifier order
    pub fn from_db(db: &ObjectDb) -> Self {
        let mut stored: Vec<&CelestialObject> = db.objects().collect();
        stored.sort_by_key(|object| object.index);
        let objects = stored
            .into_iter()
            .map(|object| ObjectRecord::from_object(object, db))
            .collect();

        let mut entries: Vec<_> = db
            .aliases()
            .iter()
            .filter(|(index, _)| !db.all_object_indices().contains(index))
            .collect();
        entries.sort_by_key(|(index, _)| *index);
        let aliases = entries
            .into_iter()
            .map(|(index, entry)| AliasRecord {
                index: index.to_string(),
                cross_ids: render_indices(entry.iter()),
            })
            .collect();

        Self {
            version: DOCUMENT_VERSION.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            objects,
            aliases,
        }
    }

    pub fn to_json(&self) -> Result<String, DbError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Replay the document into a builder: objects first, then alias edges
    pub fn into_builder(self, config: DbConfig) -> Result<ObjectDbBuilder, DbError> {
        let mut builder = ObjectDbBuilder::with_config(config);

        for record in &self.objects {
            builder.add_object(record.to_object()?);
        }

        for record in &self.objects {
            let index = parse_index(&record.index)?;
            for text in &record.cross_ids {
                builder.add_cross_reference(index, parse_index(text)?);
            }
            for text in &record.duplicate_of {
                builder.add_duplicate_of(index, parse_index(text)?);
            }
        }

        for record in &self.aliases {
            let index = parse_index(&record.index)?;
            for text in &record.cross_ids {
                builder.add_cross_reference(index, parse_index(text)?);
            }
        }

        Ok(builder)
    }
}
