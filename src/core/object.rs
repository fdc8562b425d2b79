use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::core::index::CatalogIndex;
use crate::core::types::ObjectType;

fn unknown_position() -> f64 {
    f64::NAN
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_unknown(value: &f64) -> bool {
    value.is_nan()
}

/// A physical object, keyed by its canonical identifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CelestialObject {
    /// Canonical identifier the record is stored under
    pub index: CatalogIndex,

    #[serde(rename = "type", default)]
    pub object_type: ObjectType,

    /// Right ascension in hours (J2000), NaN when unknown
    #[serde(default = "unknown_position", skip_serializing_if = "is_unknown")]
    pub ra: f64,

    /// Declination in degrees (J2000), NaN when unknown
    #[serde(default = "unknown_position", skip_serializing_if = "is_unknown")]
    pub dec: f64,

    /// IAU three-letter constellation abbreviation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constellation: Option<String>,

    /// Visual magnitude
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub v_mag: Option<f32>,

    /// Surface brightness in mag/arcmin²
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surface_brightness: Option<f32>,

    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub common_names: BTreeSet<String>,
}

impl CelestialObject {
    pub fn new(index: CatalogIndex, object_type: ObjectType) -> Self {
        Self {
            index,
            object_type,
            ra: f64::NAN,
            dec: f64::NAN,
            constellation: None,
            v_mag: None,
            surface_brightness: None,
            common_names: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn with_position(mut self, ra: f64, dec: f64) -> Self {
        self.ra = ra;
        self.dec = dec;
        self
    }

    #[must_use]
    pub fn with_constellation(mut self, constellation: impl Into<String>) -> Self {
        self.constellation = Some(constellation.into());
        self
    }

    #[must_use]
    pub fn with_magnitude(mut self, v_mag: f32) -> Self {
        self.v_mag = Some(v_mag);
        self
    }

    #[must_use]
    pub fn with_common_name(mut self, name: impl Into<String>) -> Self {
        self.common_names.insert(name.into());
        self
    }

    pub fn has_position(&self) -> bool {
        !self.ra.is_nan() && !self.dec.is_nan()
    }

    pub fn is_duplicate(&self) -> bool {
        self.object_type == ObjectType::Duplicate
    }

    /// Merge names discovered after the record was first inserted.
    /// Returns how many were new.
    pub fn merge_common_names<I>(&mut self, names: I) -> usize
    where
        I: IntoIterator<Item = String>,
    {
        let before = self.common_names.len();
        self.common_names.extend(names);
        self.common_names.len() - before
    }
}
