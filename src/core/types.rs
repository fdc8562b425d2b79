use serde::{Deserialize, Serialize};

/// How a catalog's designations are packed into an identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Family {
    /// Abbreviation text packed seven bits per character (MSB clear)
    PlainText,
    /// Structured coordinate payload wrapped in base-91 text (MSB set)
    CoordinateEncoded,
}

impl std::fmt::Display for Family {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PlainText => write!(f, "plain"),
            Self::CoordinateEncoded => write!(f, "coordinate"),
        }
    }
}

/// Equinox a coordinate-bearing designation refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Epoch {
    J2000,
    B1950,
}

impl Epoch {
    /// Single-letter marker used inside designations (`J` / `B`)
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::J2000 => 'J',
            Self::B1950 => 'B',
        }
    }

    #[must_use]
    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'J' => Some(Self::J2000),
            'B' => Some(Self::B1950),
            _ => None,
        }
    }
}

impl std::fmt::Display for Epoch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::J2000 => write!(f, "J2000"),
            Self::B1950 => write!(f, "B1950"),
        }
    }
}

/// Canonical text flavour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayFormat {
    /// Catalog convention, e.g. `NGC 0526`, `M13`
    #[default]
    Normal,
    /// Alternative spelling used for autocomplete, e.g. `Messier 13`, `B 33`
    Alternative,
}

/// Classification of a celestial object.
///
/// Serialized as the short codes used by OpenNGC-style object tables.
/// Deserialization goes through [`ObjectType::parse`], so codes outside
/// this list load as `Other` instead of failing the whole table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String")]
pub enum ObjectType {
    #[serde(rename = "*")]
    Star,
    #[serde(rename = "**")]
    DoubleStar,
    #[serde(rename = "*Ass")]
    StarAssociation,
    #[serde(rename = "OCl")]
    OpenCluster,
    #[serde(rename = "GCl")]
    GlobularCluster,
    #[serde(rename = "Cl+N")]
    ClusterWithNebula,
    #[serde(rename = "G")]
    Galaxy,
    #[serde(rename = "GPair")]
    GalaxyPair,
    #[serde(rename = "GTrpl")]
    GalaxyTriplet,
    #[serde(rename = "GGroup")]
    GalaxyGroup,
    #[serde(rename = "GCluster")]
    GalaxyCluster,
    #[serde(rename = "PN")]
    PlanetaryNebula,
    #[serde(rename = "HII")]
    HiiRegion,
    #[serde(rename = "DrkN")]
    DarkNebula,
    #[serde(rename = "EmN")]
    EmissionNebula,
    #[serde(rename = "Neb")]
    Nebula,
    #[serde(rename = "RfN")]
    ReflectionNebula,
    #[serde(rename = "SNR")]
    SupernovaRemnant,
    #[serde(rename = "Nova")]
    Nova,
    #[serde(rename = "Psr")]
    Pulsar,
    #[serde(rename = "Pl")]
    Planet,
    #[serde(rename = "ExoPl")]
    Exoplanet,
    /// Re-observation of an already catalogued object; resolves through the alias table
    #[serde(rename = "Dup")]
    Duplicate,
    #[serde(rename = "NonEx")]
    NonExistent,
    #[serde(rename = "Other")]
    #[default]
    Other,
}

impl ObjectType {
    /// Short code as used in object tables
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Star => "*",
            Self::DoubleStar => "**",
            Self::StarAssociation => "*Ass",
            Self::OpenCluster => "OCl",
            Self::GlobularCluster => "GCl",
            Self::ClusterWithNebula => "Cl+N",
            Self::Galaxy => "G",
            Self::GalaxyPair => "GPair",
            Self::GalaxyTriplet => "GTrpl",
            Self::GalaxyGroup => "GGroup",
            Self::GalaxyCluster => "GCluster",
            Self::PlanetaryNebula => "PN",
            Self::HiiRegion => "HII",
            Self::DarkNebula => "DrkN",
            Self::EmissionNebula => "EmN",
            Self::Nebula => "Neb",
            Self::ReflectionNebula => "RfN",
            Self::SupernovaRemnant => "SNR",
            Self::Nova => "Nova",
            Self::Pulsar => "Psr",
            Self::Planet => "Pl",
            Self::Exoplanet => "ExoPl",
            Self::Duplicate => "Dup",
            Self::NonExistent => "NonEx",
            Self::Other => "Other",
        }
    }

    /// Parse a short code; unknown codes map to `Other`
    pub fn parse(code: &str) -> Self {
        match code.trim() {
            "*" => Self::Star,
            "**" => Self::DoubleStar,
            "*Ass" => Self::StarAssociation,
            "OCl" => Self::OpenCluster,
            "GCl" => Self::GlobularCluster,
            "Cl+N" => Self::ClusterWithNebula,
            "G" => Self::Galaxy,
            "GPair" => Self::GalaxyPair,
            "GTrpl" => Self::GalaxyTriplet,
            "GGroup" => Self::GalaxyGroup,
            "GCluster" => Self::GalaxyCluster,
            "PN" => Self::PlanetaryNebula,
            "HII" => Self::HiiRegion,
            "DrkN" => Self::DarkNebula,
            "EmN" => Self::EmissionNebula,
            "Neb" => Self::Nebula,
            "RfN" => Self::ReflectionNebula,
            "SNR" => Self::SupernovaRemnant,
            "Nova" => Self::Nova,
            "Psr" => Self::Pulsar,
            "Pl" => Self::Planet,
            "ExoPl" => Self::Exoplanet,
            "Dup" => Self::Duplicate,
            "NonEx" => Self::NonExistent,
            _ => Self::Other,
        }
    }
}

impl From<String> for ObjectType {
    fn from(code: String) -> Self {
        Self::parse(&code)
    }
}

impl std::fmt::Display for ObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Star => write!(f, "Star"),
            Self::DoubleStar => write!(f, "Double star"),
            Self::StarAssociation => write!(f, "Association of stars"),
            Self::OpenCluster => write!(f, "Open cluster"),
            Self::GlobularCluster => write!(f, "Globular cluster"),
            Self::ClusterWithNebula => write!(f, "Star cluster + nebula"),
            Self::Galaxy => write!(f, "Galaxy"),
            Self::GalaxyPair => write!(f, "Galaxy pair"),
            Self::GalaxyTriplet => write!(f, "Galaxy triplet"),
            Self::GalaxyGroup => write!(f, "Group of galaxies"),
            Self::GalaxyCluster => write!(f, "Cluster of galaxies"),
            Self::PlanetaryNebula => write!(f, "Planetary nebula"),
            Self::HiiRegion => write!(f, "HII region"),
            Self::DarkNebula => write!(f, "Dark nebula"),
            Self::EmissionNebula => write!(f, "Emission nebula"),
            Self::Nebula => write!(f, "Nebula"),
            Self::ReflectionNebula => write!(f, "Reflection nebula"),
            Self::SupernovaRemnant => write!(f, "Supernova remnant"),
            Self::Nova => write!(f, "Nova"),
            Self::Pulsar => write!(f, "Pulsar"),
            Self::Planet => write!(f, "Planet"),
            Self::Exoplanet => write!(f, "Exoplanet"),
            Self::Duplicate => write!(f, "Duplicated record"),
            Self::NonExistent => write!(f, "Nonexistent object"),
            Self::Other => write!(f, "Other"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_type_codes_round_trip() {
        for ty in [
            ObjectType::Star,
            ObjectType::GalaxyPair,
            ObjectType::ClusterWithNebula,
            ObjectType::Duplicate,
            ObjectType::Other,
        ] {
            assert_eq!(ObjectType::parse(ty.code()), ty);
        }
        assert_eq!(ObjectType::parse("???"), ObjectType::Other);
    }

    #[test]
    fn test_object_type_serde_uses_codes() {
        let json = serde_json::to_string(&ObjectType::Duplicate).unwrap();
        assert_eq!(json, "\"Dup\"");
        let parsed: ObjectType = serde_json::from_str("\"GCl\"").unwrap();
        assert_eq!(parsed, ObjectType::GlobularCluster);
        let unknown: ObjectType = serde_json::from_str("\"Dwarf\"").unwrap();
        assert_eq!(unknown, ObjectType::Other);
        let padded: ObjectType = serde_json::from_str("\" OCl \"").unwrap();
        assert_eq!(padded, ObjectType::OpenCluster);
    }

    #[test]
    fn test_epoch_letters() {
        assert_eq!(Epoch::from_letter('J'), Some(Epoch::J2000));
        assert_eq!(Epoch::B1950.letter(), 'B');
        assert_eq!(Epoch::from_letter('X'), None);
    }
}
