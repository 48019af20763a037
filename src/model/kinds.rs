use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The six seeded entity kinds, in the order they must be inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Brand,
    Spec,
    SpecOption,
    Guitar,
    GuitarSpecValue,
    GuitarMedia,
}

impl EntityKind {
    pub const INSERT_ORDER: [EntityKind; 6] = [
        EntityKind::Brand,
        EntityKind::Spec,
        EntityKind::SpecOption,
        EntityKind::Guitar,
        EntityKind::GuitarSpecValue,
        EntityKind::GuitarMedia,
    ];

    /// Table name in the relational schema.
    pub fn table(&self) -> &'static str {
        match self {
            EntityKind::Brand => "brand",
            EntityKind::Spec => "spec",
            EntityKind::SpecOption => "spec_option",
            EntityKind::Guitar => "guitar",
            EntityKind::GuitarSpecValue => "guitar_spec_value",
            EntityKind::GuitarMedia => "guitar_media",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "guitar_type", rename_all = "lowercase")]
pub enum GuitarType {
    Electric,
    Acoustic,
    Classical,
    Bass,
}

/// Where a spec value was sourced from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "spec_source", rename_all = "lowercase")]
pub enum SpecSource {
    Manufacturer,
    Retailer,
    Community,
}

/// A database enumeration whose variants are addressed by lowercase tags.
pub trait StoreEnum: Sized + Copy + 'static {
    /// Name of the enum type in the schema.
    const TYPE_NAME: &'static str;

    fn variants() -> &'static [Self];
    fn tag(&self) -> &'static str;

    fn from_tag(tag: &str) -> Option<Self> {
        Self::variants().iter().copied().find(|v| v.tag() == tag)
    }
}

impl StoreEnum for GuitarType {
    const TYPE_NAME: &'static str = "guitar_type";

    fn variants() -> &'static [Self] {
        &[
            GuitarType::Electric,
            GuitarType::Acoustic,
            GuitarType::Classical,
            GuitarType::Bass,
        ]
    }

    fn tag(&self) -> &'static str {
        match self {
            GuitarType::Electric => "electric",
            GuitarType::Acoustic => "acoustic",
            GuitarType::Classical => "classical",
            GuitarType::Bass => "bass",
        }
    }
}

impl StoreEnum for SpecSource {
    const TYPE_NAME: &'static str = "spec_source";

    fn variants() -> &'static [Self] {
        &[
            SpecSource::Manufacturer,
            SpecSource::Retailer,
            SpecSource::Community,
        ]
    }

    fn tag(&self) -> &'static str {
        match self {
            SpecSource::Manufacturer => "manufacturer",
            SpecSource::Retailer => "retailer",
            SpecSource::Community => "community",
        }
    }
}

/// Error for a tag that names no variant of a [`StoreEnum`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {type_name} tag {tag:?}")]
pub struct UnknownTag {
    pub type_name: &'static str,
    pub tag: String,
}

macro_rules! impl_store_enum_traits {
    ($ty:ty) => {
        impl FromStr for $ty {
            type Err = UnknownTag;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$ty as StoreEnum>::from_tag(s).ok_or_else(|| UnknownTag {
                    type_name: <$ty as StoreEnum>::TYPE_NAME,
                    tag: s.to_string(),
                })
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.tag())
            }
        }
    };
}

impl_store_enum_traits!(GuitarType);
impl_store_enum_traits!(SpecSource);
