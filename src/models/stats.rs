use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Opaque identifier of a stat in the game's metadata table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct StatHash(pub u32);

impl fmt::Display for StatHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Stat hashes show up both as numbers and as JSON object keys, and map keys
// arrive as strings once buffered by the tagged `Item` enum.
impl<'de> Deserialize<'de> for StatHash {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct StatHashVisitor;

        impl<'de> Visitor<'de> for StatHashVisitor {
            type Value = StatHash;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a stat hash as an unsigned integer or numeric string")
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<StatHash, E> {
                u32::try_from(value)
                    .map(StatHash)
                    .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(value), &self))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<StatHash, E> {
                u32::try_from(value)
                    .map(StatHash)
                    .map_err(|_| E::invalid_value(de::Unexpected::Signed(value), &self))
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<StatHash, E> {
                value
                    .parse::<u32>()
                    .map(StatHash)
                    .map_err(|_| E::invalid_value(de::Unexpected::Str(value), &self))
            }
        }

        deserializer.deserialize_any(StatHashVisitor)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DisplayProperties {
    pub name: String,
    pub description: String,
    pub icon: String,
    pub has_icon: bool,
}

/// How close a stat's roll sits to its possible range. Older items only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityPercentage {
    pub min: i32,
    pub range: String,
}

/// A single stat line as computed by the item-stats aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stat {
    pub stat_hash: StatHash,
    pub value: i32,
    #[serde(default)]
    pub maximum_value: i32,
    #[serde(default)]
    pub bar: bool,
    #[serde(default)]
    pub additive: bool,
    #[serde(default)]
    pub display_properties: DisplayProperties,
    #[serde(default)]
    pub quality_percentage: Option<QualityPercentage>,
}

impl Stat {
    pub fn new(stat_hash: StatHash, name: &str, value: i32) -> Self {
        Self {
            stat_hash,
            value,
            maximum_value: 100,
            bar: true,
            additive: false,
            display_properties: DisplayProperties {
                name: name.to_string(),
                ..DisplayProperties::default()
            },
            quality_percentage: None,
        }
    }

    pub fn with_maximum(mut self, maximum_value: i32) -> Self {
        self.maximum_value = maximum_value;
        self
    }

    pub fn with_quality(mut self, min: i32, range: &str) -> Self {
        self.quality_percentage = Some(QualityPercentage {
            min,
            range: range.to_string(),
        });
        self
    }

    pub fn name(&self) -> &str {
        &self.display_properties.name
    }

    /// Quality badge data, only when the minimum quality is positive.
    pub fn positive_quality(&self) -> Option<&QualityPercentage> {
        self.quality_percentage.as_ref().filter(|q| q.min > 0)
    }
}
