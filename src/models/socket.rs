use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::item_type::ItemCategoryHash;
use super::stats::StatHash;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlugItem {
    pub item_category_hashes: Vec<ItemCategoryHash>,
}

/// The item plugged into a socket, with the stat bonuses it grants.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Plug {
    pub plug_item: Option<PlugItem>,
    pub stats: Option<HashMap<StatHash, i32>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Socket {
    pub plug: Option<Plug>,
}

impl Socket {
    pub fn empty() -> Self {
        Self { plug: None }
    }

    pub fn with_plug(categories: &[ItemCategoryHash], stats: &[(StatHash, i32)]) -> Self {
        Self {
            plug: Some(Plug {
                plug_item: Some(PlugItem {
                    item_category_hashes: categories.to_vec(),
                }),
                stats: Some(stats.iter().copied().collect()),
            }),
        }
    }

    /// Categories of the plugged item; empty when any link is missing.
    pub fn category_hashes(&self) -> &[ItemCategoryHash] {
        self.plug
            .as_ref()
            .and_then(|plug| plug.plug_item.as_ref())
            .map(|item| item.item_category_hashes.as_slice())
            .unwrap_or(&[])
    }

    pub fn stat_bonus(&self, stat_hash: StatHash) -> Option<i32> {
        self.plug
            .as_ref()
            .and_then(|plug| plug.stats.as_ref())
            .and_then(|stats| stats.get(&stat_hash))
            .copied()
    }

    pub fn modifies(&self, stat_hash: StatHash) -> bool {
        self.stat_bonus(stat_hash).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.plug.is_none()
    }
}
