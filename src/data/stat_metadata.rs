use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::definitions::{MILLISECOND_STATS, MOD_CATEGORIES, RECOIL_DIRECTION_STAT};
use crate::errors::Result;
use crate::models::{ItemCategoryHash, StatHash};

/// The slice of game metadata the stat rows depend on.
///
/// Defaults to the well-known identifiers in [`super::definitions`]; a JSON
/// export of the metadata table can replace any of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StatMetadata {
    pub millisecond_stats: HashSet<StatHash>,
    pub recoil_direction_stat: StatHash,
    pub mod_categories: HashSet<ItemCategoryHash>,
}

impl Default for StatMetadata {
    fn default() -> Self {
        Self {
            millisecond_stats: MILLISECOND_STATS.into_iter().collect(),
            recoil_direction_stat: RECOIL_DIRECTION_STAT,
            mod_categories: MOD_CATEGORIES.into_iter().collect(),
        }
    }
}

impl StatMetadata {
    pub fn is_millisecond_stat(&self, stat_hash: StatHash) -> bool {
        self.millisecond_stats.contains(&stat_hash)
    }

    pub fn is_recoil_direction(&self, stat_hash: StatHash) -> bool {
        self.recoil_direction_stat == stat_hash
    }

    /// True when any of the given categories marks a weapon or armor mod.
    pub fn is_mod_category(&self, categories: &[ItemCategoryHash]) -> bool {
        categories.iter().any(|c| self.mod_categories.contains(c))
    }

    pub async fn load_from_file(path: &str) -> Result<Self> {
        let content = tokio::fs::read_to_string(path).await?;
        Ok(serde_json::from_str(&content)?)
    }

    pub async fn save_to_file(&self, path: &str) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }
}
