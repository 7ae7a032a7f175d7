use serde::{Deserialize, Serialize};

use super::item::Item;
use super::stats::Stat;
use crate::errors::Result;

/// One item together with the stat lines computed for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemStatsDocument {
    pub item: Item,
    #[serde(default)]
    pub stats: Vec<Stat>,
}

impl ItemStatsDocument {
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub async fn load_from_file(path: &str) -> Result<Self> {
        let content = tokio::fs::read_to_string(path).await?;
        Self::from_json(&content)
    }
}
