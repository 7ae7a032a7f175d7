use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an item category (e.g. "weapon mods") in the game's metadata table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemCategoryHash(pub u32);

impl fmt::Display for ItemCategoryHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameGeneration {
    Destiny1,
    Destiny2,
}

impl fmt::Display for GameGeneration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameGeneration::Destiny1 => write!(f, "destiny1"),
            GameGeneration::Destiny2 => write!(f, "destiny2"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_serde_names() {
        let json = serde_json::to_string(&GameGeneration::Destiny2).unwrap();
        assert_eq!(json, "\"destiny2\"");
        assert_eq!(GameGeneration::Destiny1.to_string(), "destiny1");
    }
}
