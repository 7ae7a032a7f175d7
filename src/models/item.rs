use serde::{Deserialize, Serialize};

use super::item_type::GameGeneration;
use super::socket::Socket;
use super::stats::StatHash;

/// The stat an item's masterwork tier boosts, and by how much.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MasterworkInfo {
    pub stat_hash: StatHash,
    #[serde(default)]
    pub stat_value: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegacyItem {
    pub id: String,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SocketedItem {
    pub id: String,
    pub name: Option<String>,
    pub masterwork_info: Option<MasterworkInfo>,
    pub sockets: Option<Vec<Socket>>,
}

/// An inventory item, shaped by the game generation it comes from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "generation", rename_all = "lowercase")]
pub enum Item {
    Destiny1(LegacyItem),
    Destiny2(SocketedItem),
}

impl Item {
    pub fn destiny1(id: String) -> Self {
        Item::Destiny1(LegacyItem { id, name: None })
    }

    pub fn destiny2(id: String) -> Self {
        Item::Destiny2(SocketedItem {
            id,
            ..SocketedItem::default()
        })
    }

    pub fn with_name(mut self, name: String) -> Self {
        match &mut self {
            Item::Destiny1(item) => item.name = Some(name),
            Item::Destiny2(item) => item.name = Some(name),
        }
        self
    }

    /// Sets the masterwork stat. Older items have no masterwork tier, so this is a no-op for them.
    pub fn with_masterwork(mut self, stat_hash: StatHash, stat_value: i32) -> Self {
        if let Item::Destiny2(item) = &mut self {
            item.masterwork_info = Some(MasterworkInfo {
                stat_hash,
                stat_value,
            });
        }
        self
    }

    pub fn add_socket(&mut self, socket: Socket) {
        if let Item::Destiny2(item) = self {
            item.sockets.get_or_insert_with(Vec::new).push(socket);
        }
    }

    pub fn generation(&self) -> GameGeneration {
        match self {
            Item::Destiny1(_) => GameGeneration::Destiny1,
            Item::Destiny2(_) => GameGeneration::Destiny2,
        }
    }

    pub fn is_destiny1(&self) -> bool {
        matches!(self, Item::Destiny1(_))
    }

    pub fn id(&self) -> &str {
        match self {
            Item::Destiny1(item) => &item.id,
            Item::Destiny2(item) => &item.id,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Item::Destiny1(item) => item.name.as_deref(),
            Item::Destiny2(item) => item.name.as_deref(),
        }
    }

    pub fn masterwork_info(&self) -> Option<&MasterworkInfo> {
        match self {
            Item::Destiny1(_) => None,
            Item::Destiny2(item) => item.masterwork_info.as_ref(),
        }
    }

    /// All sockets on the item; empty for older items or when sockets were never resolved.
    pub fn sockets(&self) -> &[Socket] {
        match self {
            Item::Destiny1(_) => &[],
            Item::Destiny2(item) => item.sockets.as_deref().unwrap_or(&[]),
        }
    }
}
