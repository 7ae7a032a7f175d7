use crate::data::StatMetadata;
use crate::models::{Item, Socket, Stat};

/// Finds the weapon and armor mods plugged into an item that change a stat.
pub struct ModifierAnalyzer<'a> {
    metadata: &'a StatMetadata,
}

impl<'a> ModifierAnalyzer<'a> {
    pub fn new(metadata: &'a StatMetadata) -> Self {
        Self { metadata }
    }

    /// Sockets holding a mod that declares a bonus to `stat`.
    pub fn mod_sockets<'i>(&self, item: &'i Item, stat: &Stat) -> Vec<&'i Socket> {
        item.sockets()
            .iter()
            .filter(|socket| {
                self.metadata.is_mod_category(socket.category_hashes())
                    && socket.modifies(stat.stat_hash)
            })
            .collect()
    }

    /// Total amount the item's mods change `stat` by, or 0 when nothing modifies it.
    ///
    /// Several armor mods can stack on one stat, and debuff mods may contribute
    /// negative amounts. The total saturates at the `i32` bounds.
    pub fn modded_stat_value(&self, item: &Item, stat: &Stat) -> i32 {
        self.mod_sockets(item, stat)
            .iter()
            .map(|socket| socket.stat_bonus(stat.stat_hash).unwrap_or(0))
            .fold(0i32, |total, bonus| total.saturating_add(bonus))
    }
}
