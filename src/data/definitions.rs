// Identifiers from the game's static metadata tables.

use crate::models::{ItemCategoryHash, StatHash};

/// Item category assigned to weapon mods.
pub const WEAPON_MODS_CATEGORY: ItemCategoryHash = ItemCategoryHash(1052191496);
/// Item category assigned to armor mods.
pub const ARMOR_MODS_CATEGORY: ItemCategoryHash = ItemCategoryHash(4062965806);

pub const RECOIL_DIRECTION_STAT: StatHash = StatHash(2715839340);
pub const DRAW_TIME_STAT: StatHash = StatHash(447667954);
pub const CHARGE_TIME_STAT: StatHash = StatHash(2961396640);

/// Stats whose values are measured in milliseconds.
pub const MILLISECOND_STATS: [StatHash; 2] = [DRAW_TIME_STAT, CHARGE_TIME_STAT];

pub const MOD_CATEGORIES: [ItemCategoryHash; 2] = [WEAPON_MODS_CATEGORY, ARMOR_MODS_CATEGORY];
