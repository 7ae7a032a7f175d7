pub mod document;
pub mod item;
pub mod item_type;
pub mod socket;
pub mod stats;

pub use document::ItemStatsDocument;

pub use item::{
    Item,
    LegacyItem,
    MasterworkInfo,
    SocketedItem,
};

pub use item_type::{
    GameGeneration,
    ItemCategoryHash,
};

pub use socket::{
    Plug,
    PlugItem,
    Socket,
};

pub use stats::{
    DisplayProperties,
    QualityPercentage,
    Stat,
    StatHash,
};
