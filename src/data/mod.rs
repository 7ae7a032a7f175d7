pub mod definitions;
pub mod stat_metadata;
pub mod translations;

pub use stat_metadata::StatMetadata;
pub use translations::{EnglishTranslations, Translator};
