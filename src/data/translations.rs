use std::borrow::Cow;
use std::collections::HashMap;

pub const MILLISECONDS_KEY: &str = "Stats.Milliseconds";

/// Looks up user-facing labels by key.
pub trait Translator {
    fn t(&self, key: &str) -> Cow<'_, str>;
}

/// Built-in English labels. Unknown keys are returned as-is.
#[derive(Debug, Clone)]
pub struct EnglishTranslations {
    labels: HashMap<&'static str, &'static str>,
}

impl EnglishTranslations {
    pub fn new() -> Self {
        let mut labels = HashMap::new();
        labels.insert(MILLISECONDS_KEY, "ms");
        Self { labels }
    }
}

impl Default for EnglishTranslations {
    fn default() -> Self {
        Self::new()
    }
}

impl Translator for EnglishTranslations {
    fn t(&self, key: &str) -> Cow<'_, str> {
        match self.labels.get(key) {
            Some(label) => Cow::Borrowed(*label),
            None => Cow::Owned(key.to_string()),
        }
    }
}
