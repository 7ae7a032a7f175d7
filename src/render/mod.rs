pub mod filters;
pub mod html;
pub mod recoil;
pub mod stat_row;
pub mod text;

use clap::ValueEnum;
use serde::Deserialize;

pub use recoil::RecoilGeometry;
pub use stat_row::{BarFragment, QualityBadge, StatRowView};

use crate::data::{StatMetadata, Translator};
use crate::errors::Result;
use crate::models::ItemStatsDocument;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
    Json,
}

/// Builds a row for every stat on the document's item.
pub fn build_rows(
    document: &ItemStatsDocument,
    metadata: &StatMetadata,
    translator: &dyn Translator,
) -> Vec<StatRowView> {
    document
        .stats
        .iter()
        .map(|stat| StatRowView::build(stat, &document.item, metadata, translator))
        .collect()
}

pub fn render_document(
    document: &ItemStatsDocument,
    metadata: &StatMetadata,
    translator: &dyn Translator,
    format: OutputFormat,
    bar_width: usize,
) -> Result<String> {
    let rows = build_rows(document, metadata, translator);
    tracing::info!(
        item = document.item.id(),
        generation = %document.item.generation(),
        rows = rows.len(),
        "rendering stat rows"
    );

    let output = match format {
        OutputFormat::Text => {
            let mut lines = Vec::with_capacity(rows.len() + 1);
            if let Some(name) = document.item.name() {
                lines.push(name.to_string());
            }
            lines.extend(rows.iter().map(|row| text::render_row(row, bar_width)));
            lines.join("\n")
        }
        OutputFormat::Html => {
            let body: String = rows.iter().map(html::render_row).collect();
            format!("<div class=\"stats\">{}</div>", body)
        }
        OutputFormat::Json => serde_json::to_string_pretty(&rows)?,
    };
    Ok(output)
}
