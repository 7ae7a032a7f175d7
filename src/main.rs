use clap::Parser;
use tracing_subscriber::EnvFilter;

use item_stat_rows::config::Config;
use item_stat_rows::render::{render_document, OutputFormat};
use item_stat_rows::{EnglishTranslations, ItemStatsDocument, StatMetadata};

/// Render an item's stat lines with their base, masterwork and mod bars.
#[derive(Debug, Parser)]
#[command(name = "stat-rows", version)]
struct Args {
    /// JSON document holding the item and its computed stats
    #[arg(short, long)]
    input: String,

    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Terminal cells used for a full stat bar
    #[arg(long)]
    bar_width: Option<usize>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// JSON export of the stat metadata table
    #[arg(long)]
    metadata: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = Config::load(args.config.as_deref())?;
    if let Some(format) = args.format {
        config.display.format = format;
    }
    if let Some(width) = args.bar_width {
        config.display.bar_width = width;
    }
    if let Some(path) = args.metadata {
        config.metadata.path = Some(path);
    }
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .with_writer(std::io::stderr)
        .init();

    let metadata = match &config.metadata.path {
        Some(path) => {
            tracing::info!(path = %path, "loading stat metadata");
            StatMetadata::load_from_file(path).await?
        }
        None => StatMetadata::default(),
    };

    let document = ItemStatsDocument::load_from_file(&args.input).await?;
    let output = render_document(
        &document,
        &metadata,
        &EnglishTranslations::new(),
        config.display.format,
        config.display.bar_width,
    )?;
    println!("{}", output);

    Ok(())
}
