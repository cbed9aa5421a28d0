use anyhow::Result;
use clap::{Parser, Subcommand};
use itemwiki_core::file_utils::{find_files_with_extension, read_field_dump};
use itemwiki_core::passives::build_effect;
use itemwiki_core::{extract_catalog, summarize, ExtractorConfig, IndexLookup, Item, RawFields};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(
    name = "itemwiki",
    version = "0.1.0",
    about = "Extract structured item statistics from wiki item data dumps",
    long_about = None
)]
struct Cli {
    /// Path to extractor configuration (TOML)
    #[arg(long, global = true, env = "ITEMWIKI_CONFIG")]
    config: Option<PathBuf>,

    /// Path to log file
    #[arg(long, global = true, default_value = "/tmp/itemwiki.log")]
    log_file: PathBuf,

    /// Verbosity level (repeat for more verbose output)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract items from raw field dumps
    Extract {
        /// JSON field dump, or a directory of them
        #[arg(long)]
        input: PathBuf,
        /// JSON object mapping recipe slugs to item ids
        #[arg(long)]
        recipes: Option<PathBuf>,
        /// Output file for extracted items (stdout when omitted)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Parse a single effect string and print the descriptor
    ParseEffect {
        /// Raw passive or active text
        text: String,
    },
}

fn setup_logging(
    verbose: u8,
    log_file: &Path,
) -> Result<tracing_appender::non_blocking::WorkerGuard> {
    let filter_level = match verbose {
        0 => tracing::Level::ERROR,
        1 => tracing::Level::WARN,
        2 => tracing::Level::INFO,
        3 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    let filter = EnvFilter::from_default_env().add_directive(filter_level.into());

    let file_appender = tracing_appender::rolling::never(
        log_file.parent().unwrap_or(Path::new(".")),
        log_file.file_name().unwrap_or(std::ffi::OsStr::new("itemwiki.log")),
    );
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::Layer::new().with_writer(std::io::stderr).with_ansi(true))
        .with(fmt::Layer::new().with_writer(non_blocking).with_ansi(false));

    tracing::subscriber::set_global_default(subscriber)?;

    Ok(guard)
}

fn load_records(input: &Path) -> Result<Vec<RawFields>> {
    if !input.exists() {
        anyhow::bail!("Input not found: {:?}", input);
    }
    if input.is_file() {
        return Ok(read_field_dump(input)?);
    }

    let files = find_files_with_extension(input, "json")?;
    info!("Found {} field dump files", files.len());

    let batches: Vec<Vec<RawFields>> = files
        .par_iter()
        .filter_map(|path| match read_field_dump(path) {
            Ok(records) => Some(records),
            Err(e) => {
                tracing::warn!("Failed to read {:?}: {}", path, e);
                None
            }
        })
        .collect();

    Ok(batches.into_iter().flatten().collect())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let _guard = setup_logging(cli.verbose, &cli.log_file)?;

    info!("Starting itemwiki CLI");

    let config = match &cli.config {
        Some(path) => ExtractorConfig::from_file(path)
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?,
        None => ExtractorConfig::default(),
    };

    match cli.command {
        Commands::Extract { input, recipes, output } => {
            let records = load_records(&input)?;
            info!("Loaded {} item records from {:?}", records.len(), input);

            let index = match recipes {
                Some(path) => IndexLookup::from_file(&path)?,
                None => {
                    tracing::warn!("No recipe index given; recipe references will be dropped");
                    IndexLookup::new()
                }
            };
            info!("Recipe index holds {} slugs", index.len());

            let results = extract_catalog(&records, index, config);
            let summary = summarize(&results);

            let items: Vec<Item> = results
                .into_iter()
                .filter_map(|result| result.ok())
                .map(|extraction| extraction.item)
                .collect();

            let json = serde_json::to_string_pretty(&items)?;
            match output {
                Some(path) => {
                    std::fs::write(&path, json)?;
                    info!("Wrote {} items to {:?}", items.len(), path);
                }
                None => println!("{}", json),
            }

            info!("--- Summary ---");
            info!("Total processed: {}", summary.total_processed);
            info!("Extracted: {}", summary.extracted);
            info!("Failed: {}", summary.failed);
            info!("Warnings: {}", summary.warnings);
        }
        Commands::ParseEffect { text } => {
            let effect = build_effect(&text);
            println!("{}", serde_json::to_string_pretty(&effect)?);
        }
    }

    info!("itemwiki CLI finished");
    Ok(())
}
