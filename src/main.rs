use std::fs::File;
use std::sync::Arc;

use artspace::core::catalog::Catalog;
use artspace::core::config;
use artspace::core::state::{Store, ViewState};
use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};

#[derive(Parser)]
#[command(name = "artspace", about = "Browse artwork collections in the terminal")]
struct Args {
    /// Collection to open on (zero-based)
    #[arg(short, long)]
    collection: Option<usize>,

    /// Log file path
    #[arg(long)]
    log_file: Option<String>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Parse errors are fatal; a missing file falls back to defaults
    let file_config = config::load_config().map_err(|e| {
        eprintln!("{e}");
        std::io::Error::other(e)
    })?;
    let resolved = config::resolve(&file_config, args.collection, args.log_file.as_deref());

    // Initialize file logger - the terminal belongs to the TUI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    log::info!("ArtSpace starting up at collection {}", resolved.start_collection);

    let catalog = Arc::new(Catalog::builtin());
    let store = Store::new(catalog, ViewState::at_collection(resolved.start_collection))
        .map_err(|e| {
            eprintln!("Cannot start at collection {}: {e}", resolved.start_collection);
            std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
        })?;

    artspace::tui::run(&resolved, store)
}
