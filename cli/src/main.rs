use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use postfilter_cli::{build_index, filter_index, filter_page, replay};
use postfilter_core::config::SelectorConfig;
use postfilter_core::extract::PageSelectors;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "postfilter")]
#[command(about = "Search and tag filtering over rendered blog pages", long_about = None)]
struct Cli {
    /// JSON file overriding the CSS selectors used to read pages
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract card indexes from a rendered page or site directory
    Index {
        /// Input path (HTML file or directory)
        #[arg(long)]
        input: PathBuf,
        /// Output index directory
        #[arg(long)]
        output: PathBuf,
    },
    /// Filter the cards of a rendered page or an exported index
    Filter {
        /// Rendered HTML page
        #[arg(long, conflicts_with = "index", required_unless_present = "index")]
        page: Option<PathBuf>,
        /// Index directory written by `index`
        #[arg(long)]
        index: Option<PathBuf>,
        /// Free-text query
        #[arg(long, default_value = "")]
        query: String,
        /// Tag to filter by
        #[arg(long)]
        tag: Option<String>,
    },
    /// Replay a JSONL file of UI events against a page
    Replay {
        #[arg(long)]
        page: PathBuf,
        #[arg(long)]
        events: PathBuf,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let cli = Cli::parse();

    let selectors = match &cli.config {
        Some(path) => PageSelectors::compile(&SelectorConfig::load(path)?)?,
        None => PageSelectors::standard().clone(),
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Index { input, output } => {
            let meta = build_index(&input, &output, &selectors)?;
            serde_json::to_writer_pretty(&mut out, &meta)?;
        }
        Commands::Filter { page, index, query, tag } => match (page, index) {
            (Some(page), _) => {
                let report = filter_page(&page, &query, tag.as_deref(), &selectors)?;
                serde_json::to_writer_pretty(&mut out, &report)?;
            }
            (None, Some(index)) => {
                let reports = filter_index(&index, &query, tag.as_deref())?;
                serde_json::to_writer_pretty(&mut out, &reports)?;
            }
            (None, None) => bail!("either --page or --index is required"),
        },
        Commands::Replay { page, events } => {
            let final_page = replay(&page, &events, &selectors, &mut out)?;
            serde_json::to_writer_pretty(&mut out, &final_page)?;
        }
    }
    out.write_all(b"\n")?;
    Ok(())
}
