//! Sema CLI - Command-line interface
//!
//! Usage:
//!   sema disambiguate --taxonomy tax.json document.txt
//!   sema tag document.txt
//!   sema eval --relevant 10 results.json

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use sema_core::{AppConfig, LoggingConfig};
use sema_pipeline::metrics::{self, RankedResult};
use sema_pipeline::{RuleTagger, SimpleTokenizer, Tagger, TextProcessor};
use sema_taxonomy::load_taxonomy;
use sema_wsd::{Disambiguator, WsdEvent};

#[derive(Parser)]
#[command(name = "sema")]
#[command(about = "Context-window word-sense disambiguation toolkit")]
#[command(version)]
struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assign taxonomy senses to the terms of a document
    Disambiguate {
        /// Text file to process
        input: PathBuf,

        /// Taxonomy JSON file (overrides config)
        #[arg(long)]
        taxonomy: Option<PathBuf>,

        /// Context window radius (overrides config)
        #[arg(long)]
        window: Option<usize>,

        /// Disambiguate terms in parallel
        #[arg(long)]
        parallel: bool,

        /// Emit JSON instead of tab-separated lines
        #[arg(long)]
        json: bool,
    },
    /// Tokenize and POS-tag a document
    Tag {
        /// Text file to process
        input: PathBuf,
    },
    /// Compute retrieval metrics over a ranked result list
    Eval {
        /// JSON file with ranked results and relevance judgments
        results: PathBuf,

        /// Total number of relevant documents for this query
        #[arg(long)]
        relevant: usize,
    },
}

fn init_tracing(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    if config.json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::from_file(path)?.with_env_override()?,
        None => AppConfig::from_env()?,
    };
    init_tracing(&config.logging);

    match cli.command {
        Commands::Disambiguate {
            input,
            taxonomy,
            window,
            parallel,
            json,
        } => {
            let taxonomy_path = taxonomy.unwrap_or_else(|| config.taxonomy.path.clone());
            let taxonomy = load_taxonomy(&taxonomy_path)
                .with_context(|| format!("loading taxonomy from {}", taxonomy_path.display()))?;

            let text = std::fs::read_to_string(&input)
                .with_context(|| format!("reading {}", input.display()))?;
            let tokens = SimpleTokenizer::from_config(&config.pipeline).process_text(&text);
            let terms = RuleTagger::new().tag(&tokens);
            tracing::info!(terms = terms.len(), "disambiguating document");

            let driver = Disambiguator::new(&taxonomy)
                .with_radius(window.unwrap_or(config.wsd.window_radius))
                .with_observer(|event| match event {
                    WsdEvent::Assigned { term, sense, score } => {
                        tracing::debug!(%term, %sense, score, "sense assigned")
                    }
                    WsdEvent::Unresolved { term } => {
                        tracing::debug!(%term, "could not disambiguate")
                    }
                });

            let results = if parallel || config.wsd.parallel {
                driver.disambiguate_parallel(&terms)
            } else {
                driver.disambiguate(&terms)
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                for result in &results {
                    match &result.sense {
                        Some(sense) => println!("{}\t{}", result.term, sense),
                        None => println!("{}\t-", result.term),
                    }
                }
            }
        }
        Commands::Tag { input } => {
            let text = std::fs::read_to_string(&input)
                .with_context(|| format!("reading {}", input.display()))?;
            let tokens = SimpleTokenizer::from_config(&config.pipeline).process_text(&text);

            for term in RuleTagger::new().tag(&tokens) {
                println!("{}\t{}", term.surface, term.tag);
            }
        }
        Commands::Eval { results, relevant } => {
            let content = std::fs::read_to_string(&results)
                .with_context(|| format!("reading {}", results.display()))?;
            let ranked: Vec<RankedResult> =
                serde_json::from_str(&content).context("parsing ranked results")?;

            let report = metrics::evaluate(&ranked, relevant);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
