//! coedit CLI tool
//!
//! Command-line interface for running editor/author overlap analysis with coedit-core.
//!
//! ## Commands
//!
//! - `analyze <files...>`: Build the graph, print the report, optionally write JSON outputs
//! - `stats <files...>`: Graph size only
//! - `merge <files...> --output <file>`: Concatenate several corpus files into one
//! - `init-config [path]`: Write a configuration file holding every default
//!
//! Sources that are missing or unparseable are skipped with a warning; the run continues with
//! whatever loaded.

use clap::{Parser, Subcommand};
use coedit_core::{
    analysis::analyze,
    config::{AnalysisConfig, TomlConfigProvider},
    graph::CollabGraph,
    ingest::{load_paths, write_corpus, Ingested},
    CoeditError,
};
use std::{
    fs::write,
    path::{Path, PathBuf},
};

#[derive(Parser)]
#[command(name = "coedit")]
#[command(author, version, about = "Detect editor/author overlap in special issue records", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full analysis and print a report
    Analyze {
        /// Corpus files (JSON arrays of article records). Falls back to `sources` in the config
        files: Vec<PathBuf>,

        /// Configuration file path
        #[arg(short, long, default_value = "coedit.toml")]
        config: PathBuf,

        /// Write the report as JSON
        #[arg(long)]
        report: Option<PathBuf>,

        /// Write the network view (renderer input) as JSON
        #[arg(long)]
        view: Option<PathBuf>,

        /// Write the full graph (people, relations, venues, titles) as JSON
        #[arg(long)]
        graph: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print graph size statistics
    Stats {
        /// Corpus files
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Also list every person and relation
        #[arg(short, long)]
        verbose: bool,
    },

    /// Merge corpus files into one, skipping unreadable ones
    Merge {
        /// Corpus files, in merge order
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Destination file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Write a configuration file with default values
    InitConfig {
        /// Path of the configuration file to create
        #[arg(default_value = "coedit.toml")]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn report_diagnostics(ingested: &Ingested) {
    if !ingested.is_clean() {
        eprintln!("Skipped {} source(s):", ingested.diagnostics.len());
        for diagnostic in ingested.diagnostics.iter() {
            eprintln!("  {diagnostic}");
        }
    }
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<(), CoeditError> {
    write(path, serde_json::to_string_pretty(value)?)?;
    println!("Saved to: {}", path.display());
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            files,
            config,
            report,
            view,
            graph,
            verbose,
        } => {
            let analysis_config = TomlConfigProvider::new(config).get_config()?;
            let files = if files.is_empty() {
                analysis_config.sources.clone()
            } else {
                files
            };
            if files.is_empty() {
                eprintln!("Error: no corpus files given and no `sources` in the configuration");
                std::process::exit(1);
            }

            if verbose {
                println!("Analyzing: {files:?}");
                println!("Configuration: {analysis_config:?}");
            }

            let ingested = load_paths(&files);
            report_diagnostics(&ingested);

            let analysis = analyze(&ingested.records, &analysis_config);
            print!("{}", analysis.report.to_text()?);

            if let Some(path) = report {
                write_json(&path, &analysis.report)?;
            }
            if let Some(path) = view {
                write_json(&path, &analysis.view(&analysis_config.view))?;
            }
            if let Some(path) = graph {
                write_json(&path, &analysis.graph.export())?;
            }

            if verbose {
                println!("\n{}", analysis.graph.display_contents());
            }
            Ok(())
        }

        Commands::Stats { files, verbose } => {
            let ingested = load_paths(&files);
            report_diagnostics(&ingested);

            let graph = CollabGraph::from_records(&ingested.records);
            let stats = graph.stats();
            println!("\n=== Graph Statistics ===");
            println!("Articles: {}", ingested.records.len());
            println!("People: {}", stats.people);
            println!("Relations: {}", stats.relations);
            println!("Editor->author relations: {}", stats.editorial);
            println!("Co-author relations: {}", stats.coauthor);

            if verbose {
                println!("\n{}", graph.display_contents());
            }
            Ok(())
        }

        Commands::Merge { files, output } => {
            let ingested = load_paths(&files);
            report_diagnostics(&ingested);

            write_corpus(&output, &ingested.records)?;
            println!(
                "Merged {} articles from {} source(s) into {}",
                ingested.records.len(),
                ingested.loaded_sources,
                output.display()
            );
            Ok(())
        }

        Commands::InitConfig { path, force } => {
            if path.exists() && !force {
                eprintln!(
                    "Error: {} already exists (use --force to overwrite)",
                    path.display()
                );
                std::process::exit(1);
            }
            TomlConfigProvider::new(path.clone()).set_config(&AnalysisConfig::default())?;
            println!("Configuration file created: {}", path.display());
            Ok(())
        }
    }
}
