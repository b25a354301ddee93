//! KEGG Ingest - parse KEGG `list` output into typed records

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use kegg_common::logging::{init_logging, LogConfig, LogLevel};
use kegg_common::types::Category;
use kegg_ingest::{write_records, ListParser, OutputFormat};
use std::io::Write;
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "kegg-ingest")]
#[command(author, version, about = "Parse KEGG list output into typed records")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a `list` response body
    Parse {
        /// List category (pathway, brite, module, ko, genes, vg, vp, ag)
        #[arg(short, long, env = "KEGG_CATEGORY")]
        category: String,

        /// Input file (stdin when omitted)
        #[arg(short, long, env = "KEGG_INPUT")]
        input: Option<PathBuf>,

        /// Output file (stdout when omitted)
        #[arg(short, long, env = "KEGG_OUTPUT")]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json, env = "KEGG_FORMAT")]
        format: OutputFormat,
    },

    /// Show the supported categories and their aliases
    Categories,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        LogLevel::Debug
    } else {
        LogLevel::Info
    };

    // Environment variables take precedence over flags
    let log_config = LogConfig::builder()
        .level(log_level)
        .log_file_prefix("kegg-ingest")
        .build()
        .merge_env()?;

    init_logging(&log_config)?;

    match cli.command {
        Command::Parse {
            category,
            input,
            output,
            format,
        } => {
            let category: Category = category.parse()?;
            let parser = ListParser::new(category.clone())?;

            let content = read_input(input.as_deref()).await?;
            let records = tokio::task::spawn_blocking(move || parser.parse(&content))
                .await
                .context("List parser task failed")??;

            info!(category = %category, records = records.len(), "Parsed list");

            match output {
                Some(path) => {
                    let file = std::fs::File::create(&path)
                        .with_context(|| format!("Failed to create {}", path.display()))?;
                    write_records(std::io::BufWriter::new(file), &category, &records, format)?;
                    info!("Records written to {}", path.display());
                },
                None => {
                    write_records(std::io::stdout().lock(), &category, &records, format)?;
                },
            }
        },
        Command::Categories => {
            let mut stdout = std::io::stdout().lock();
            for category in Category::SUPPORTED {
                writeln!(stdout, "{}\t{}", category, category.aliases().join(", "))?;
            }
        },
    }

    Ok(())
}

/// Read the whole input, from a file or stdin
async fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut content = String::new();
            tokio::io::stdin()
                .read_to_string(&mut content)
                .await
                .context("Failed to read stdin")?;
            Ok(content)
        },
    }
}
