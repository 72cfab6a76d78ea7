//! ml-corpora: inspect and export manually downloaded corpora

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use ml_corpora_cli::{describe, export, ExportConfig};
use ml_corpora_core::DatasetAdapter;
use ml_corpora_datasets::{adapter_by_name, builtin_adapters};

#[derive(Parser)]
#[command(name = "ml-corpora")]
#[command(version)]
#[command(about = "Inspect and export labeled example streams of manually downloaded corpora")]
struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the built-in datasets with their splits and schemas
    List,

    /// Print a dataset's metadata, schema and splits as JSON
    Info {
        /// Dataset name
        dataset: String,
    },

    /// Show where each split of a dataset is expected on disk
    Locate {
        /// Dataset name
        dataset: String,

        /// Directory holding manually downloaded data
        #[arg(long, env = "ML_CORPORA_MANUAL_DIR")]
        manual_dir: PathBuf,
    },

    /// Write a split as JSON lines
    Export {
        /// Dataset name
        dataset: String,

        /// Split to export
        #[arg(long, default_value = "train")]
        split: String,

        /// Directory holding manually downloaded data
        #[arg(long, env = "ML_CORPORA_MANUAL_DIR")]
        manual_dir: PathBuf,

        /// Output file; stdout when omitted
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Skip rows that do not fit the header instead of failing
        #[arg(long)]
        skip_malformed: bool,

        /// Leave out records whose label could not be derived
        #[arg(long)]
        drop_invalid_labels: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        _ => EnvFilter::new("debug"),
    };
    fmt().with_env_filter(filter).with_writer(io::stderr).init();

    match cli.command {
        Commands::List => {
            for adapter in builtin_adapters()? {
                let splits: Vec<_> = adapter.list_splits().iter().map(ToString::to_string).collect();
                println!("{} {} [{}]", adapter.name(), adapter.info().version, splits.join(", "));
                print!("{}", adapter.schema());
            }
        }
        Commands::Info { dataset } => {
            let adapter = adapter_by_name(&dataset)?;
            println!("{}", serde_json::to_string_pretty(&describe(&adapter))?);
        }
        Commands::Locate { dataset, manual_dir } => {
            let adapter = adapter_by_name(&dataset)?;
            for resolved in adapter.locate(&manual_dir) {
                let status = if resolved.path.is_file() { "ok" } else { "missing" };
                println!("{}\t{}\t{}", resolved.split, resolved.path.display(), status);
            }
        }
        Commands::Export {
            dataset,
            split,
            manual_dir,
            output,
            skip_malformed,
            drop_invalid_labels,
        } => {
            let adapter = adapter_by_name(&dataset)?;
            let config = ExportConfig {
                skip_malformed,
                drop_invalid_labels,
            };
            let summary = match output {
                Some(path) => {
                    let file = File::create(&path)
                        .with_context(|| format!("cannot create {}", path.display()))?;
                    export(adapter, &manual_dir, &split, &config, BufWriter::new(file))?
                }
                None => export(adapter, &manual_dir, &split, &config, io::stdout().lock())?,
            };
            eprintln!(
                "{}/{}: {} written, {} dropped, {} skipped",
                dataset, split, summary.written, summary.dropped, summary.skipped
            );
        }
    }

    Ok(())
}
