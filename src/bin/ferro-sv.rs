// Copyright (c) 2024-2025 Fulcrum Genomics LLC
// SPDX-License-Identifier: MIT

//! ferro-sv CLI
//!
//! Command-line interface for translating structural variant calls from HG38
//! to CHM13-T2T.

use clap::{Parser, Subcommand};
use ferro_sv::check::{check_data, print_check_summary};
use ferro_sv::cli::{output_error, OutputFormat, OutputKind};
use ferro_sv::commands::{annotate, filter, output_or_default, view, RunConfig, RunSummary};
use ferro_sv::config::SvConfig;
use ferro_sv::prepare::{prepare_companions, print_prepare_summary, PrepareConfig};
use ferro_sv::SvError;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(name = "ferro-sv")]
#[command(author, version, about = "Structural variant translation from HG38 to CHM13-T2T")]
#[command(
    long_about = "Annotate and filter optical-mapping structural variant calls (SMAP) made
against HG38 using published HG38/CHM13 differences and alignments between
the two assemblies.

Examples:
  ferro-sv prepare -w data
  ferro-sv annotate calls.smap
  ferro-sv filter calls.smap -d 20000 -o novel.smap
  ferro-sv view chr2:1000-2000 --format json"
)]
struct Cli {
    /// Log level or filter directive (e.g. debug, ferro_sv=trace)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Configuration file (default: .ferro-sv.toml, ~/.config/ferro-sv/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a report of catalog matches and mapping events per variant
    Annotate {
        /// Input SMAP file
        input: PathBuf,

        /// Distance from a translocation breakpoint accepted as a match [default: 10000]
        #[arg(short, long)]
        distance: Option<u64>,

        /// Output file (default: input with .smap replaced by .annotated.txt)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Data directory
        #[arg(short = 'w', long)]
        data_dir: Option<PathBuf>,
    },

    /// Keep only variants that overlap no known difference
    Filter {
        /// Input SMAP file
        input: PathBuf,

        /// Distance from a translocation breakpoint accepted as a match [default: 10000]
        #[arg(short, long)]
        distance: Option<u64>,

        /// Output file (default: input with .smap replaced by .filtered.smap)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Data directory
        #[arg(short = 'w', long)]
        data_dir: Option<PathBuf>,
    },

    /// Report catalog matches and mapping events of a single region
    View {
        /// Region, e.g. chr1:1000 or chr2:1000-2000
        region: String,

        /// Data directory
        #[arg(short = 'w', long)]
        data_dir: Option<PathBuf>,

        /// Output format
        #[arg(short = 'f', long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },

    /// Derive the -empty and -alternatives companions of the reverse alignments
    Prepare {
        /// Data directory
        #[arg(short = 'w', long)]
        data_dir: Option<PathBuf>,

        /// Overwrite existing companion files
        #[arg(long)]
        force: bool,
    },

    /// Check that every data file is present and parses
    Check {
        /// Data directory
        #[arg(short = 'w', long)]
        data_dir: Option<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    let error_format = match &cli.command {
        Commands::View { format, .. } => format.parse::<OutputFormat>().unwrap_or_default(),
        _ => OutputFormat::Text,
    };

    if let Err(e) = run(cli) {
        output_error(&mut io::stderr(), &e, error_format)?;
        std::process::exit(1);
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), SvError> {
    let config = SvConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Annotate {
            input,
            distance,
            output,
            data_dir,
        } => {
            let run = run_config(
                &config,
                input,
                output,
                distance,
                data_dir.as_deref(),
                OutputKind::Annotated,
            );
            report_run("Annotated", &annotate(&run)?);
            Ok(())
        }
        Commands::Filter {
            input,
            distance,
            output,
            data_dir,
        } => {
            let run = run_config(
                &config,
                input,
                output,
                distance,
                data_dir.as_deref(),
                OutputKind::Filtered,
            );
            report_run("Kept", &filter(&run)?);
            Ok(())
        }
        Commands::View {
            region,
            data_dir,
            format,
        } => {
            let paths = config.data_paths(data_dir.as_deref());
            let format = format.parse::<OutputFormat>().unwrap_or_default();
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            view(&region, &paths, format, &mut handle)?;
            handle.flush()?;
            Ok(())
        }
        Commands::Prepare { data_dir, force } => {
            let paths = config.data_paths(data_dir.as_deref());
            let summary = prepare_companions(&PrepareConfig::for_paths(&paths, force))?;
            print_prepare_summary(&summary);
            Ok(())
        }
        Commands::Check { data_dir } => {
            let paths = config.data_paths(data_dir.as_deref());
            let result = check_data(&paths);
            print_check_summary(&result);
            if result.valid {
                Ok(())
            } else {
                Err(SvError::Config {
                    msg: "Data check failed".to_string(),
                })
            }
        }
    }
}

fn run_config(
    config: &SvConfig,
    input: PathBuf,
    output: Option<PathBuf>,
    distance: Option<u64>,
    data_dir: Option<&Path>,
    kind: OutputKind,
) -> RunConfig {
    RunConfig {
        output: output_or_default(&input, output, kind),
        input,
        distance: config.distance(distance),
        paths: config.data_paths(data_dir),
    }
}

fn report_run(verb: &str, summary: &RunSummary) {
    eprintln!(
        "{} {} of {} variants: {}",
        verb,
        summary.written,
        summary.variants,
        summary.output.display()
    );
}

fn init_tracing(level: &str) -> Result<(), Box<dyn std::error::Error>> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter};

    let filter =
        EnvFilter::try_new(level).map_err(|e| format!("Invalid log level '{}': {}", level, e))?;

    // Reports go to stdout; keep logs on stderr
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();

    tracing::debug!("Tracing initialized with level: {}", level);

    Ok(())
}
