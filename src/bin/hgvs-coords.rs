// Copyright (c) 2024-2025 Fulcrum Genomics LLC
// SPDX-License-Identifier: MIT

//! hgvs-coords CLI
//!
//! Command-line interface for converting HGVS variants to genomic coordinates.

use clap::Parser;
use hgvs_coords::cli::{
    collect_descriptors, convert_and_write, EXIT_FATAL, EXIT_SUCCESS, EXIT_USAGE,
};
use hgvs_coords::config::ConfigOverrides;
use hgvs_coords::{ConvertError, ConverterConfig, GenomeBuild};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

#[derive(Parser)]
#[command(name = "hgvs-coords")]
#[command(author, version, about = "Convert HGVS variants to genomic coordinates")]
#[command(
    long_about = "Convert HGVS variant descriptions to genomic coordinates.

Coding (c.) and non-coding (n.) variants are mapped to the genome; every
variant is validated and reported as a JSON array of
{variant, start, end, ref} records. If any variant cannot be parsed or
validated, the output is a single {error, variant} record instead.

Examples:
  hgvs-coords 'NM_000016.4:c.76A>C'
  hgvs-coords 'NM_000016.4:c.127G>A' 'NC_000023.10:g.153296777C>T'
  hgvs-coords -i variants.txt --assembly GRCh38"
)]
struct Cli {
    /// HGVS variant descriptors
    variants: Vec<String>,

    /// Input file with one descriptor per line (use - for stdin)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Configuration file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// UTA PostgreSQL connection URL
    #[arg(long, env = "UTA_DB_URL")]
    uta_db_url: Option<String>,

    /// UTA database schema
    #[arg(long, env = "UTA_DB_SCHEMA")]
    uta_db_schema: Option<String>,

    /// SeqRepo directory
    #[arg(long, env = "HGVS_SEQREPO_DIR")]
    seqrepo_path: Option<PathBuf>,

    /// Genome build for transcript mapping (GRCh37/hg19 or GRCh38/hg38)
    #[arg(long)]
    assembly: Option<String>,

    /// Use variants from a JSON fixture file instead of UTA
    #[arg(long)]
    mock_data: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Log level filter (e.g. warn, info, hgvs_coords=debug)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(&cli.log_level) {
        eprintln!("Error: {}", e);
        return ExitCode::from(EXIT_FATAL);
    }

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e.detailed_message());
            ExitCode::from(EXIT_FATAL)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, ConvertError> {
    let descriptors = collect_descriptors(&cli.variants, cli.input.as_deref())?;
    if descriptors.is_empty() {
        debug!("No variant descriptors supplied");
        return Ok(ExitCode::from(EXIT_USAGE));
    }

    let assembly = cli
        .assembly
        .as_deref()
        .map(str::parse::<GenomeBuild>)
        .transpose()?;
    let config = ConverterConfig::load(cli.config.as_deref())?.merge(ConfigOverrides {
        uta_db_url: cli.uta_db_url,
        uta_db_schema: cli.uta_db_schema,
        seqrepo_path: cli.seqrepo_path,
        assembly,
    });
    debug!("Converting {} descriptor(s) against {}", descriptors.len(), config.assembly);

    let stdout = io::stdout();
    let mut writer = stdout.lock();
    convert_and_write(
        &descriptors,
        &config,
        cli.mock_data.as_deref(),
        &mut writer,
        cli.pretty,
    )?;

    Ok(ExitCode::from(EXIT_SUCCESS))
}

fn init_tracing(level: &str) -> Result<(), Box<dyn std::error::Error>> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter =
        EnvFilter::try_new(level).map_err(|e| format!("Invalid log level '{}': {}", level, e))?;

    // stdout carries the JSON report, so logs go to stderr
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();

    Ok(())
}
