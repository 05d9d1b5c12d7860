use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use primerpair::{report, seqio, PairStrategy, PrimerConfig};

/// primerpair CLI
#[derive(Parser)]
#[command(name = "primerpair")]
#[command(version)]
#[command(about = "Creates a primer pair for a given gene sequence", long_about = None)]
struct Cli {
    /// File with a nucleotide sequence in FASTA format (one header line)
    #[arg(short = 'g', long)]
    genefile: PathBuf,
    /// Minimal melting temperature in °C (exclusive)
    #[arg(long = "min", default_value_t = primerpair::config::DEFAULT_MIN_TEMP)]
    min_temp: f64,
    /// Maximal melting temperature in °C (exclusive)
    #[arg(long = "max", default_value_t = primerpair::config::DEFAULT_MAX_TEMP)]
    max_temp: f64,
    /// Largest allowed melting temperature difference between the primers
    #[arg(long, default_value_t = primerpair::select::MAX_TM_DIFFERENCE)]
    tolerance: f64,
    /// Pairing strategy: "first" (first feasible pair) or "all" (every feasible pair)
    #[arg(long, default_value = "first")]
    strategy: PairStrategy,
    /// Print the table of all candidate primers
    #[arg(long)]
    candidates: bool,
    /// Emit the candidate table as CSV to stdout instead of the text report
    #[arg(long)]
    csv: bool,
    /// Write the full result as JSON to this path
    #[arg(long)]
    json: Option<PathBuf>,
    /// Emphasize codons with brackets instead of ANSI bold
    #[arg(long)]
    no_color: bool,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Exit status for a run that ended in one of the design failures.
const EXIT_NOT_FOUND: u8 = 2;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = PrimerConfig {
        min_temp: cli.min_temp,
        max_temp: cli.max_temp,
        max_tm_difference: cli.tolerance,
        strategy: cli.strategy,
    };
    if config.min_temp >= config.max_temp {
        log::warn!("--min {} is not below --max {}; no primer can qualify", config.min_temp, config.max_temp);
    }

    let record = seqio::read_record(&cli.genefile)?;
    log::info!("{}: {} nt, Tm window ({}, {})", record.header, record.sequence.len(), config.min_temp, config.max_temp);

    let design = match primerpair::design_from_sequence(&record.sequence, &config) {
        Ok(d) => d,
        Err(e) => {
            println!("{}", report::render_error(&e, !cli.no_color));
            return Ok(ExitCode::from(EXIT_NOT_FOUND));
        }
    };

    if cli.csv {
        let mut df = report::candidates_frame(&design.candidates)?;
        report::write_csv(std::io::stdout(), &mut df)?;
    } else {
        if cli.candidates {
            cmd_print_candidates(&design.candidates)?;
        }
        println!("{}", report::render_design(&design));
    }

    if let Some(path) = &cli.json {
        let doc = report::to_json(&record.header, &config, &design)?;
        std::fs::write(path, doc).with_context(|| format!("failed to write JSON to {}", path.display()))?;
        log::info!("wrote {}", path.display());
    }

    Ok(ExitCode::SUCCESS)
}

fn cmd_print_candidates(set: &primerpair::CandidateSet) -> Result<()> {
    let df = report::candidates_frame(set)?;

    // Polars' pretty-printer reads these; show every row and the full primer.
    std::env::set_var("POLARS_FMT_TABLE_FORMATTING", "UTF8_FULL");
    std::env::set_var("POLARS_FMT_MAX_ROWS", "1000000");
    std::env::set_var("POLARS_FMT_STR_LEN", "1000");

    println!("{}", df);
    Ok(())
}
