//! Page-replacement simulator CLI.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{info, Level};

use evictionsim::common::config::MAX_SWEEP_FRAMES;
use evictionsim::{
    belady_anomalies, compare, distinct_pages, load_reference_file, parse_frame_count,
    parse_reference_string, sweep, Error, PageId, PolicyKind, Result, DEFAULT_FRAME_COUNT,
    DEFAULT_REFERENCE_STRING,
};

#[derive(Parser, Debug)]
#[command(
    name = "evictionsim",
    author,
    version,
    about = "Compare FIFO, LRU, Optimal and Clock page replacement",
    long_about = None,
)]
struct Cli {
    /// Comma-separated reference string, e.g. "7, 0, 1, 2".
    #[arg(short, long, conflicts_with = "file")]
    refs: Option<String>,

    /// Trace file with comma- or newline-separated page numbers.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Number of frames.
    #[arg(short = 'n', long, default_value_t = DEFAULT_FRAME_COUNT.to_string(), allow_hyphen_values = true)]
    frames: String,

    /// Policy to run (repeatable). Defaults to all four.
    #[arg(short, long = "policy", value_name = "NAME")]
    policies: Vec<PolicyKind>,

    /// Also print fault counts for 1..=MAX frames.
    #[arg(long, value_name = "MAX")]
    sweep: Option<usize>,

    /// Log level
    #[arg(long, default_value = "warn")]
    log_level: Level,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let refs = match (&cli.refs, &cli.file) {
        (_, Some(path)) => load_reference_file(path)?,
        (Some(text), None) => parse_reference_string(text)?,
        (None, None) => parse_reference_string(DEFAULT_REFERENCE_STRING)?,
    };
    let frames = parse_frame_count(&cli.frames)?;
    let kinds = if cli.policies.is_empty() {
        PolicyKind::ALL.to_vec()
    } else {
        cli.policies
    };

    info!(
        references = refs.len(),
        distinct = distinct_pages(&refs),
        frames,
        "running simulation"
    );

    println!("Reference string: {}", format_refs(&refs));
    println!("{}", compare(&refs, frames, &kinds)?);

    if let Some(max) = cli.sweep {
        print_sweep(&refs, &kinds, max)?;
    }
    Ok(())
}

fn print_sweep(refs: &[PageId], kinds: &[PolicyKind], max: usize) -> Result<()> {
    if max == 0 {
        return Err(Error::InvalidCapacity(0));
    }
    let max = max.min(MAX_SWEEP_FRAMES);

    println!("Faults by frame count:");
    print!("{:>8}", "frames");
    for kind in kinds {
        print!(" {:>8}", kind.name());
    }
    println!();

    let columns = kinds
        .iter()
        .map(|&kind| sweep(kind, refs, 1..=max))
        .collect::<Result<Vec<_>>>()?;

    for row in 0..max {
        print!("{:>8}", row + 1);
        for column in &columns {
            print!(" {:>8}", column[row].1);
        }
        println!();
    }

    if kinds.contains(&PolicyKind::Fifo) {
        let anomalies = belady_anomalies(refs, max)?;
        if !anomalies.is_empty() {
            let listed: Vec<String> = anomalies
                .iter()
                .map(|c| format!("{} -> {}", c, c + 1))
                .collect();
            println!("Bélády's anomaly (FIFO): {}", listed.join(", "));
        }
    }
    Ok(())
}

fn format_refs(refs: &[PageId]) -> String {
    let parts: Vec<String> = refs.iter().map(PageId::to_string).collect();
    format!("[{}]", parts.join(", "))
}
