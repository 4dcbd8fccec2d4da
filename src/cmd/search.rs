use crate::reports;
use clap::Args;
use k4mirror::config::Config;
use k4mirror::error::K4Result;
use k4mirror::search::{MatchResult, MatchSearch, ProgressCallback, SearchOptions};
use k4mirror::tabula::TabulaRecta;
use serde::Serialize;
use std::time::Duration;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// Keyword for the tabula recta (e.g. KRYPTOS)
    pub keyword: String,
    /// Starting row letter in the tabula recta (e.g. A)
    pub start_pos: String,
    /// Known cipher fragment (e.g. FLRVQQPRNGKSS)
    pub input_string: String,
    /// Known plaintext fragment (e.g. EASTNORTHEAST)
    pub output_string: String,
    /// Allowed mismatches between translation and plaintext
    pub admitted_n_mismatches: usize,

    #[command(flatten)]
    pub config: Config,

    #[arg(short = 'T', long)]
    pub time: Option<u64>,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    /// Print the result as JSON instead of tables.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

struct CliLogger;
impl ProgressCallback for CliLogger {
    fn on_progress(&self, attempts: usize, rate: f32) -> bool {
        info!("Attempt {:>10} | {:.0} grids/s", attempts, rate);
        true
    }
}

#[derive(Serialize)]
struct SearchReport<'a> {
    input: &'a str,
    phase1: &'a str,
    phase2: String,
    #[serde(flatten)]
    result: &'a MatchResult,
}

pub fn run(args: SearchArgs) -> K4Result<()> {
    let table = TabulaRecta::build_with(&args.keyword, args.config.tabula.keyword_placement);
    let phase1 = table.apply(&args.input_string, &args.start_pos)?;
    println!("Phase 1 transformation: {}", phase1);

    let mut options = SearchOptions::from(&args.config);
    options.tolerance = args.admitted_n_mismatches;
    options.seed = args.seed;
    options.max_time = args.time.map(Duration::from_secs);

    let search = MatchSearch::new(options);
    let result = search
        .run(&phase1, &args.output_string, &CliLogger)
        .into_result()?;

    let phase2 = result.pair.translate(&phase1);

    if args.json {
        let report = SearchReport {
            input: &args.input_string,
            phase1: &phase1,
            phase2,
            result: &result,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    reports::print_match(&result);
    println!("Input string: {}", args.input_string);
    println!("Phase 1 transformation: {}", phase1);
    println!("Phase 2 transformation: {}", phase2);
    Ok(())
}
