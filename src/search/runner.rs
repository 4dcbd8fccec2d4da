use super::{evaluate, MatchKind, SearchOutcome, StopReason};
use crate::config::Config;
use crate::grid::factory::GridFactory;
use std::time::{Duration, Instant};
use tracing::{debug, info};

pub struct SearchOptions {
    pub max_attempts: usize,
    pub max_time: Option<Duration>,
    pub tolerance: usize,
    pub seed: Option<u64>,
    pub report_interval: usize,
}

impl From<&Config> for SearchOptions {
    fn from(cfg: &Config) -> Self {
        Self {
            max_attempts: cfg.search.max_attempts,
            max_time: None,
            tolerance: 0,
            seed: None,
            report_interval: cfg.search.report_interval,
        }
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

/// Called every `report_interval` attempts with the running rate in grids/s.
/// Returning `false` cancels the search.
pub trait ProgressCallback {
    fn on_progress(&self, attempts: usize, rate: f32) -> bool;
}

pub struct NoProgress;
impl ProgressCallback for NoProgress {
    fn on_progress(&self, _attempts: usize, _rate: f32) -> bool {
        true
    }
}

/// Generate-and-test loop over random mirror grid pairs.
pub struct MatchSearch {
    options: SearchOptions,
}

impl MatchSearch {
    pub fn new(options: SearchOptions) -> Self {
        Self { options }
    }

    pub fn run<CB: ProgressCallback>(&self, input: &str, target: &str, callback: &CB) -> SearchOutcome {
        let opts = &self.options;
        let mut factory = GridFactory::new(opts.seed);

        info!(
            "Searching mirror grids: input={} target={} tolerance={} budget={}",
            input, target, opts.tolerance, opts.max_attempts
        );

        let start_time = Instant::now();
        let mut last_report = start_time;
        let mut attempts_since_report = 0;

        for attempt in 1..=opts.max_attempts {
            if let Some(limit) = opts.max_time {
                if start_time.elapsed() >= limit {
                    return SearchOutcome::Exhausted {
                        attempts: attempt - 1,
                        reason: StopReason::TimeLimit,
                    };
                }
            }

            let pair = factory.generate();
            if let Some(found) = evaluate(pair, input, target, opts.tolerance, attempt) {
                if found.kind == MatchKind::Partial {
                    debug!(
                        "Partial hit: {} resolved to {} ({} mismatches)",
                        found.translated, found.variant, found.mismatches
                    );
                }
                info!(
                    "{} match on attempt {} ({} mismatches): {}",
                    found.kind, attempt, found.mismatches, found.variant
                );
                return SearchOutcome::Found(Box::new(found));
            }

            attempts_since_report += 1;
            if opts.report_interval > 0 && attempt % opts.report_interval == 0 {
                let now = Instant::now();
                let secs = now.duration_since(last_report).as_secs_f32();
                let rate = if secs > 0.0 {
                    attempts_since_report as f32 / secs
                } else {
                    0.0
                };
                debug!("Attempt {:>10} | {:.0} grids/s", attempt, rate);

                if !callback.on_progress(attempt, rate) {
                    return SearchOutcome::Exhausted {
                        attempts: attempt,
                        reason: StopReason::Cancelled,
                    };
                }
                last_report = now;
                attempts_since_report = 0;
            }
        }

        info!("Search stopped after {} attempts without a match", opts.max_attempts);
        SearchOutcome::Exhausted {
            attempts: opts.max_attempts,
            reason: StopReason::AttemptBudget,
        }
    }
}
