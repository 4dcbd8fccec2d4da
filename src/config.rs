use crate::tabula::KeywordPlacement;
use clap::Args;

#[derive(Args, Debug, Clone, Default)]
pub struct Config {
    #[command(flatten)]
    pub search: SearchParams,
    #[command(flatten)]
    pub tabula: TabulaParams,
}

#[derive(Args, Debug, Clone)]
pub struct SearchParams {
    /// Grid pairs to try before giving up.
    #[arg(long, default_value_t = 1_000_000)]
    pub max_attempts: usize,
    /// Attempts between progress reports.
    #[arg(long, default_value_t = 100_000)]
    pub report_interval: usize,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            max_attempts: 1_000_000,
            report_interval: 100_000,
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct TabulaParams {
    #[arg(long, default_value_t = KeywordPlacement::Prefix)]
    pub keyword_placement: KeywordPlacement,
}
