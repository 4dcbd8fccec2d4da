use crate::reports;
use clap::Args;
use k4mirror::distance::compute_alphabet_distances;
use k4mirror::error::K4Result;

#[derive(Args, Debug, Clone)]
pub struct DistanceArgs {
    /// Reference text (e.g. a deciphered passage)
    pub reference: String,
    /// Text compared against the reference
    pub comparison: String,
}

pub fn run(args: DistanceArgs) -> K4Result<()> {
    let distances = compute_alphabet_distances(&args.reference, &args.comparison)?;
    reports::print_distances(&distances);
    Ok(())
}
