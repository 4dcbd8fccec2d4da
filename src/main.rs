use clap::{Parser, Subcommand};
use std::process;
use tracing::{error, Level};

mod cmd;
mod reports;

/// Attempt at K4 via the keyed tabula recta with a pre-selected start row
/// and symmetrical matrix transposition.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Search for a mirror grid pair binding cipher to plaintext
    Search(cmd::search::SearchArgs),
    /// Letter distances between two equal-length texts
    Distance(cmd::distance::DistanceArgs),
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .init();

    let result = match cli.command {
        Commands::Search(args) => cmd::search::run(args),
        Commands::Distance(args) => cmd::distance::run(args),
    };

    if let Err(e) = result {
        error!("{}", e);
        process::exit(1);
    }
}
