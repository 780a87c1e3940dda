//! CLI entry point for dirwalk

use std::path::PathBuf;
use std::process;

use clap::Parser;
use dirwalk::{
    CountAggregator, DEFAULT_TARGET, DirectoryWalker, Exclusions, TotalReport, WalkError,
    print_total, print_total_json,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "dirwalk")]
#[command(about = "Walk a directory tree and sum the numbers stored in `count` files")]
#[command(version)]
struct Args {
    /// Directory to walk
    #[arg(default_value = "public/test")]
    path: PathBuf,

    /// Name of the files whose contents are summed
    #[arg(short = 'n', long = "name", default_value = DEFAULT_TARGET)]
    name: String,

    /// Only look at the immediate entries of PATH
    #[arg(long = "no-recursive")]
    no_recursive: bool,

    /// Skip entries with this name, along with everything under them
    /// (can be used multiple times)
    #[arg(short = 'x', long = "exclude", value_name = "NAME")]
    exclude: Vec<String>,

    /// Visit entries in name order
    #[arg(long = "sorted")]
    sorted: bool,

    /// Number of fractional digits kept in the running total (truncated after each addition)
    #[arg(long = "scale", default_value = "0")]
    scale: u32,

    /// Output in JSON format
    #[arg(long = "json")]
    json: bool,

    /// Log each directory walked and each file summed to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("dirwalk=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> Result<(), WalkError> {
    let mut exclusions = Exclusions::default();
    for name in &args.exclude {
        exclusions.insert(name.as_str(), "excluded on the command line");
    }

    let walker = DirectoryWalker::new()
        .with_exclusions(exclusions)
        .with_sorted_entries(args.sorted);
    let mut aggregator = CountAggregator::new()
        .with_target(args.name.as_str())
        .with_scale(args.scale);

    walker.walk(&args.path, !args.no_recursive, &mut aggregator)?;

    let report = TotalReport::new(&args.path, &aggregator);
    if args.json {
        print_total_json(&report)
    } else {
        print_total(&report)
    }
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("dirwalk: {}", e);
        process::exit(1);
    }
}
