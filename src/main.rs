use clap::Parser;
use log::{LevelFilter, warn};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::path::PathBuf;
use std::process;

use is_different::{CancelFlag, ComparisonOutcome, compare_with_cancel};

#[derive(Parser)]
#[command(about = "Reports whether two files have identical contents", long_about = None)]
#[clap(author, version)]
struct Args {
	/// First file to compare
	file_a: PathBuf,

	/// Second file to compare
	file_b: PathBuf,

	/// Enable debug logging
	#[arg(short, long)]
	verbose: bool,
}

fn main() {
	let args = Args::parse();

	let level = if args.verbose {
		LevelFilter::Debug
	} else {
		LevelFilter::Warn
	};
	if TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto).is_err() {
		eprintln!("failed to initialise logging");
	}

	// Ctrl-C aborts both digest computations between chunk reads
	let cancel = CancelFlag::new();
	let handler_flag = cancel.clone();
	if let Err(e) = ctrlc::set_handler(move || handler_flag.cancel()) {
		warn!("could not install interrupt handler: {}", e);
	}

	let outcome = compare_with_cancel(&args.file_a, &args.file_b, &cancel);
	process::exit(render(&args, &outcome));
}

fn render(args: &Args, outcome: &ComparisonOutcome) -> i32 {
	match outcome {
		ComparisonOutcome::Identical { digest } => {
			println!("{}  {}", digest, args.file_a.display());
			println!("{}  {}", digest, args.file_b.display());
			println!("Files are identical");
			0
		}
		ComparisonOutcome::Different { left, right } => {
			println!("{}  {}", left, args.file_a.display());
			println!("{}  {}", right, args.file_b.display());
			println!("Files are different");
			1
		}
		ComparisonOutcome::Failed { left, right } => {
			if let Some(e) = left {
				eprintln!("error: {}", e);
			}
			if let Some(e) = right {
				eprintln!("error: {}", e);
			}
			2
		}
	}
}
