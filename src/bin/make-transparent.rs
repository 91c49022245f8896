//! Make near-black pixels of an animated GIF transparent
//!
//! Usage:
//!   make-transparent `<input.gif>` [`<output.gif>`] [--threshold `<n>`]
//!
//! Without an output path the input file is overwritten.

use clap::{value_parser, Arg, ArgAction, Command};
use std::path::PathBuf;
use ttyvid_tools::config::Loader;
use ttyvid_tools::logging;
use ttyvid_tools::transparency;

fn main() {
    let matches = Command::new("make-transparent")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Turn near-black pixels of every GIF frame transparent")
        .arg(
            Arg::new("input")
                .help("Animated GIF to process")
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .index(1),
        )
        .arg(
            Arg::new("output")
                .help("Where to write the result (defaults to the input)")
                .value_parser(value_parser!(PathBuf))
                .index(2),
        )
        .arg(
            Arg::new("threshold")
                .long("threshold")
                .short('t')
                .help("Channels strictly below this value count as black")
                .value_parser(value_parser!(u8)),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log per-frame progress to stderr")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    logging::init(matches.get_flag("verbose"));

    let input = matches
        .get_one::<PathBuf>("input")
        .expect("input is a required argument");
    let output = matches.get_one::<PathBuf>("output");

    let threshold = match matches.get_one::<u8>("threshold") {
        Some(threshold) => *threshold,
        None => Loader::new()
            .build()
            .map(|config| config.transparency.threshold)
            .unwrap_or_else(|e| {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }),
    };

    println!("Processing: {}", input.display());
    match transparency::make_transparent(input, output.map(PathBuf::as_path), threshold) {
        Ok(frames) => {
            println!("✓ Processed {} frames", frames);
            println!("✓ Saved to: {}", output.unwrap_or(input).display());
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
