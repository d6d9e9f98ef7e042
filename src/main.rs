use std::{
    fs,
    io::{self, BufRead},
    process::ExitCode,
};

use clap::Parser;
use log::LevelFilter;
use stackeval::{
    evaluate_with,
    options::{Options, UnknownCharacters},
};

/// stackeval evaluates integer arithmetic expressions built from `+ - * /`
/// and parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat `contents` as a file and evaluate each non-blank line.
    #[arg(short, long)]
    file: bool,

    /// Drop unrecognized characters instead of failing.
    #[arg(long)]
    skip_unknown: bool,

    /// Increase logging verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// The expression to evaluate. Lines are read from stdin when omitted.
    contents: Option<String>,
}

fn init_logger(verbose: u8) {
    let mut builder = env_logger::Builder::from_default_env();
    match verbose {
        0 => {},
        1 => {
            builder.filter_level(LevelFilter::Debug);
        },
        _ => {
            builder.filter_level(LevelFilter::Trace);
        },
    }
    builder.format_timestamp(None).try_init().ok();
}

fn read_lines(args: &Args) -> io::Result<Vec<String>> {
    match (&args.contents, args.file) {
        (Some(path), true) => Ok(fs::read_to_string(path)?.lines().map(str::to_string).collect()),
        (Some(expression), false) => Ok(vec![expression.clone()]),
        (None, _) => io::stdin().lock().lines().collect(),
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logger(args.verbose);

    let options = Options { unknown: if args.skip_unknown {
                                UnknownCharacters::Skip
                            } else {
                                UnknownCharacters::Reject
                            }, };

    let lines = match read_lines(&args) {
        Ok(lines) => lines,
        Err(e) => {
            eprintln!("Failed to read input: {e}");
            return ExitCode::FAILURE;
        },
    };

    let mut failed = false;
    for line in lines.iter().filter(|line| !line.trim().is_empty()) {
        match evaluate_with(line, &options) {
            Ok(value) => println!("{value}"),
            Err(e) => {
                eprintln!("Error: {e}");
                failed = true;
            },
        }
    }

    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}
