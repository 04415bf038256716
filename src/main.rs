use std::{fs, process::ExitCode};

use addsub::{
    evaluate,
    interpreter::parser::{Options, ParenMatching},
    render,
};
use clap::{ArgAction, Parser};
use env_logger::Env;

const DEFAULT_EXPRESSION: &str = "(13-4)-(12+1)";

/// addsub evaluates integer expressions made of `+`, `-` and parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells addsub to read the expression from a file instead.
    #[arg(short, long)]
    file: bool,

    /// Match parentheses by nesting depth instead of closing a group at the
    /// first `)`.
    #[arg(short, long)]
    balanced: bool,

    /// Print the token stream to stderr.
    #[arg(long)]
    tokens: bool,

    /// Print the parsed tree to stderr.
    #[arg(long)]
    tree: bool,

    /// Raise the log level; repeat for more detail.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    #[arg(default_value = DEFAULT_EXPRESSION)]
    contents: String,
}

impl Args {
    const fn options(&self) -> Options {
        let paren_matching = if self.balanced {
            ParenMatching::Balanced
        } else {
            ParenMatching::FirstClosing
        };
        Options { paren_matching }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    let source = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(contents) => contents.trim_end().to_string(),
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents.clone()
    };

    if source.contains(['\n', '\r']) {
        eprintln!("Expected a single-line expression; only trailing line breaks are trimmed.");
        return ExitCode::FAILURE;
    }

    match evaluate(&source, &args.options()) {
        Ok(evaluation) => {
            if args.tokens {
                for token in &evaluation.tokens {
                    eprintln!("{token}");
                }
            }
            if args.tree {
                eprintln!("{}", evaluation.tree);
            }
            println!("{}", render(&source, evaluation.value));
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}
