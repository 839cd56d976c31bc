use std::fs;

use calcbrain::keypad::{Dispatch, replay};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

/// calcbrain replays calculator keystrokes and prints the display value.
///
/// Keys are separated by whitespace, for example `4 + 3 =` or `2 √ sin`.
/// Numbers set the operand, `C` clears, and everything else is an operator.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells calcbrain to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Fails on operator keys the calculator does not know instead of
    /// ignoring them.
    #[arg(short, long)]
    strict: bool,

    /// Does not print the final result.
    #[arg(short, long)]
    quiet: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    // RUST_LOG controls verbosity, warn by default.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter)
         .with_writer(std::io::stderr)
         .with_target(false)
         .init();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    let dispatch = if args.strict { Dispatch::Strict } else { Dispatch::Lenient };

    match replay(&script, dispatch) {
        Ok(result) => {
            if !args.quiet {
                println!("{result}");
            }
        },
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
