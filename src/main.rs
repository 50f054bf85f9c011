//! Activity Parser CLI
//!
//! Reads one or more activity export files and prints the extracted
//! transaction records as a JSON array (or a CSV table with `--csv`).
//!
//! # Usage
//!
//! ```bash
//! cargo run -- "My Activity.html" > transactions.json
//! cargo run -- --sort --csv export_a.html export_b.html > transactions.csv
//! ```
//!
//! Exit code 0 covers the zero-transactions case (`[]`); any read or
//! usage failure prints a `{"error": "..."}` object and exits non-zero.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `info` to control logging verbosity

use activity_parser::{export, parse_files, sort_by_timestamp_desc, ParserError, Result};
use std::env;
use std::io;
use std::path::PathBuf;
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        let payload = serde_json::json!({ "error": e.to_string() });
        println!("{payload}");
        process::exit(1);
    }
}

struct CliOptions {
    paths: Vec<PathBuf>,
    sort: bool,
    csv: bool,
}

fn parse_args(args: &[String]) -> Result<CliOptions> {
    let mut options = CliOptions {
        paths: Vec::new(),
        sort: false,
        csv: false,
    };

    for arg in args {
        match arg.as_str() {
            "--sort" => options.sort = true,
            "--csv" => options.csv = true,
            flag if flag.starts_with('-') => {
                return Err(ParserError::UnknownOption(flag.to_string()))
            }
            path => options.paths.push(PathBuf::from(path)),
        }
    }

    if options.paths.is_empty() {
        return Err(ParserError::MissingArgument);
    }

    Ok(options)
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let options = parse_args(&args)?;

    let mut records = parse_files(&options.paths)?;
    if options.sort {
        sort_by_timestamp_desc(&mut records);
    }

    let stdout = io::stdout();
    let handle = stdout.lock();

    if options.csv {
        export::write_csv(&records, handle)?;
    } else {
        serde_json::to_writer(handle, &records)?;
        println!();
    }

    Ok(())
}
