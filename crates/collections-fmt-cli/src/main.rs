//! Command-line front end for `collections-fmt`.
//!
//! Reads captured assertion output from a file (or stdin when no path is
//! given), formats it, and prints the result.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p collections-fmt-cli -- failure.log
//! scala-test-run 2>&1 | cargo run -p collections-fmt-cli
//! ```

use std::env;
use std::fs;
use std::io::{self, Read};
use std::process;

use collections_fmt::{Document, LineFormatter, apply_insertions};

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() > 2 {
        eprintln!("usage: {} [file]", args[0]);
        eprintln!("\nWith no file, text is read from stdin.");
        process::exit(1);
    }

    let text = match args.get(1) {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let formatter = LineFormatter::default();
    let edits = formatter.format(&Document::from_text(&text));
    let formatted = apply_insertions(&text, &edits).map_err(io::Error::other)?;

    print!("{formatted}");
    Ok(())
}
