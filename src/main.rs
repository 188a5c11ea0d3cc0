//! livemark CLI - render a note to an HTML fragment
//!
//! Usage: `livemark [FILE|-]`. Reads stdin when no file (or `-`) is given.
//! Set `RUST_LOG=livemark=trace` to see per-phase sizes on stderr.

use std::io::{self, Read, Write};

use log::debug;

fn main() -> io::Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    let input = match args.get(1).map(String::as_str) {
        Some(path) if path != "-" => {
            debug!("reading {path}");
            std::fs::read_to_string(path)?
        }
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let html = livemark::to_html(&input);
    io::stdout().write_all(html.as_bytes())?;

    Ok(())
}
