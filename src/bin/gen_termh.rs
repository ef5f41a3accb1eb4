//! Regenerates `termh.go` from the system `term.h`.
//!
//! Takes no arguments: the header path and the destination are fixed, see
//! `GeneratorConfig::system`. Set `RUST_LOG=debug` to trace every matched
//! define.

use anyhow::{Result, bail};
use std::env;
use termh_gen::{GeneratorConfig, generate};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    if let Some(arg) = env::args_os().nth(1) {
        bail!(
            "Unexpected argument {}\n\n{}",
            arg.to_string_lossy(),
            usage()
        );
    }

    let config = GeneratorConfig::system();
    generate(&config)?;
    Ok(())
}

fn usage() -> &'static str {
    "Usage: gen-termh\n\nReads /usr/include/term.h and rewrites termh.go beside the generator sources.\n"
}
