//! # brcode
//!
//! Prints a Pix BR Code payload for the configured merchant, or verifies
//! an existing one.
//!
//! ```text
//! $ brcode --amount 10.50
//! 00020126360014br.gov.bcb.pix0114+5511987654321...6304XXXX
//!
//! $ brcode verify '0002012636...63043E12'
//! CRC16 OK
//! 00 02 01
//! 26 36 0014br.gov.bcb.pix0114+5511987654321
//! ...
//! ```
//!
//! Logs go to stderr (`RUST_LOG`, default `warn`) so stdout stays pipeable.

mod cli;
mod config;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::cli::{Args, Command};
use crate::config::BrCodeConfig;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    debug!(?args.config, "Starting brcode");

    let output = match &args.command {
        Some(Command::Verify { payload }) => cli::verify(payload)?,
        None => {
            let config = BrCodeConfig::load(args.config.as_deref())?;
            cli::generate(&args, &config)?
        }
    };

    println!("{}", output);
    Ok(())
}
