//! # Kinds Subcommand
//!
//! Lists every supported document kind with its accepted lengths and the
//! punctuation template of its current layout.

use std::io::Write;

use anyhow::Result;
use clap::Args;

use brdoc_core::catalogue;

use crate::config::CliConfig;
use crate::EXIT_OK;

/// Arguments for the kinds subcommand.
#[derive(Args, Debug)]
pub struct KindsArgs {
    /// Emit JSON.
    #[arg(long)]
    pub json: bool,
}

/// Execute the kinds subcommand.
pub fn run_kinds<W: Write + ?Sized>(args: &KindsArgs, config: &CliConfig, out: &mut W) -> Result<u8> {
    let rows = catalogue();
    if config.json || args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&rows)?)?;
        return Ok(EXIT_OK);
    }
    for row in &rows {
        let lengths = row
            .lengths
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join("/");
        writeln!(
            out,
            "  {:<12} {:<28} {:<6} {}",
            row.id, row.label, lengths, row.template
        )?;
    }
    writeln!(out)?;
    writeln!(out, "Total: {} kinds", rows.len())?;
    Ok(EXIT_OK)
}
