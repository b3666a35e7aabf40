//! # Validate Subcommand
//!
//! Checks one or more inputs against a document kind. A single `-` reads
//! inputs from stdin, one per line.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use clap::Args;

use brdoc_core::{validate, DocumentKind, Verdict};

use crate::config::CliConfig;
use crate::{EXIT_INVALID, EXIT_OK};

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Document kind, e.g. `cpf`, `cnpj`, `ie_sp` (see `brdoc kinds`).
    pub kind: DocumentKind,

    /// Numbers to check, punctuated or raw. Use `-` to read from stdin.
    #[arg(required = true)]
    pub inputs: Vec<String>,

    /// Emit one JSON verdict per input as a JSON array.
    #[arg(long)]
    pub json: bool,
}

/// Execute the validate subcommand.
///
/// Returns [`EXIT_INVALID`] when any input is invalid.
pub fn run_validate<R, W>(args: &ValidateArgs, config: &CliConfig, stdin: R, out: &mut W) -> Result<u8>
where
    R: BufRead,
    W: Write + ?Sized,
{
    let inputs = if args.inputs.len() == 1 && args.inputs[0] == "-" {
        read_inputs(stdin)?
    } else {
        args.inputs.clone()
    };

    let verdicts: Vec<Verdict> = inputs.iter().map(|input| validate(args.kind, input)).collect();
    let invalid = verdicts.iter().filter(|v| !v.valid).count();
    tracing::info!(kind = %args.kind, total = verdicts.len(), invalid, "validated inputs");

    if config.json || args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&verdicts)?)?;
    } else {
        for verdict in &verdicts {
            writeln!(out, "{}", describe(verdict))?;
        }
    }

    Ok(if invalid == 0 { EXIT_OK } else { EXIT_INVALID })
}

fn read_inputs<R: BufRead>(stdin: R) -> Result<Vec<String>> {
    let mut inputs = Vec::new();
    for line in stdin.lines() {
        let line = line.context("failed to read stdin")?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            inputs.push(trimmed.to_string());
        }
    }
    Ok(inputs)
}

fn describe(verdict: &Verdict) -> String {
    match (&verdict.formatted, &verdict.message) {
        (Some(formatted), _) if verdict.valid => {
            if verdict.states.is_empty() {
                format!("{}: valid ({formatted})", verdict.input)
            } else {
                let states: Vec<&str> = verdict.states.iter().map(|uf| uf.as_str()).collect();
                format!("{}: valid ({formatted}, {})", verdict.input, states.join("/"))
            }
        }
        (_, Some(message)) => format!("{}: invalid: {message}", verdict.input),
        _ => format!("{}: invalid", verdict.input),
    }
}
