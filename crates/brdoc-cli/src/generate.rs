//! # Generate Subcommand
//!
//! Prints random valid document numbers, one per line, or a JSON object
//! with `--json`.

use std::io::Write;

use anyhow::{bail, Result};
use clap::Args;
use rand::Rng;
use serde::Serialize;

use brdoc_core::{generate_with, DocumentKind, GenerateOptions, Uf};

use crate::config::CliConfig;
use crate::EXIT_OK;

/// Arguments for the generate subcommand.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Document kind, e.g. `cpf`, `cnpj`, `ie_sp` (see `brdoc kinds`).
    pub kind: DocumentKind,

    /// Number of documents to generate.
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Federative unit for the CPF fiscal region or voter-title region.
    #[arg(long)]
    pub uf: Option<Uf>,

    /// Print raw digits without punctuation.
    #[arg(long)]
    pub raw: bool,

    /// Emit JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct GenerateOutput<'a> {
    kind: DocumentKind,
    documents: &'a [String],
}

/// Largest batch `--json` will hold in memory. Text output streams and has
/// no ceiling.
pub const MAX_JSON_COUNT: usize = 100_000;

/// Execute the generate subcommand.
pub fn run_generate<R, W>(args: &GenerateArgs, config: &CliConfig, rng: &mut R, out: &mut W) -> Result<u8>
where
    R: Rng + ?Sized,
    W: Write + ?Sized,
{
    let count = args.count.unwrap_or(config.count);
    if count == 0 {
        bail!("--count must be at least 1");
    }
    let formatted = config.formatted && !args.raw;
    let json = config.json || args.json;
    if json && count > MAX_JSON_COUNT {
        bail!("--json holds at most {MAX_JSON_COUNT} documents, got {count}; drop --json to stream");
    }

    if args.uf.is_some() && !matches!(args.kind, DocumentKind::Cpf | DocumentKind::VoterTitle) {
        tracing::warn!(kind = %args.kind, "--uf only applies to cpf and voter_title; ignoring");
    }
    let options = GenerateOptions { region: args.uf };
    let mut documents = (0..count).map(|_| {
        let doc = generate_with(args.kind, &options, rng);
        if formatted {
            doc.formatted()
        } else {
            doc.digits()
        }
    });

    if json {
        let documents: Vec<String> = documents.collect();
        let output = GenerateOutput {
            kind: args.kind,
            documents: &documents,
        };
        writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
    } else {
        documents.try_for_each(|doc| writeln!(out, "{doc}"))?;
    }
    tracing::info!(kind = %args.kind, count, "generated documents");
    Ok(EXIT_OK)
}
