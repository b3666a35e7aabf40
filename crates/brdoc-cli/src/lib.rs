//! # brdoc-cli: Brazilian Document Command-Line Interface
//!
//! Provides the `brdoc` binary on top of `brdoc-core`.
//!
//! ## Subcommands
//!
//! - `brdoc kinds`: List supported document kinds.
//! - `brdoc generate <kind>`: Generate valid numbers.
//! - `brdoc validate <kind> <input>...`: Check numbers.
//!
//! ```bash
//! brdoc generate cpf --count 3 --uf SP
//! brdoc validate cnpj 11.222.333/0001-81
//! brdoc validate ie_mg 062.307.904/0081 --json
//! ```
//!
//! ## Exit codes
//!
//! - `0`: success; for `validate`, every input is valid.
//! - `1`: usage, configuration or I/O error.
//! - `2`: `validate` found at least one invalid input.
//!
//! ## Crate Policy
//!
//! - Argument parsing lives in `main.rs`; handlers take parsed arguments,
//!   the loaded [`config::CliConfig`] and an output writer.
//! - Results go to stdout, logs to stderr.

pub mod config;
pub mod generate;
pub mod kinds;
pub mod validate;

/// Exit code for a successful run.
pub const EXIT_OK: u8 = 0;

/// Exit code when at least one validated input is invalid.
pub const EXIT_INVALID: u8 = 2;
