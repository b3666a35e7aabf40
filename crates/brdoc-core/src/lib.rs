//! # brdoc-core: Verifier Digits for Brazilian Documents
//!
//! Generation and validation of CPF, CNPJ, RG, PIS/PASEP, RENAVAM, voter
//! titles, civil certificate numbers and the 27 state tax registrations.
//! Every other crate in the workspace depends on `brdoc-core`; it depends
//! on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **One checksum function.** Every verifier digit is
//!    [`checksum::compute_digit`] over a digit span, a weight vector and a
//!    [`checksum::Rule`]. No per-document arithmetic anywhere else.
//!
//! 2. **The rule table is data.** Lengths, punctuation, issuer prefixes and
//!    ordered checks live in [`table`]; the [`codec`] is generic over it.
//!
//! 3. **Invalid documents are values.** [`codec::validate`] returns a
//!    [`Verdict`] carrying a [`Rejection`]; only caller defects (template
//!    mismatch, weight vector length) surface as `Err` or a panic.
//!
//! 4. **Typed documents.** [`Cpf`], [`Cnpj`] and friends can only hold
//!    verified numbers, including after deserialization.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `.unwrap()` outside tests.
//! - Pure and synchronous; the only side effect is a `tracing` event per
//!   rejected validation.

pub mod checksum;
pub mod codec;
pub mod error;
pub mod format;
pub mod identity;
pub mod kind;
pub mod table;
pub mod uf;

// Re-export primary types for ergonomic imports.
pub use checksum::{compute_digit, weighted_sum, Rule};
pub use codec::{generate, generate_random, generate_with, parse, validate, Document, GenerateOptions, Verdict};
pub use error::{BrdocError, FormatMismatch, Rejection};
pub use format::{format, strip};
pub use identity::{Certificate, Cnpj, Cpf, Pis, Renavam, Rg, StateRegistration, VoterTitle};
pub use kind::{catalogue, DocumentKind, KindSummary};
pub use uf::{Uf, UF_COUNT};
