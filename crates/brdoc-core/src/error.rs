//! # Error Types
//!
//! Two families live here:
//!
//! - [`Rejection`]: why a user-supplied document is not valid. Rejections
//!   are ordinary outcomes and travel as data inside a
//!   [`Verdict`](crate::codec::Verdict); they are never retried.
//! - [`FormatMismatch`] and [`BrdocError`]: caller defects and parse
//!   failures for kind / unit identifiers.

use serde::Serialize;
use thiserror::Error;

/// Top-level error type for the crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BrdocError {
    /// A document failed validation.
    #[error("invalid document: {0}")]
    Rejected(#[from] Rejection),

    /// A punctuation template did not fit the digits it was given.
    #[error(transparent)]
    Format(#[from] FormatMismatch),

    /// Unrecognized document kind identifier.
    #[error("unknown document kind: {0:?}")]
    UnknownKind(String),

    /// Unrecognized federative unit code.
    #[error("unknown federative unit: {0:?}")]
    UnknownUf(String),
}

/// Reason a document was judged invalid.
///
/// Serialized with a `code` tag so API and CLI consumers can branch on
/// the machine-readable code without parsing the message.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum Rejection {
    /// Digit count does not match any layout of the document kind.
    #[error("expected {} digits, found {found}", describe_lengths(.expected))]
    LengthMismatch {
        /// Accepted digit counts, current layout first.
        expected: Vec<usize>,
        /// Digit count found after stripping punctuation.
        found: usize,
    },

    /// Every digit is the same (e.g. `000.000.000-00`).
    #[error("all digits are identical")]
    DegenerateInput,

    /// The document does not start with a prefix its issuer assigns.
    #[error("expected the document to start with {}", .expected.join(" or "))]
    UnexpectedPrefix {
        /// Accepted leading digit groups.
        expected: Vec<&'static str>,
    },

    /// The voter-title region slot is outside `01..=28`.
    #[error("unknown electoral region {region:02}")]
    UnknownRegion {
        /// The two-digit code found.
        region: u8,
    },

    /// A recomputed verifier digit differs from the supplied one.
    #[error("verifier digit {} should be {expected}, found {found}", .position + 1)]
    ChecksumMismatch {
        /// Zero-based index of the verifier digit in the stripped document.
        position: usize,
        /// Recomputed character.
        expected: char,
        /// Supplied character.
        found: char,
    },
}

impl Rejection {
    /// Machine-readable code, identical to the serde `code` tag.
    pub fn code(&self) -> &'static str {
        match self {
            Self::LengthMismatch { .. } => "length_mismatch",
            Self::DegenerateInput => "degenerate_input",
            Self::UnexpectedPrefix { .. } => "unexpected_prefix",
            Self::UnknownRegion { .. } => "unknown_region",
            Self::ChecksumMismatch { .. } => "checksum_mismatch",
        }
    }
}

/// A template's placeholder count disagrees with the digits supplied.
///
/// This signals a caller defect, not bad user input: every layout in the
/// rule table pairs a template with its exact length.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("template has {placeholders} placeholders but {digits} digits were supplied")]
pub struct FormatMismatch {
    /// Number of `#` placeholders in the template.
    pub placeholders: usize,
    /// Number of characters supplied.
    pub digits: usize,
}

fn describe_lengths(lengths: &[usize]) -> String {
    lengths
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(" or ")
}
