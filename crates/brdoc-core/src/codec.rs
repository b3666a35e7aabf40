//! # Document Codec
//!
//! Generation and validation for every [`DocumentKind`], driven entirely by
//! the rule table in [`crate::table`].
//!
//! ## Validation order
//!
//! 1. Strip punctuation. Kinds whose check letter may be `X` keep a
//!    trailing `X`/`x` as the value 10.
//! 2. Pick the layout matching the digit count, else
//!    [`Rejection::LengthMismatch`].
//! 3. [`Rejection::DegenerateInput`] for repeated digits where the kind
//!    forbids them.
//! 4. Issuer prefix and electoral region constraints.
//! 5. Recompute each verifier digit in table order; the first disagreement
//!    is a [`Rejection::ChecksumMismatch`].
//!
//! Rejections are returned as data. Nothing here panics on user input.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize};

use crate::checksum::{compute_digit, CHECK_LETTER_X};
use crate::error::Rejection;
use crate::format::{apply_template, strip};
use crate::kind::DocumentKind;
use crate::table::{self, Layout, Scheme};
use crate::uf::{Uf, ELECTORAL_ABROAD};

/// Index of the CPF fiscal-region digit.
const CPF_REGION_AT: usize = 8;

/// A document whose verifier digits are known to be correct.
///
/// Obtained from [`generate`] or [`parse`]; there is no way to build one
/// with wrong verifier digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Document {
    kind: DocumentKind,
    layout: &'static Layout,
    digits: Vec<u8>,
}

impl Document {
    /// The document kind.
    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    /// Raw digits without punctuation. A check value of 10 renders as `X`.
    pub fn digits(&self) -> String {
        self.digits.iter().map(|&d| digit_char(d)).collect()
    }

    /// Digits rendered through the layout's punctuation template.
    pub fn formatted(&self) -> String {
        apply_template(self.digits.iter().map(|&d| digit_char(d)), self.layout.template)
    }

    /// Digit count, verifier digits included.
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Always `false`; every layout has at least one digit.
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Federative units the document is tied to.
    ///
    /// A CPF names its fiscal region (often several units), a voter title
    /// its electoral region, a state registration its issuer. Other kinds
    /// and voters registered abroad yield an empty list.
    pub fn states(&self) -> Vec<Uf> {
        match self.kind {
            DocumentKind::Cpf => Uf::from_cpf_fiscal_region(self.digits[CPF_REGION_AT]),
            DocumentKind::VoterTitle => table::scheme(self.kind)
                .region_at
                .and_then(|at| Uf::from_electoral_code(two_digits(&self.digits, at)))
                .into_iter()
                .collect(),
            DocumentKind::StateRegistration(uf) => vec![uf],
            _ => Vec::new(),
        }
    }
}

impl std::fmt::Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl Serialize for Document {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut s = serializer.serialize_struct("Document", 3)?;
        s.serialize_field("kind", &self.kind)?;
        s.serialize_field("digits", &self.digits())?;
        s.serialize_field("formatted", &self.formatted())?;
        s.end()
    }
}

/// Constraints applied while generating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Pin the CPF fiscal-region digit or the voter-title region to this
    /// unit. Ignored by other kinds.
    pub region: Option<Uf>,
}

/// Outcome of validating user input. Invalid documents are a normal
/// outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    /// Kind the input was checked against.
    pub kind: DocumentKind,
    /// The input exactly as supplied.
    pub input: String,
    /// Whether every check passed.
    pub valid: bool,
    /// Raw digits, present when valid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalized: Option<String>,
    /// Punctuated form, present when valid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted: Option<String>,
    /// Units the document is tied to, when valid and known.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub states: Vec<Uf>,
    /// Why the input was rejected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<Rejection>,
    /// Human-readable rejection message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Verdict {
    fn accepted(input: &str, document: &Document) -> Self {
        Self {
            kind: document.kind,
            input: input.to_string(),
            valid: true,
            normalized: Some(document.digits()),
            formatted: Some(document.formatted()),
            states: document.states(),
            reason: None,
            message: None,
        }
    }

    fn rejected(kind: DocumentKind, input: &str, rejection: Rejection) -> Self {
        Self {
            kind,
            input: input.to_string(),
            valid: false,
            normalized: None,
            formatted: None,
            states: Vec::new(),
            message: Some(rejection.to_string()),
            reason: Some(rejection),
        }
    }
}

/// Generate a random valid document with the current layout of `kind`.
pub fn generate<R: Rng + ?Sized>(kind: DocumentKind, rng: &mut R) -> Document {
    generate_with(kind, &GenerateOptions::default(), rng)
}

/// Generate a random valid document, honouring `options`.
///
/// Free positions are drawn uniformly from `0..=9`. Issuer prefixes are
/// picked uniformly among those allowed, the electoral region uniformly
/// from `01..=28` unless pinned. Kinds that reject repeated digits are
/// redrawn until the result is not degenerate.
pub fn generate_with<R: Rng + ?Sized>(
    kind: DocumentKind,
    options: &GenerateOptions,
    rng: &mut R,
) -> Document {
    let scheme = table::scheme(kind);
    let layout = scheme.primary();
    loop {
        let mut digits: Vec<u8> = (0..layout.len).map(|_| rng.gen_range(0..=9)).collect();

        if let Some(prefix) = layout.prefixes.choose(rng) {
            for (slot, c) in digits.iter_mut().zip(prefix.bytes()) {
                *slot = c - b'0';
            }
        }

        if let Some(at) = scheme.region_at {
            let code = match options.region {
                Some(uf) => uf.electoral_code(),
                None => rng.gen_range(1..=ELECTORAL_ABROAD),
            };
            digits[at] = code / 10;
            digits[at + 1] = code % 10;
        }

        if let (DocumentKind::Cpf, Some(uf)) = (kind, options.region) {
            digits[CPF_REGION_AT] = uf.cpf_fiscal_region();
        }

        for check in layout.checks {
            digits[check.at] = compute_digit(&check.sequence(&digits), check.weights, check.rule);
        }

        if scheme.rejects_repeated && is_repeated(&digits) {
            continue;
        }
        return Document {
            kind,
            layout,
            digits,
        };
    }
}

/// [`generate`] with the thread-local random generator.
pub fn generate_random(kind: DocumentKind) -> Document {
    generate(kind, &mut rand::thread_rng())
}

/// Parse user input into a [`Document`], verifying every constraint.
///
/// # Errors
///
/// Returns the first [`Rejection`] encountered, in the order listed in the
/// module documentation.
pub fn parse(kind: DocumentKind, input: &str) -> Result<Document, Rejection> {
    let scheme = table::scheme(kind);
    let digits = normalize(scheme, input);

    let layout = scheme
        .layout_for(digits.len())
        .ok_or_else(|| Rejection::LengthMismatch {
            expected: scheme.lengths(),
            found: digits.len(),
        })?;

    if scheme.rejects_repeated && is_repeated(&digits) {
        return Err(Rejection::DegenerateInput);
    }

    if !layout.prefixes.is_empty()
        && !layout
            .prefixes
            .iter()
            .any(|p| digits.iter().zip(p.bytes()).all(|(&d, c)| d == c - b'0'))
    {
        return Err(Rejection::UnexpectedPrefix {
            expected: layout.prefixes.to_vec(),
        });
    }

    if let Some(at) = scheme.region_at {
        let code = two_digits(&digits, at);
        if !(1..=ELECTORAL_ABROAD).contains(&code) {
            return Err(Rejection::UnknownRegion { region: code });
        }
    }

    for check in layout.checks {
        let expected = compute_digit(&check.sequence(&digits), check.weights, check.rule);
        let found = digits[check.at];
        if expected != found {
            return Err(Rejection::ChecksumMismatch {
                position: check.at,
                expected: digit_char(expected),
                found: digit_char(found),
            });
        }
    }

    Ok(Document {
        kind,
        layout,
        digits,
    })
}

/// Validate user input, reporting the outcome as a [`Verdict`].
pub fn validate(kind: DocumentKind, input: &str) -> Verdict {
    match parse(kind, input) {
        Ok(document) => Verdict::accepted(input, &document),
        Err(rejection) => {
            tracing::debug!(kind = %kind, reason = rejection.code(), "document rejected: {rejection}");
            Verdict::rejected(kind, input, rejection)
        }
    }
}

fn normalize(scheme: &Scheme, input: &str) -> Vec<u8> {
    let mut digits: Vec<u8> = strip(input).bytes().map(|b| b - b'0').collect();
    if scheme.check_letter && input.trim_end().ends_with(|c: char| c.eq_ignore_ascii_case(&'x')) {
        digits.push(CHECK_LETTER_X);
    }
    digits
}

fn is_repeated(digits: &[u8]) -> bool {
    digits.windows(2).all(|w| w[0] == w[1])
}

fn two_digits(digits: &[u8], at: usize) -> u8 {
    digits[at] * 10 + digits[at + 1]
}

fn digit_char(d: u8) -> char {
    if d == CHECK_LETTER_X {
        'X'
    } else {
        char::from(b'0' + d)
    }
}
