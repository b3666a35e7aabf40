//! # Weighted Checksum Rules
//!
//! Every Brazilian verifier digit is some reduction of a weighted sum
//! `s = Σ sequence[i] · weights[i]`. The reductions differ per issuer;
//! [`Rule`] enumerates the ones in use and [`compute_digit`] applies one.
//!
//! Several reductions that look different on paper are the same function:
//! `r < 2 ⇒ 0 else 11 − r`, `11 − r with 10 and 11 ⇒ 0`, and
//! `(10 · s) mod 11 with 10 ⇒ 0` all agree for every `s`. They share
//! [`Rule::Mod11`].

use serde::Serialize;

/// Value stored for a verifier digit rendered as the letter `X`.
pub const CHECK_LETTER_X: u8 = 10;

/// Reduction applied to a weighted sum to obtain a verifier digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// `r = s mod 11`; `r < 2 ⇒ 0`, otherwise `11 − r`.
    ///
    /// CPF, CNPJ, PIS/PASEP, RENAVAM and most state registrations.
    Mod11,

    /// `11 − (s mod 11)`, with 10 and 11 reduced by 10 (Rondônia).
    Mod11Rollover,

    /// `(s mod 11) mod 10` (São Paulo).
    Mod11Remainder,

    /// `s mod 11`, with 10 replaced by 1 (civil certificate numbers).
    Mod11RemainderTenAsOne,

    /// `11 − (s mod 11)`; 11 ⇒ 0 and 10 ⇒ the letter `X` (RG).
    Mod11TenAsX,

    /// `(10 − s mod 10) mod 10`.
    Mod10,

    /// Like [`Rule::Mod10`], but each product contributes the sum of its
    /// decimal digits instead of its value (Minas Gerais, first digit).
    Mod10DigitSum,

    /// `s mod 9` (Roraima).
    Mod9,

    /// Bahia picks the modulus from one digit of the base: 0-5 and 8 select
    /// [`Rule::Mod10`], anything else [`Rule::Mod11`].
    Bahia {
        /// Index in the sequence of the digit that selects the modulus.
        selector: usize,
    },

    /// [`Rule::Mod11`], except that remainder 1 yields 1 for bases in
    /// `10103105..=10119997` (Goiás).
    Goias,

    /// Amapá adds an offset `p` to the sum and substitutes `d` for an
    /// 11 result; both depend on the base range.
    Amapa,

    /// Voter titles: `s mod 11`, 10 ⇒ 0, and 0 ⇒ 1 when the region code in
    /// `sequence[0..2]` is `01` (SP) or `02` (MG).
    Electoral,
}

/// Weighted sum of a digit sequence.
///
/// # Panics
///
/// Panics if `sequence` and `weights` differ in length. The weight table is
/// static, so a mismatch is a defect in the caller, not bad input.
pub fn weighted_sum(sequence: &[u8], weights: &[u8]) -> u32 {
    assert_eq!(
        sequence.len(),
        weights.len(),
        "digit sequence and weight vector must have the same length"
    );
    sequence
        .iter()
        .zip(weights)
        .map(|(&d, &w)| u32::from(d) * u32::from(w))
        .sum()
}

/// Compute one verifier digit.
///
/// The result is always in `0..=9`, except for [`Rule::Mod11TenAsX`] which
/// may return [`CHECK_LETTER_X`].
///
/// # Panics
///
/// Panics if `sequence` and `weights` differ in length.
pub fn compute_digit(sequence: &[u8], weights: &[u8], rule: Rule) -> u8 {
    let sum = match rule {
        Rule::Mod10DigitSum => product_digit_sum(sequence, weights),
        _ => weighted_sum(sequence, weights),
    };
    let r = (sum % 11) as u8;
    match rule {
        Rule::Mod11 => mod11(r),
        Rule::Mod11Rollover => {
            let dv = 11 - r;
            if dv >= 10 {
                dv - 10
            } else {
                dv
            }
        }
        Rule::Mod11Remainder => r % 10,
        Rule::Mod11RemainderTenAsOne => {
            if r == 10 {
                1
            } else {
                r
            }
        }
        Rule::Mod11TenAsX => match 11 - r {
            11 => 0,
            dv => dv,
        },
        Rule::Mod10 | Rule::Mod10DigitSum => mod10(sum),
        Rule::Mod9 => (sum % 9) as u8,
        Rule::Bahia { selector } => match sequence[selector] {
            0..=5 | 8 => mod10(sum),
            _ => mod11(r),
        },
        Rule::Goias => match r {
            1 if (10_103_105..=10_119_997).contains(&as_number(sequence)) => 1,
            _ => mod11(r),
        },
        Rule::Amapa => {
            let (offset, eleven) = amapa_offsets(as_number(sequence));
            match 11 - (sum + offset) % 11 {
                10 => 0,
                11 => eleven,
                dv => dv as u8,
            }
        }
        Rule::Electoral => {
            let region = sequence[0] * 10 + sequence[1];
            match r {
                10 => 0,
                0 if region == 1 || region == 2 => 1,
                _ => r,
            }
        }
    }
}

fn product_digit_sum(sequence: &[u8], weights: &[u8]) -> u32 {
    assert_eq!(
        sequence.len(),
        weights.len(),
        "digit sequence and weight vector must have the same length"
    );
    sequence
        .iter()
        .zip(weights)
        .map(|(&d, &w)| digit_sum(u32::from(d) * u32::from(w)))
        .sum()
}

fn mod11(remainder: u8) -> u8 {
    if remainder < 2 {
        0
    } else {
        11 - remainder
    }
}

fn mod10(sum: u32) -> u8 {
    ((10 - sum % 10) % 10) as u8
}

fn digit_sum(mut n: u32) -> u32 {
    let mut total = 0;
    while n > 0 {
        total += n % 10;
        n /= 10;
    }
    total
}

fn as_number(sequence: &[u8]) -> u64 {
    sequence
        .iter()
        .fold(0u64, |acc, &d| acc * 10 + u64::from(d))
}

fn amapa_offsets(base: u64) -> (u32, u8) {
    match base {
        3_000_001..=3_017_000 => (5, 0),
        3_017_001..=3_019_022 => (9, 1),
        _ => (0, 0),
    }
}
