//! # Federative Units
//!
//! The 26 states plus the Federal District. One enum is shared by every
//! place that needs a unit: the state-registration kinds, the CPF fiscal
//! region digit and the voter-title region slot. Every `match` on [`Uf`]
//! is exhaustive, so a new unit cannot be silently skipped by any table.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::BrdocError;

/// Brazilian federative unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Uf {
    Ac,
    Al,
    Ap,
    Am,
    Ba,
    Ce,
    Df,
    Es,
    Go,
    Ma,
    Mt,
    Ms,
    Mg,
    Pa,
    Pb,
    Pr,
    Pe,
    Pi,
    Rj,
    Rn,
    Rs,
    Ro,
    Rr,
    Sc,
    Sp,
    Se,
    To,
}

/// Total number of federative units.
pub const UF_COUNT: usize = 27;

/// Electoral region code used for voters registered abroad.
pub const ELECTORAL_ABROAD: u8 = 28;

impl Uf {
    /// All units in alphabetical order of their full names.
    pub fn all() -> &'static [Uf] {
        &[
            Self::Ac,
            Self::Al,
            Self::Ap,
            Self::Am,
            Self::Ba,
            Self::Ce,
            Self::Df,
            Self::Es,
            Self::Go,
            Self::Ma,
            Self::Mt,
            Self::Ms,
            Self::Mg,
            Self::Pa,
            Self::Pb,
            Self::Pr,
            Self::Pe,
            Self::Pi,
            Self::Rj,
            Self::Rn,
            Self::Rs,
            Self::Ro,
            Self::Rr,
            Self::Sc,
            Self::Sp,
            Self::Se,
            Self::To,
        ]
    }

    /// Two-letter postal code, upper case.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ac => "AC",
            Self::Al => "AL",
            Self::Ap => "AP",
            Self::Am => "AM",
            Self::Ba => "BA",
            Self::Ce => "CE",
            Self::Df => "DF",
            Self::Es => "ES",
            Self::Go => "GO",
            Self::Ma => "MA",
            Self::Mt => "MT",
            Self::Ms => "MS",
            Self::Mg => "MG",
            Self::Pa => "PA",
            Self::Pb => "PB",
            Self::Pr => "PR",
            Self::Pe => "PE",
            Self::Pi => "PI",
            Self::Rj => "RJ",
            Self::Rn => "RN",
            Self::Rs => "RS",
            Self::Ro => "RO",
            Self::Rr => "RR",
            Self::Sc => "SC",
            Self::Sp => "SP",
            Self::Se => "SE",
            Self::To => "TO",
        }
    }

    /// Full name of the unit.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ac => "Acre",
            Self::Al => "Alagoas",
            Self::Ap => "Amapá",
            Self::Am => "Amazonas",
            Self::Ba => "Bahia",
            Self::Ce => "Ceará",
            Self::Df => "Distrito Federal",
            Self::Es => "Espírito Santo",
            Self::Go => "Goiás",
            Self::Ma => "Maranhão",
            Self::Mt => "Mato Grosso",
            Self::Ms => "Mato Grosso do Sul",
            Self::Mg => "Minas Gerais",
            Self::Pa => "Pará",
            Self::Pb => "Paraíba",
            Self::Pr => "Paraná",
            Self::Pe => "Pernambuco",
            Self::Pi => "Piauí",
            Self::Rj => "Rio de Janeiro",
            Self::Rn => "Rio Grande do Norte",
            Self::Rs => "Rio Grande do Sul",
            Self::Ro => "Rondônia",
            Self::Rr => "Roraima",
            Self::Sc => "Santa Catarina",
            Self::Sp => "São Paulo",
            Self::Se => "Sergipe",
            Self::To => "Tocantins",
        }
    }

    /// Region code the electoral courts print in digits 9-10 of a voter title.
    pub fn electoral_code(&self) -> u8 {
        match self {
            Self::Sp => 1,
            Self::Mg => 2,
            Self::Rj => 3,
            Self::Rs => 4,
            Self::Ba => 5,
            Self::Pr => 6,
            Self::Ce => 7,
            Self::Pe => 8,
            Self::Sc => 9,
            Self::Go => 10,
            Self::Ma => 11,
            Self::Pb => 12,
            Self::Pa => 13,
            Self::Es => 14,
            Self::Pi => 15,
            Self::Rn => 16,
            Self::Al => 17,
            Self::Mt => 18,
            Self::Ms => 19,
            Self::Df => 20,
            Self::Se => 21,
            Self::Am => 22,
            Self::Ro => 23,
            Self::Ac => 24,
            Self::Ap => 25,
            Self::Rr => 26,
            Self::To => 27,
        }
    }

    /// Inverse of [`Uf::electoral_code`]. Code 28 (abroad) and anything
    /// outside `1..=27` map to `None`.
    pub fn from_electoral_code(code: u8) -> Option<Uf> {
        Self::all()
            .iter()
            .copied()
            .find(|uf| uf.electoral_code() == code)
    }

    /// Fiscal region printed as the ninth digit of a CPF.
    pub fn cpf_fiscal_region(&self) -> u8 {
        match self {
            Self::Rs => 0,
            Self::Df | Self::Go | Self::Ms | Self::Mt | Self::To => 1,
            Self::Ac | Self::Am | Self::Ap | Self::Pa | Self::Ro | Self::Rr => 2,
            Self::Ce | Self::Ma | Self::Pi => 3,
            Self::Al | Self::Pb | Self::Pe | Self::Rn => 4,
            Self::Ba | Self::Se => 5,
            Self::Mg => 6,
            Self::Es | Self::Rj => 7,
            Self::Sp => 8,
            Self::Pr | Self::Sc => 9,
        }
    }

    /// Units served by a CPF fiscal region digit.
    pub fn from_cpf_fiscal_region(region: u8) -> Vec<Uf> {
        Self::all()
            .iter()
            .copied()
            .filter(|uf| uf.cpf_fiscal_region() == region)
            .collect()
    }
}

impl std::fmt::Display for Uf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Uf {
    type Err = BrdocError;

    /// Parse a two-letter code, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_uppercase();
        Self::all()
            .iter()
            .copied()
            .find(|uf| uf.as_str() == code)
            .ok_or_else(|| BrdocError::UnknownUf(s.to_string()))
    }
}
