//! # Document Kinds
//!
//! One variant per document the toolkit understands. State registrations
//! are parameterized by their issuing [`Uf`], so the 27 state-specific rule
//! sets stay behind a single variant.
//!
//! Identifiers are lower-case: `cpf`, `cnpj`, `rg`, `pis`, `renavam`,
//! `voter_title`, `certificate`, and `ie_<uf>` (`ie_sp`) for state
//! registrations. Parsing also accepts `-` for `_` and `ie:<uf>`.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::BrdocError;
use crate::table::scheme;
use crate::uf::Uf;

/// A document type with its own verifier-digit rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DocumentKind {
    /// Individual taxpayer registry (Cadastro de Pessoas Físicas).
    Cpf,
    /// Company taxpayer registry (Cadastro Nacional da Pessoa Jurídica).
    Cnpj,
    /// Identity card number, São Paulo issuer check digit.
    Rg,
    /// Social integration program number (PIS/PASEP/NIT).
    Pis,
    /// National vehicle registry number.
    Renavam,
    /// Voter registration title (título de eleitor).
    VoterTitle,
    /// Civil registry certificate number (matrícula de certidão).
    Certificate,
    /// State tax registration (inscrição estadual).
    StateRegistration(Uf),
}

impl DocumentKind {
    /// Every kind, national documents first, then one state registration
    /// per unit.
    pub fn all() -> Vec<DocumentKind> {
        let mut kinds = vec![
            Self::Cpf,
            Self::Cnpj,
            Self::Rg,
            Self::Pis,
            Self::Renavam,
            Self::VoterTitle,
            Self::Certificate,
        ];
        kinds.extend(Uf::all().iter().copied().map(Self::StateRegistration));
        kinds
    }

    /// Stable identifier, e.g. `"cpf"` or `"ie_sp"`.
    pub fn id(&self) -> String {
        match self {
            Self::StateRegistration(uf) => format!("ie_{}", uf.as_str().to_ascii_lowercase()),
            other => other.national_id().to_string(),
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> String {
        match self {
            Self::Cpf => "CPF".to_string(),
            Self::Cnpj => "CNPJ".to_string(),
            Self::Rg => "RG".to_string(),
            Self::Pis => "PIS/PASEP".to_string(),
            Self::Renavam => "RENAVAM".to_string(),
            Self::VoterTitle => "Título de eleitor".to_string(),
            Self::Certificate => "Certidão (matrícula)".to_string(),
            Self::StateRegistration(uf) => format!("Inscrição estadual ({uf})"),
        }
    }

    fn national_id(&self) -> &'static str {
        match self {
            Self::Cpf => "cpf",
            Self::Cnpj => "cnpj",
            Self::Rg => "rg",
            Self::Pis => "pis",
            Self::Renavam => "renavam",
            Self::VoterTitle => "voter_title",
            Self::Certificate => "certificate",
            Self::StateRegistration(_) => "ie",
        }
    }
}

/// One row of the kind catalogue, read straight from the rule table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KindSummary {
    /// Identifier used on the command line and in URLs.
    pub id: String,
    /// Human-readable name.
    pub label: String,
    /// Accepted digit counts, current layout first.
    pub lengths: Vec<usize>,
    /// Punctuation template of the current layout.
    pub template: &'static str,
}

/// The full catalogue in [`DocumentKind::all`] order.
pub fn catalogue() -> Vec<KindSummary> {
    DocumentKind::all()
        .into_iter()
        .map(|kind| {
            let scheme = scheme(kind);
            KindSummary {
                id: kind.id(),
                label: kind.label(),
                lengths: scheme.lengths(),
                template: scheme.primary().template,
            }
        })
        .collect()
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.id())
    }
}

impl FromStr for DocumentKind {
    type Err = BrdocError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        let kind = match normalized.as_str() {
            "cpf" => Self::Cpf,
            "cnpj" => Self::Cnpj,
            "rg" => Self::Rg,
            "pis" | "pasep" | "nit" => Self::Pis,
            "renavam" => Self::Renavam,
            "voter_title" | "titulo" | "titulo_eleitor" => Self::VoterTitle,
            "certificate" | "certidao" => Self::Certificate,
            other => {
                let uf = other
                    .strip_prefix("ie_")
                    .or_else(|| other.strip_prefix("ie:"))
                    .ok_or_else(|| BrdocError::UnknownKind(s.to_string()))?;
                Self::StateRegistration(
                    uf.parse()
                        .map_err(|_| BrdocError::UnknownKind(s.to_string()))?,
                )
            }
        };
        Ok(kind)
    }
}

impl Serialize for DocumentKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.id())
    }
}

impl<'de> Deserialize<'de> for DocumentKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn all_kinds_count() {
        assert_eq!(DocumentKind::all().len(), 7 + crate::uf::UF_COUNT);
    }

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<String> = DocumentKind::all().iter().map(|k| k.id()).collect();
        assert_eq!(ids.len(), DocumentKind::all().len());
    }

    #[test]
    fn id_roundtrip() {
        for kind in DocumentKind::all() {
            assert_eq!(kind.id().parse::<DocumentKind>().unwrap(), kind);
        }
    }

    #[test]
    fn catalogue_follows_rule_table() {
        let rows = catalogue();
        assert_eq!(rows.len(), DocumentKind::all().len());
        assert_eq!(rows[0].id, "cpf");
        assert_eq!(rows[0].template, "###.###.###-##");
        let renavam = rows.iter().find(|r| r.id == "renavam").unwrap();
        assert_eq!(renavam.lengths, vec![11, 9]);
        let sp = rows.iter().find(|r| r.id == "ie_sp").unwrap();
        assert_eq!(sp.label, "Inscrição estadual (SP)");
    }

    #[test]
    fn parse_accepts_aliases() {
        assert_eq!("CPF".parse::<DocumentKind>().unwrap(), DocumentKind::Cpf);
        assert_eq!(
            "voter-title".parse::<DocumentKind>().unwrap(),
            DocumentKind::VoterTitle
        );
        assert_eq!("pasep".parse::<DocumentKind>().unwrap(), DocumentKind::Pis);
        assert_eq!(
            "IE-MG".parse::<DocumentKind>().unwrap(),
            DocumentKind::StateRegistration(Uf::Mg)
        );
        assert_eq!(
            "ie:rs".parse::<DocumentKind>().unwrap(),
            DocumentKind::StateRegistration(Uf::Rs)
        );
    }

    #[test]
    fn parse_rejects_unknown() {
        for bad in ["", "cnh", "ie", "ie_xx", "ie_"] {
            let err = bad.parse::<DocumentKind>().unwrap_err();
            assert!(matches!(err, BrdocError::UnknownKind(_)), "{bad}");
        }
    }

    #[test]
    fn serde_uses_id() {
        let kind = DocumentKind::StateRegistration(Uf::Sp);
        let json = serde_json::to_string(&kind).unwrap();
        assert_eq!(json, "\"ie_sp\"");
        let back: DocumentKind = serde_json::from_str(&json).unwrap();
        assert_eq!(back, kind);
        assert!(serde_json::from_str::<DocumentKind>("\"nope\"").is_err());
    }

    #[test]
    fn labels_mention_unit() {
        assert_eq!(
            DocumentKind::StateRegistration(Uf::Ba).label(),
            "Inscrição estadual (BA)"
        );
    }
}
