//! # Typed Documents
//!
//! One newtype per national document, plus [`StateRegistration`] carrying
//! its issuing unit. A [`Cpf`] cannot be passed where a [`Cnpj`] is
//! expected, and none of them can hold a number with wrong verifier digits:
//! construction and deserialization both go through the codec.
//!
//! Values serialize as raw digits (`"11144477735"`); deserialization
//! accepts punctuated or raw input.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::codec::{self, Document, GenerateOptions};
use crate::error::Rejection;
use crate::kind::DocumentKind;
use crate::uf::Uf;

/// Implement `Deserialize` by reading a plain string and routing it
/// through `new()`, so invalid values never deserialize.
macro_rules! impl_validating_deserialize {
    ($ty:ident) => {
        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                Self::new(raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

macro_rules! national_document {
    ($(#[$meta:meta])* $ty:ident => $kind:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $ty {
            raw: String,
            document: Document,
        }

        impl_validating_deserialize!($ty);

        impl $ty {
            /// Document kind this type holds.
            pub const KIND: DocumentKind = $kind;

            /// Parse and verify, accepting punctuated or raw input.
            ///
            /// # Errors
            ///
            /// Returns the [`Rejection`] explaining why the value is invalid.
            pub fn new(value: impl AsRef<str>) -> Result<Self, Rejection> {
                codec::parse(Self::KIND, value.as_ref()).map(Self::from_document)
            }

            /// A random valid value.
            pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
                Self::from_document(codec::generate(Self::KIND, rng))
            }

            /// Raw digits.
            pub fn as_str(&self) -> &str {
                &self.raw
            }

            /// Punctuated form.
            pub fn formatted(&self) -> String {
                self.document.formatted()
            }

            /// The underlying verified document.
            pub fn document(&self) -> &Document {
                &self.document
            }

            fn from_document(document: Document) -> Self {
                Self {
                    raw: document.digits(),
                    document,
                }
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.formatted())
            }
        }

        impl std::str::FromStr for $ty {
            type Err = Rejection;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(&self.raw)
            }
        }

        impl From<$ty> for Document {
            fn from(value: $ty) -> Self {
                value.document
            }
        }
    };
}

national_document! {
    /// Individual taxpayer number, e.g. `111.444.777-35`.
    Cpf => DocumentKind::Cpf
}

national_document! {
    /// Company taxpayer number, e.g. `11.222.333/0001-81`.
    Cnpj => DocumentKind::Cnpj
}

national_document! {
    /// Identity card number with a São Paulo issuer check digit.
    Rg => DocumentKind::Rg
}

national_document! {
    /// PIS/PASEP/NIT number.
    Pis => DocumentKind::Pis
}

national_document! {
    /// Vehicle registry number, 11 digits or the legacy 9.
    Renavam => DocumentKind::Renavam
}

national_document! {
    /// Voter registration title.
    VoterTitle => DocumentKind::VoterTitle
}

national_document! {
    /// Civil registry certificate number (32 digits).
    Certificate => DocumentKind::Certificate
}

impl Cpf {
    /// A random CPF issued in the fiscal region serving `uf`.
    pub fn generate_for<R: Rng + ?Sized>(uf: Uf, rng: &mut R) -> Self {
        let options = GenerateOptions { region: Some(uf) };
        Self::from_document(codec::generate_with(Self::KIND, &options, rng))
    }

    /// Units served by the fiscal region this CPF was issued in.
    pub fn fiscal_region(&self) -> Vec<Uf> {
        self.document.states()
    }
}

impl VoterTitle {
    /// A random title registered in `uf`.
    pub fn generate_for<R: Rng + ?Sized>(uf: Uf, rng: &mut R) -> Self {
        let options = GenerateOptions { region: Some(uf) };
        Self::from_document(codec::generate_with(Self::KIND, &options, rng))
    }

    /// Unit the title is registered in; `None` for voters abroad.
    pub fn uf(&self) -> Option<Uf> {
        self.document.states().first().copied()
    }
}

/// State tax registration number (inscrição estadual).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StateRegistration {
    uf: Uf,
    raw: String,
    document: Document,
}

impl StateRegistration {
    /// Parse and verify a registration issued by `uf`.
    ///
    /// # Errors
    ///
    /// Returns the [`Rejection`] explaining why the value is invalid for
    /// that unit.
    pub fn new(uf: Uf, value: impl AsRef<str>) -> Result<Self, Rejection> {
        codec::parse(DocumentKind::StateRegistration(uf), value.as_ref())
            .map(|document| Self::from_document(uf, document))
    }

    /// A random valid registration for `uf`.
    pub fn generate<R: Rng + ?Sized>(uf: Uf, rng: &mut R) -> Self {
        Self::from_document(uf, codec::generate(DocumentKind::StateRegistration(uf), rng))
    }

    /// Issuing unit.
    pub fn uf(&self) -> Uf {
        self.uf
    }

    /// Raw digits.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Punctuated form.
    pub fn formatted(&self) -> String {
        self.document.formatted()
    }

    /// The underlying verified document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    fn from_document(uf: Uf, document: Document) -> Self {
        Self {
            uf,
            raw: document.digits(),
            document,
        }
    }
}

impl std::fmt::Display for StateRegistration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.uf, self.formatted())
    }
}

#[derive(Serialize, Deserialize)]
struct StateRegistrationRepr {
    uf: Uf,
    number: String,
}

impl Serialize for StateRegistration {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        StateRegistrationRepr {
            uf: self.uf,
            number: self.raw.clone(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for StateRegistration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let repr = StateRegistrationRepr::deserialize(deserializer)?;
        Self::new(repr.uf, repr.number).map_err(serde::de::Error::custom)
    }
}
