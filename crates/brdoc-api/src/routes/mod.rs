//! # API Route Modules
//!
//! - `documents`: kind catalogue, generation and validation for every
//!   supported document.

pub mod documents;
