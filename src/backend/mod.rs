//! Variant mapping backends
//!
//! A backend wraps the external machinery that understands HGVS: the parser,
//! the transcript-to-genome mapper and the validator, together with the data
//! provider connection they share. Implementations:
//! - [`MockBackend`] for tests and offline fixture files
//! - `UtaBackend` for UTA + SeqRepo through the `hgvs` crate (feature `hgvs-rs`)

pub mod mock;
#[cfg(feature = "hgvs-rs")]
pub mod uta;

pub use mock::{MockBackend, MockLocation, MockRecord, MockVariant};
#[cfg(feature = "hgvs-rs")]
pub use uta::UtaBackend;

use crate::error::ConvertError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coordinate system of a parsed variant, from its HGVS type prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VariantKind {
    /// `c.` coding DNA
    #[serde(rename = "c")]
    Coding,
    /// `n.` non-coding transcript
    #[serde(rename = "n")]
    NonCoding,
    /// `g.` genomic
    #[serde(rename = "g")]
    Genomic,
    /// `m.` mitochondrial
    #[serde(rename = "m")]
    Mitochondrial,
    /// `r.` RNA
    #[serde(rename = "r")]
    Rna,
    /// `p.` protein
    #[serde(rename = "p")]
    Protein,
}

impl VariantKind {
    /// The HGVS type prefix letter
    pub fn as_str(&self) -> &'static str {
        match self {
            VariantKind::Coding => "c",
            VariantKind::NonCoding => "n",
            VariantKind::Genomic => "g",
            VariantKind::Mitochondrial => "m",
            VariantKind::Rna => "r",
            VariantKind::Protein => "p",
        }
    }
}

impl fmt::Display for VariantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Read-only view of a variant produced by a backend
pub trait ParsedVariant {
    /// Type discriminator (`c`, `n`, `g`, ...)
    fn kind(&self) -> VariantKind;

    /// Reference sequence accession, e.g. `NC_000001.10`
    fn accession(&self) -> &str;

    /// Start and end base of the variant location
    ///
    /// `None` when the location has no definite numeric bounds.
    fn interval(&self) -> Option<(i64, i64)>;
}

/// The external variant-mapping collaborator
///
/// One backend instance holds one data provider connection; it is shared by
/// every descriptor of a batch and released when the backend is dropped.
pub trait VariantBackend {
    /// Backend-specific parsed variant
    type Variant: ParsedVariant;

    /// Parse an HGVS descriptor
    fn parse(&self, descriptor: &str) -> Result<Self::Variant, ConvertError>;

    /// Map a coding (`c.`) variant to genomic coordinates
    fn c_to_g(&self, variant: &Self::Variant) -> Result<Self::Variant, ConvertError>;

    /// Map a non-coding (`n.`) variant to genomic coordinates
    fn n_to_g(&self, variant: &Self::Variant) -> Result<Self::Variant, ConvertError>;

    /// Validate a variant, returning an error if it is not valid
    fn validate(&self, variant: &Self::Variant) -> Result<(), ConvertError>;
}
