// Copyright (c) 2024-2025 Fulcrum Genomics LLC
// SPDX-License-Identifier: MIT

//! hgvs-coords: HGVS to genomic coordinate converter
//!
//! Parsing, transcript mapping and validation are delegated to a
//! [`VariantBackend`]; this crate drives the batch, derives chromosome labels
//! from RefSeq accessions and writes the JSON report.
//!
//! # Example
//!
//! ```
//! use hgvs_coords::{BatchOutcome, Converter, MockBackend};
//!
//! let converter = Converter::new(MockBackend::with_test_data());
//! let outcome = converter
//!     .convert_batch(&["NM_000016.4:c.76A>C".to_string()])
//!     .unwrap();
//!
//! match outcome {
//!     BatchOutcome::Converted(intervals) => assert_eq!(intervals[0].reference, "1"),
//!     BatchOutcome::Rejected(invalid) => panic!("{}", invalid.error),
//! }
//! ```

pub mod backend;
pub mod cli;
pub mod config;
pub mod convert;
pub mod error;
pub mod reference;
pub mod report;

// Re-export commonly used types
pub use backend::{MockBackend, ParsedVariant, VariantBackend, VariantKind};
#[cfg(feature = "hgvs-rs")]
pub use backend::UtaBackend;
pub use config::{ConverterConfig, GenomeBuild};
pub use convert::Converter;
pub use error::{ConvertError, ErrorCode};
pub use reference::chromosome_label;
pub use report::{BatchOutcome, GenomeInterval, InvalidVariant, ReportEntry};

/// Result type alias for hgvs-coords operations
pub type Result<T> = std::result::Result<T, ConvertError>;
