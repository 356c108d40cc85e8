//! Reference sequence naming
//!
//! Translates reference sequence accessions into the labels reported to users.

pub mod chromosome;

pub use chromosome::{chromosome_label, CHROMOSOME_X_INDEX, CHROMOSOME_Y_INDEX};
