//! Chromosome labels from RefSeq accessions
//!
//! Genomic RefSeq accessions encode the chromosome as a zero-padded index,
//! e.g. `NC_000001.10` is chromosome 1 and `NC_000023.10` is chromosome X.

use crate::error::ConvertError;
use once_cell::sync::Lazy;
use regex::Regex;

/// Index used by RefSeq for chromosome X
pub const CHROMOSOME_X_INDEX: u64 = 23;

/// Index used by RefSeq for chromosome Y
pub const CHROMOSOME_Y_INDEX: u64 = 24;

/// Leading alphabetic prefix, underscore and zero padding (`NC_0000`)
static ACCESSION_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-z]*_0+").unwrap());

/// Derive a chromosome label from a genomic accession.
///
/// Indices up to 22 are returned as-is, 23 and 24 become `X` and `Y`.
/// Larger indices (mitochondrion, unplaced contigs) are passed through as
/// their decimal string.
///
/// # Errors
///
/// Returns [`ConvertError::Accession`] when the index left after stripping the
/// prefix and version is not a number.
///
/// # Examples
///
/// ```
/// use hgvs_coords::chromosome_label;
///
/// assert_eq!(chromosome_label("NC_000001.10").unwrap(), "1");
/// assert_eq!(chromosome_label("NC_000023.10").unwrap(), "X");
/// assert_eq!(chromosome_label("NC_000024.9").unwrap(), "Y");
/// assert_eq!(chromosome_label("NC_012920.1").unwrap(), "12920");
/// assert!(chromosome_label("chrX").is_err());
/// ```
pub fn chromosome_label(accession: &str) -> Result<String, ConvertError> {
    let stripped = ACCESSION_PREFIX.replace_all(accession, "");
    let index_str = stripped.split('.').next().unwrap_or_default();

    let index: u64 = index_str.parse().map_err(|_| ConvertError::Accession {
        accession: accession.to_string(),
    })?;

    Ok(match index {
        CHROMOSOME_X_INDEX => "X".to_string(),
        CHROMOSOME_Y_INDEX => "Y".to_string(),
        n => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_autosomes() {
        assert_eq!(chromosome_label("NC_000001.10").unwrap(), "1");
        assert_eq!(chromosome_label("NC_000010.10").unwrap(), "10");
        assert_eq!(chromosome_label("NC_000022.10").unwrap(), "22");
    }

    #[test]
    fn test_sex_chromosomes() {
        assert_eq!(chromosome_label("NC_000023.10").unwrap(), "X");
        assert_eq!(chromosome_label("NC_000023.11").unwrap(), "X");
        assert_eq!(chromosome_label("NC_000024.9").unwrap(), "Y");
    }

    #[test]
    fn test_indices_above_y_pass_through() {
        assert_eq!(chromosome_label("NC_000025.1").unwrap(), "25");
        assert_eq!(chromosome_label("NC_012920.1").unwrap(), "12920");
    }

    #[test]
    fn test_missing_version() {
        assert_eq!(chromosome_label("NC_000007").unwrap(), "7");
    }

    #[test]
    fn test_non_numeric_index_is_error() {
        let err = chromosome_label("chrX").unwrap_err();
        assert_eq!(
            err,
            ConvertError::Accession {
                accession: "chrX".to_string()
            }
        );
        assert!(chromosome_label("NC_0000XY.1").is_err());
        assert!(chromosome_label("").is_err());
    }

    #[test]
    fn test_all_zero_index_is_error() {
        // The zero padding swallows the whole index, leaving nothing to parse
        assert!(chromosome_label("NC_000000.1").is_err());
    }
}
