//! Mock variant backend for testing and offline runs
//!
//! Variants are looked up by their exact descriptor string in a table of
//! [`MockRecord`]s, which can be built in code or loaded from a JSON file.

use crate::backend::{ParsedVariant, VariantBackend, VariantKind};
use crate::error::ConvertError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Genomic placement of a transcript variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockLocation {
    /// Genomic accession, e.g. `NC_000001.10`
    pub accession: String,
    pub start: i64,
    pub end: i64,
}

/// One descriptor known to the mock backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockRecord {
    /// HGVS descriptor exactly as it will be supplied
    pub descriptor: String,
    pub kind: VariantKind,
    pub accession: String,
    #[serde(default)]
    pub start: Option<i64>,
    #[serde(default)]
    pub end: Option<i64>,
    /// Result of `c_to_g`/`n_to_g`; transcript variants without one fail to map
    #[serde(default)]
    pub genomic: Option<MockLocation>,
    /// Whether validation should reject this variant
    #[serde(default)]
    pub invalid: bool,
}

impl MockRecord {
    /// Create a record for a variant that needs no mapping
    pub fn new(
        descriptor: impl Into<String>,
        kind: VariantKind,
        accession: impl Into<String>,
        start: i64,
        end: i64,
    ) -> Self {
        Self {
            descriptor: descriptor.into(),
            kind,
            accession: accession.into(),
            start: Some(start),
            end: Some(end),
            genomic: None,
            invalid: false,
        }
    }

    /// Set the genomic location this variant maps to
    pub fn mapped_to(mut self, accession: impl Into<String>, start: i64, end: i64) -> Self {
        self.genomic = Some(MockLocation {
            accession: accession.into(),
            start,
            end,
        });
        self
    }

    /// Mark the record as failing validation
    pub fn rejected(mut self) -> Self {
        self.invalid = true;
        self
    }

    /// Drop the location bounds
    pub fn without_position(mut self) -> Self {
        self.start = None;
        self.end = None;
        self
    }
}

/// Variant produced by [`MockBackend`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockVariant {
    /// Descriptor the variant was parsed from
    pub descriptor: String,
    pub kind: VariantKind,
    pub accession: String,
    pub start: Option<i64>,
    pub end: Option<i64>,
}

impl ParsedVariant for MockVariant {
    fn kind(&self) -> VariantKind {
        self.kind
    }

    fn accession(&self) -> &str {
        &self.accession
    }

    fn interval(&self) -> Option<(i64, i64)> {
        Some((self.start?, self.end?))
    }
}

/// Table-driven backend
#[derive(Debug, Clone, Default)]
pub struct MockBackend {
    records: HashMap<String, MockRecord>,
}

impl MockBackend {
    /// Create an empty mock backend
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a backend from records
    pub fn from_records(records: impl IntoIterator<Item = MockRecord>) -> Self {
        let mut backend = Self::new();
        for record in records {
            backend.add_record(record);
        }
        backend
    }

    /// Load records from a JSON array file
    pub fn from_json(path: &Path) -> Result<Self, ConvertError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConvertError::Io {
            msg: format!("Failed to read mock data {}: {}", path.display(), e),
        })?;
        let records: Vec<MockRecord> = serde_json::from_str(&content)?;
        Ok(Self::from_records(records))
    }

    /// Add a record, replacing any record with the same descriptor
    pub fn add_record(&mut self, record: MockRecord) {
        self.records.insert(record.descriptor.clone(), record);
    }

    /// Create a backend with a small set of GRCh37 test variants
    pub fn with_test_data() -> Self {
        Self::from_records([
            // ACADM coding variants on chromosome 1
            MockRecord::new("NM_000016.4:c.76A>C", VariantKind::Coding, "NM_000016.4", 76, 76)
                .mapped_to("NC_000001.10", 100, 100),
            MockRecord::new("NM_000016.4:c.127G>A", VariantKind::Coding, "NM_000016.4", 127, 127)
                .mapped_to("NC_000001.10", 76199212, 76199212),
            // DDX11L1 non-coding transcript
            MockRecord::new("NR_046018.2:n.100A>G", VariantKind::NonCoding, "NR_046018.2", 100, 100)
                .mapped_to("NC_000001.10", 11972, 11972),
            // DMD deletion on chromosome X
            MockRecord::new(
                "NM_004006.2:c.31_33del",
                VariantKind::Coding,
                "NM_004006.2",
                31,
                33,
            )
            .mapped_to("NC_000023.10", 33229397, 33229399),
            // Genomic variants pass through unmapped
            MockRecord::new(
                "NC_000023.10:g.153296777C>T",
                VariantKind::Genomic,
                "NC_000023.10",
                153296777,
                153296777,
            ),
            MockRecord::new(
                "NC_000024.9:g.2655180G>A",
                VariantKind::Genomic,
                "NC_000024.9",
                2655180,
                2655180,
            ),
            MockRecord::new(
                "NC_000017.10:g.41245466_41245467del",
                VariantKind::Genomic,
                "NC_000017.10",
                41245466,
                41245467,
            ),
            MockRecord::new(
                "NC_012920.1:m.8993T>G",
                VariantKind::Mitochondrial,
                "NC_012920.1",
                8993,
                8993,
            ),
            // Reference base does not match: rejected by validation
            MockRecord::new("NM_000088.3:c.589G>T", VariantKind::Coding, "NM_000088.3", 589, 589)
                .mapped_to("NC_000017.10", 48273743, 48273743)
                .rejected(),
            // Transcript without an alignment to the assembly
            MockRecord::new("NM_999999.1:c.10A>G", VariantKind::Coding, "NM_999999.1", 10, 10),
            // LRG accession has no chromosome index
            MockRecord::new("LRG_1:g.8463G>C", VariantKind::Genomic, "LRG_1", 8463, 8463),
            // Uncertain breakpoints
            MockRecord::new(
                "NC_000001.10:g.(?_100)_(200_?)del",
                VariantKind::Genomic,
                "NC_000001.10",
                100,
                200,
            )
            .without_position(),
        ])
    }

    /// Get the number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the backend has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over all records, in no particular order
    pub fn records(&self) -> impl Iterator<Item = &MockRecord> {
        self.records.values()
    }

    fn record(&self, descriptor: &str) -> Option<&MockRecord> {
        self.records.get(descriptor)
    }

    fn map_to_genome(
        &self,
        variant: &MockVariant,
        expected: VariantKind,
    ) -> Result<MockVariant, ConvertError> {
        if variant.kind != expected {
            return Err(ConvertError::Mapping {
                variant: variant.descriptor.clone(),
                msg: format!("expected a {}. variant, got {}.", expected, variant.kind),
            });
        }

        let location = self
            .record(&variant.descriptor)
            .and_then(|r| r.genomic.as_ref())
            .ok_or_else(|| ConvertError::Mapping {
                variant: variant.descriptor.clone(),
                msg: format!("no alignment for {}", variant.accession),
            })?;

        Ok(MockVariant {
            descriptor: variant.descriptor.clone(),
            kind: VariantKind::Genomic,
            accession: location.accession.clone(),
            start: Some(location.start),
            end: Some(location.end),
        })
    }
}

impl VariantBackend for MockBackend {
    type Variant = MockVariant;

    fn parse(&self, descriptor: &str) -> Result<MockVariant, ConvertError> {
        let record = self.record(descriptor).ok_or_else(|| ConvertError::Parse {
            msg: format!("unrecognized descriptor '{}'", descriptor),
        })?;

        Ok(MockVariant {
            descriptor: record.descriptor.clone(),
            kind: record.kind,
            accession: record.accession.clone(),
            start: record.start,
            end: record.end,
        })
    }

    fn c_to_g(&self, variant: &MockVariant) -> Result<MockVariant, ConvertError> {
        self.map_to_genome(variant, VariantKind::Coding)
    }

    fn n_to_g(&self, variant: &MockVariant) -> Result<MockVariant, ConvertError> {
        self.map_to_genome(variant, VariantKind::NonCoding)
    }

    fn validate(&self, variant: &MockVariant) -> Result<(), ConvertError> {
        match self.record(&variant.descriptor) {
            Some(record) if record.invalid => Err(ConvertError::Validation {
                msg: format!("{} failed validation", variant.descriptor),
            }),
            Some(_) => Ok(()),
            None => Err(ConvertError::Validation {
                msg: format!("unknown variant '{}'", variant.descriptor),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_known_descriptor() {
        let backend = MockBackend::with_test_data();
        let variant = backend.parse("NM_000016.4:c.76A>C").unwrap();
        assert_eq!(variant.kind(), VariantKind::Coding);
        assert_eq!(variant.accession(), "NM_000016.4");
        assert_eq!(variant.interval(), Some((76, 76)));
    }

    #[test]
    fn test_parse_unknown_descriptor() {
        let backend = MockBackend::with_test_data();
        let err = backend.parse("not-a-variant").unwrap_err();
        assert!(matches!(err, ConvertError::Parse { .. }));
    }

    #[test]
    fn test_c_to_g() {
        let backend = MockBackend::with_test_data();
        let variant = backend.parse("NM_004006.2:c.31_33del").unwrap();
        let mapped = backend.c_to_g(&variant).unwrap();
        assert_eq!(mapped.kind(), VariantKind::Genomic);
        assert_eq!(mapped.accession(), "NC_000023.10");
        assert_eq!(mapped.interval(), Some((33229397, 33229399)));
    }

    #[test]
    fn test_n_to_g_rejects_coding_variant() {
        let backend = MockBackend::with_test_data();
        let variant = backend.parse("NM_000016.4:c.76A>C").unwrap();
        assert!(matches!(
            backend.n_to_g(&variant),
            Err(ConvertError::Mapping { .. })
        ));
    }

    #[test]
    fn test_mapping_without_alignment() {
        let backend = MockBackend::with_test_data();
        let variant = backend.parse("NM_999999.1:c.10A>G").unwrap();
        assert!(matches!(
            backend.c_to_g(&variant),
            Err(ConvertError::Mapping { .. })
        ));
    }

    #[test]
    fn test_validate() {
        let backend = MockBackend::with_test_data();
        let good = backend.parse("NC_000024.9:g.2655180G>A").unwrap();
        assert!(backend.validate(&good).is_ok());

        let bad = backend.parse("NM_000088.3:c.589G>T").unwrap();
        assert!(matches!(
            backend.validate(&bad),
            Err(ConvertError::Validation { .. })
        ));
    }

    #[test]
    fn test_missing_position() {
        let backend = MockBackend::with_test_data();
        let variant = backend.parse("NC_000001.10:g.(?_100)_(200_?)del").unwrap();
        assert_eq!(variant.interval(), None);
    }

    #[test]
    fn test_from_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"descriptor": "NM_000016.4:c.76A>C", "kind": "c", "accession": "NM_000016.4",
                  "start": 76, "end": 76,
                  "genomic": {{"accession": "NC_000001.10", "start": 100, "end": 100}}}},
                {{"descriptor": "NC_000023.10:g.5A>T", "kind": "g", "accession": "NC_000023.10",
                  "start": 5, "end": 5, "invalid": true}}
            ]"#
        )
        .unwrap();

        let backend = MockBackend::from_json(file.path()).unwrap();
        assert_eq!(backend.len(), 2);

        let variant = backend.parse("NC_000023.10:g.5A>T").unwrap();
        assert!(backend.validate(&variant).is_err());
    }

    #[test]
    fn test_from_json_missing_file() {
        let err = MockBackend::from_json(Path::new("/nonexistent/mock.json")).unwrap_err();
        assert!(matches!(err, ConvertError::Io { .. }));
    }

    #[test]
    fn test_empty_backend() {
        let backend = MockBackend::new();
        assert!(backend.is_empty());
        assert!(backend.parse("NM_000016.4:c.76A>C").is_err());
    }
}
