//! JSON report records
//!
//! Every invocation produces one JSON array: either one [`GenomeInterval`]
//! per descriptor, or a single [`InvalidVariant`]. The same types read a
//! report back for callers that run the tool as a subprocess.

use crate::error::ConvertError;
use serde::{Deserialize, Serialize};
use serde_json::ser::{Formatter, Serializer};
use std::io::{self, Write};

/// Genomic coordinates of one converted descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenomeInterval {
    /// Descriptor as supplied by the caller
    pub variant: String,
    pub start: i64,
    pub end: i64,
    /// Chromosome label (`1`..`22`, `X`, `Y`)
    #[serde(rename = "ref")]
    pub reference: String,
}

/// A descriptor that failed to parse or validate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidVariant {
    pub error: String,
    pub variant: String,
}

impl InvalidVariant {
    /// Build the error record for a rejected descriptor
    ///
    /// ```
    /// use hgvs_coords::InvalidVariant;
    ///
    /// let invalid = InvalidVariant::new("not-a-variant");
    /// assert_eq!(invalid.error, "not-a-variant is an invalid HGVS variant");
    /// ```
    pub fn new(variant: impl Into<String>) -> Self {
        let variant = variant.into();
        Self {
            error: format!("{} is an invalid HGVS variant", variant),
            variant,
        }
    }
}

/// Result of converting a whole batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchOutcome {
    /// Every descriptor converted, in input order
    Converted(Vec<GenomeInterval>),
    /// The first descriptor that failed; earlier results are discarded
    Rejected(InvalidVariant),
}

impl BatchOutcome {
    /// Whether the batch ended in a rejection
    pub fn is_rejected(&self) -> bool {
        matches!(self, BatchOutcome::Rejected(_))
    }

    /// Render the outcome as its JSON document
    pub fn to_json(&self) -> Result<String, ConvertError> {
        let mut buffer = Vec::new();
        self.write_entries(&mut buffer, false)?;
        String::from_utf8(buffer).map_err(|e| ConvertError::Json { msg: e.to_string() })
    }

    /// Write the JSON document followed by a newline
    pub fn write_json<W: Write>(&self, writer: &mut W, pretty: bool) -> Result<(), ConvertError> {
        self.write_entries(&mut *writer, pretty)?;
        writeln!(writer)?;
        Ok(())
    }

    fn write_entries<W: Write>(&self, writer: W, pretty: bool) -> Result<(), ConvertError> {
        match self {
            BatchOutcome::Converted(intervals) => write_array(writer, intervals, pretty),
            BatchOutcome::Rejected(invalid) => {
                write_array(writer, std::slice::from_ref(invalid), pretty)
            }
        }
    }
}

/// Single-line JSON with `", "` and `": "` separators
#[derive(Debug, Clone, Copy, Default)]
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W: ?Sized + Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W: ?Sized + Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b": ")
    }
}

fn write_array<W: Write, T: Serialize>(
    writer: W,
    items: &[T],
    pretty: bool,
) -> Result<(), ConvertError> {
    if pretty {
        serde_json::to_writer_pretty(writer, items)?;
    } else {
        let mut serializer = Serializer::with_formatter(writer, SpacedFormatter);
        items.serialize(&mut serializer)?;
    }
    Ok(())
}

/// One entry of a report read back from JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReportEntry {
    Interval(GenomeInterval),
    Invalid(InvalidVariant),
}

/// Parse a JSON report produced by the CLI
pub fn parse_report(json: &str) -> Result<Vec<ReportEntry>, ConvertError> {
    Ok(serde_json::from_str(json)?)
}

/// Collect the intervals of a report, failing on the first error entry
pub fn into_intervals(entries: Vec<ReportEntry>) -> Result<Vec<GenomeInterval>, ConvertError> {
    entries
        .into_iter()
        .map(|entry| match entry {
            ReportEntry::Interval(interval) => Ok(interval),
            ReportEntry::Invalid(invalid) => Err(ConvertError::InvalidVariant {
                variant: invalid.variant,
                msg: invalid.error,
            }),
        })
        .collect()
}
