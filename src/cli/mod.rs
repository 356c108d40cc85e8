//! CLI utilities for hgvs-coords
//!
//! This module provides testable functions used by the CLI binary.
//! Input handling and backend dispatch live here so they can be tested
//! against in-memory readers and writers.

pub mod run;

pub use run::{convert_and_write, write_batch, EXIT_FATAL, EXIT_SUCCESS, EXIT_USAGE};

use crate::error::ConvertError;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// UTF-8 BOM (Byte Order Mark) constant
const UTF8_BOM: &str = "\u{feff}";

/// Strip UTF-8 BOM from the beginning of a string if present.
///
/// # Examples
///
/// ```
/// use hgvs_coords::cli::strip_bom;
///
/// assert_eq!(strip_bom("\u{feff}NM_000016.4:c.76A>C"), "NM_000016.4:c.76A>C");
/// assert_eq!(strip_bom("NM_000016.4:c.76A>C"), "NM_000016.4:c.76A>C");
/// ```
pub fn strip_bom(s: &str) -> &str {
    s.strip_prefix(UTF8_BOM).unwrap_or(s)
}

/// Strip an inline `#` comment and surrounding whitespace.
///
/// # Examples
///
/// ```
/// use hgvs_coords::cli::strip_inline_comment;
///
/// assert_eq!(strip_inline_comment("NM_000016.4:c.76A>C  # ACADM"), "NM_000016.4:c.76A>C");
/// assert_eq!(strip_inline_comment("# full line comment"), "");
/// ```
pub fn strip_inline_comment(s: &str) -> &str {
    match s.find('#') {
        Some(pos) => s[..pos].trim(),
        None => s.trim(),
    }
}

/// Turn an input line into a descriptor.
///
/// Returns None if the line is empty or a comment-only line. The BOM is only
/// stripped from the first line of a file.
///
/// # Examples
///
/// ```
/// use hgvs_coords::cli::process_input_line;
///
/// assert_eq!(process_input_line("NM_000016.4:c.76A>C", false), Some("NM_000016.4:c.76A>C"));
/// assert_eq!(process_input_line("\u{feff}NM_000016.4:c.76A>C", true), Some("NM_000016.4:c.76A>C"));
/// assert_eq!(process_input_line("   ", false), None);
/// assert_eq!(process_input_line("# comment", false), None);
/// ```
pub fn process_input_line(line: &str, is_first_line: bool) -> Option<&str> {
    let line = line.trim();
    let line = if is_first_line { strip_bom(line) } else { line };
    let line = strip_inline_comment(line);

    if line.is_empty() {
        None
    } else {
        Some(line)
    }
}

/// Read one descriptor per line.
pub fn read_descriptors<R: BufRead>(reader: R) -> Result<Vec<String>, ConvertError> {
    let mut descriptors = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if let Some(descriptor) = process_input_line(&line, i == 0) {
            descriptors.push(descriptor.to_string());
        }
    }
    Ok(descriptors)
}

/// Gather descriptors from positional arguments, then from an input file
/// (`-` reads standard input).
pub fn collect_descriptors(
    positional: &[String],
    input: Option<&Path>,
) -> Result<Vec<String>, ConvertError> {
    let mut descriptors = positional.to_vec();

    if let Some(path) = input {
        let from_input = if path == Path::new("-") {
            read_descriptors(io::stdin().lock())?
        } else {
            let file = File::open(path).map_err(|e| ConvertError::Io {
                msg: format!("Failed to open input {}: {}", path.display(), e),
            })?;
            read_descriptors(BufReader::new(file))?
        };
        descriptors.extend(from_input);
    }

    Ok(descriptors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    #[test]
    fn test_strip_bom() {
        assert_eq!(strip_bom("\u{feff}test"), "test");
        assert_eq!(strip_bom("test"), "test");
        assert_eq!(strip_bom(""), "");
    }

    #[test]
    fn test_strip_inline_comment() {
        assert_eq!(strip_inline_comment("variant  # comment"), "variant");
        assert_eq!(strip_inline_comment("variant#comment"), "variant");
        assert_eq!(strip_inline_comment("  variant  "), "variant");
    }

    #[test]
    fn test_process_input_line_bom_only_on_first_line() {
        assert_eq!(process_input_line("\u{feff}variant", true), Some("variant"));
        assert_eq!(
            process_input_line("\u{feff}variant", false),
            Some("\u{feff}variant")
        );
    }

    #[test]
    fn test_read_descriptors() {
        let input = "\u{feff}NM_000016.4:c.76A>C\n\n# header comment\nNR_046018.2:n.100A>G  # DDX11L1\n";
        let descriptors = read_descriptors(Cursor::new(input)).unwrap();
        assert_eq!(
            descriptors,
            vec!["NM_000016.4:c.76A>C", "NR_046018.2:n.100A>G"]
        );
    }

    #[test]
    fn test_collect_descriptors_positional_first() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "NC_000024.9:g.2655180G>A").unwrap();

        let positional = vec!["NM_000016.4:c.76A>C".to_string()];
        let descriptors = collect_descriptors(&positional, Some(file.path())).unwrap();
        assert_eq!(
            descriptors,
            vec!["NM_000016.4:c.76A>C", "NC_000024.9:g.2655180G>A"]
        );
    }

    #[test]
    fn test_collect_descriptors_missing_file() {
        let err = collect_descriptors(&[], Some(Path::new("/nonexistent/variants.txt")));
        assert!(matches!(err, Err(ConvertError::Io { .. })));
    }

    #[test]
    fn test_collect_descriptors_none() {
        assert!(collect_descriptors(&[], None).unwrap().is_empty());
    }
}
