//! Backend selection and report output for the CLI

use crate::backend::{MockBackend, VariantBackend};
use crate::config::ConverterConfig;
use crate::convert::Converter;
use crate::error::ConvertError;
use crate::report::BatchOutcome;
use std::io::Write;
use std::path::Path;

/// Conversion finished, including batches reported as invalid
pub const EXIT_SUCCESS: u8 = 0;

/// No descriptors were supplied
pub const EXIT_USAGE: u8 = 1;

/// Unrecoverable error; nothing was written to stdout
pub const EXIT_FATAL: u8 = 2;

/// Convert a batch and write its JSON document.
///
/// Output is written only once the whole batch has been processed, so a fatal
/// error leaves `writer` untouched.
///
/// # Examples
///
/// ```
/// use hgvs_coords::cli::write_batch;
/// use hgvs_coords::{Converter, MockBackend};
///
/// let converter = Converter::new(MockBackend::with_test_data());
/// let mut buffer = Vec::new();
/// write_batch(&converter, &["not-a-variant"], &mut buffer, false).unwrap();
/// assert_eq!(
///     String::from_utf8(buffer).unwrap(),
///     "[{\"error\": \"not-a-variant is an invalid HGVS variant\", \"variant\": \"not-a-variant\"}]\n"
/// );
/// ```
pub fn write_batch<B, S, W>(
    converter: &Converter<B>,
    descriptors: &[S],
    writer: &mut W,
    pretty: bool,
) -> Result<BatchOutcome, ConvertError>
where
    B: VariantBackend,
    S: AsRef<str>,
    W: Write,
{
    let outcome = converter.convert_batch(descriptors)?;
    outcome.write_json(writer, pretty)?;
    writer.flush()?;
    Ok(outcome)
}

/// Open the configured backend, convert `descriptors` and write the report.
///
/// `mock_data` selects the offline [`MockBackend`]; otherwise the UTA backend
/// is used, which needs the `hgvs-rs` feature.
pub fn convert_and_write<W: Write>(
    descriptors: &[String],
    config: &ConverterConfig,
    mock_data: Option<&Path>,
    writer: &mut W,
    pretty: bool,
) -> Result<BatchOutcome, ConvertError> {
    if let Some(path) = mock_data {
        tracing::info!("Using mock variant data from {}", path.display());
        let converter = Converter::new(MockBackend::from_json(path)?);
        return write_batch(&converter, descriptors, writer, pretty);
    }

    #[cfg(feature = "hgvs-rs")]
    {
        let converter = Converter::new(crate::backend::UtaBackend::connect(config)?);
        write_batch(&converter, descriptors, writer, pretty)
    }

    #[cfg(not(feature = "hgvs-rs"))]
    {
        let _ = (config, writer, pretty);
        Err(ConvertError::Connection {
            msg: "UTA backend requires the 'hgvs-rs' feature.\n\n\
                  Rebuild with: cargo build --release --features hgvs-rs"
                .to_string(),
        })
    }
}
