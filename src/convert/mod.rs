//! Batch conversion of HGVS descriptors to genomic coordinates
//!
//! The [`Converter`] owns a [`VariantBackend`] and with it the data provider
//! connection; the connection is released when the converter is dropped.
//!
//! For each descriptor, in order:
//! 1. parse with the backend
//! 2. map `c.` and `n.` variants to the genome (other kinds pass through)
//! 3. validate the (possibly mapped) variant
//! 4. derive the chromosome label from the accession
//! 5. read the start and end base
//!
//! A parse or validation failure ends the batch with a single
//! [`InvalidVariant`]; anything else that fails is returned as an error.

use crate::backend::{ParsedVariant, VariantBackend, VariantKind};
use crate::error::ConvertError;
use crate::reference::chromosome_label;
use crate::report::{BatchOutcome, GenomeInterval, InvalidVariant};

/// Outcome for a single descriptor
enum Conversion {
    Converted(GenomeInterval),
    Rejected {
        descriptor: String,
        cause: ConvertError,
    },
}

/// Drives descriptors through a variant backend
pub struct Converter<B: VariantBackend> {
    backend: B,
}

impl<B: VariantBackend> Converter<B> {
    /// Create a converter over an already connected backend
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Access the underlying backend
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Convert a batch of descriptors.
    ///
    /// All-or-nothing: the first descriptor that fails to parse or validate
    /// yields [`BatchOutcome::Rejected`] and results for earlier descriptors
    /// are discarded. Mapping, accession and position failures are returned
    /// as `Err`.
    pub fn convert_batch<S: AsRef<str>>(
        &self,
        descriptors: &[S],
    ) -> Result<BatchOutcome, ConvertError> {
        if descriptors.is_empty() {
            return Err(ConvertError::NoDescriptors);
        }

        let mut intervals = Vec::with_capacity(descriptors.len());
        for descriptor in descriptors {
            match self.convert_descriptor(descriptor.as_ref())? {
                Conversion::Converted(interval) => intervals.push(interval),
                Conversion::Rejected { descriptor, .. } => {
                    return Ok(BatchOutcome::Rejected(InvalidVariant::new(descriptor)));
                }
            }
        }

        Ok(BatchOutcome::Converted(intervals))
    }

    /// Convert descriptors, turning a rejection into [`ConvertError::InvalidVariant`]
    pub fn convert_all<S: AsRef<str>>(
        &self,
        descriptors: &[S],
    ) -> Result<Vec<GenomeInterval>, ConvertError> {
        if descriptors.is_empty() {
            return Err(ConvertError::NoDescriptors);
        }

        descriptors
            .iter()
            .map(|d| match self.convert_descriptor(d.as_ref())? {
                Conversion::Converted(interval) => Ok(interval),
                Conversion::Rejected { descriptor, cause } => Err(ConvertError::InvalidVariant {
                    variant: descriptor,
                    msg: cause.to_string(),
                }),
            })
            .collect()
    }

    /// Convert a single descriptor
    pub fn convert_one(&self, descriptor: &str) -> Result<GenomeInterval, ConvertError> {
        let mut intervals = self.convert_all(&[descriptor])?;
        intervals.pop().ok_or(ConvertError::NoDescriptors)
    }

    fn convert_descriptor(&self, descriptor: &str) -> Result<Conversion, ConvertError> {
        tracing::debug!("Converting {}", descriptor);

        let parsed = match self.backend.parse(descriptor) {
            Ok(parsed) => parsed,
            Err(cause) => return Ok(self.reject(descriptor, cause)),
        };

        let variant = match parsed.kind() {
            VariantKind::Coding => self.backend.c_to_g(&parsed)?,
            VariantKind::NonCoding => self.backend.n_to_g(&parsed)?,
            _ => parsed,
        };

        if let Err(cause) = self.backend.validate(&variant) {
            return Ok(self.reject(descriptor, cause));
        }

        let reference = chromosome_label(variant.accession())?;
        let (start, end) = variant
            .interval()
            .ok_or_else(|| ConvertError::MissingPosition {
                variant: descriptor.to_string(),
            })?;

        tracing::debug!(
            "{} -> {}:{}-{} ({})",
            descriptor,
            variant.accession(),
            start,
            end,
            reference
        );

        Ok(Conversion::Converted(GenomeInterval {
            variant: descriptor.to_string(),
            start,
            end,
            reference,
        }))
    }

    fn reject(&self, descriptor: &str, cause: ConvertError) -> Conversion {
        tracing::warn!("{} rejected: {}", descriptor, cause);
        Conversion::Rejected {
            descriptor: descriptor.to_string(),
            cause,
        }
    }
}
