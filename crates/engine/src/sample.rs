//! Sampling policy for file comparison.
//!
//! A policy maps a file's size to the byte offset skipped between chunk
//! reads. Sampling reads a fixed number of chunks spaced so the first and
//! last land near the file's start and end, approximating a full comparison
//! at a fraction of the I/O cost. An offset of zero makes every chunk
//! adjacent, which degenerates the comparison loop into a full sequential
//! scan; entire-file mode is exactly that degenerate case.

use crate::config::ConfigError;

/// Skip-offset policy shared read-only across all concurrent comparisons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SamplePolicy {
    /// Read every byte of both files in `sample_size` chunks.
    Entire {
        /// Size of each chunk read in bytes. Always non-zero.
        sample_size: usize,
    },
    /// Read `samples` chunks of `sample_size` bytes, evenly spaced.
    Sampled {
        /// Number of chunks read per file. Always at least 2.
        samples: u32,
        /// Size of each chunk in bytes. Always non-zero.
        sample_size: usize,
    },
}

impl SamplePolicy {
    /// Default number of samples per file.
    pub const DEFAULT_SAMPLES: u32 = 4;
    /// Default sample size in bytes.
    pub const DEFAULT_SAMPLE_SIZE: usize = 4000;

    /// Builds an entire-file policy reading `sample_size` bytes per chunk.
    pub fn entire(sample_size: usize) -> Result<Self, ConfigError> {
        if sample_size == 0 {
            return Err(ConfigError::SampleSize);
        }
        Ok(Self::Entire { sample_size })
    }

    /// Builds a sampled policy, validating its parameters.
    ///
    /// `samples` below 2 would divide by zero in the offset computation, so
    /// it is rejected here rather than checked at every call site.
    pub fn sampled(samples: u32, sample_size: usize) -> Result<Self, ConfigError> {
        if samples < 2 {
            return Err(ConfigError::SampleCount(samples));
        }
        if sample_size == 0 {
            return Err(ConfigError::SampleSize);
        }
        Ok(Self::Sampled {
            samples,
            sample_size,
        })
    }

    /// Returns the offset to skip between chunk reads for a file of `size`
    /// bytes, clamped to zero.
    ///
    /// Evaluated once per file at comparison entry, not per chunk. The last
    /// sample may not include the final few bytes of the file.
    #[must_use]
    pub fn offset(&self, size: u64) -> u64 {
        match *self {
            Self::Entire { .. } => 0,
            Self::Sampled {
                samples,
                sample_size,
            } => {
                let span = size as i64 - i64::from(samples) * sample_size as i64;
                let gap = span / (i64::from(samples) - 1);
                gap.max(0) as u64
            }
        }
    }

    /// Returns the chunk size used by the comparison read loop.
    #[must_use]
    pub fn chunk_size(&self) -> usize {
        match *self {
            Self::Entire { sample_size } | Self::Sampled { sample_size, .. } => sample_size,
        }
    }
}
