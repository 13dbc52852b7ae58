//! Run configuration for the comparison engine.

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::thread;

use crate::sample::SamplePolicy;

/// Validation failure while building a [`Config`].
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Sampled comparison needs at least two samples per file.
    #[error("sample count must be at least 2, got {0}")]
    SampleCount(u32),
    /// Chunk reads of zero bytes would never terminate.
    #[error("sample size must be non-zero")]
    SampleSize,
    /// The worker pool needs at least one worker.
    #[error("parallelism must be at least 1")]
    Parallelism,
}

/// Immutable configuration for one comparison run.
///
/// Built once by the caller and shared read-only across all workers; nothing
/// in the engine mutates it after construction.
#[derive(Clone, Debug)]
pub struct Config {
    original: PathBuf,
    compared: PathBuf,
    policy: SamplePolicy,
    parallelism: usize,
}

impl Config {
    /// Starts building a configuration for the two comparison roots.
    #[must_use]
    pub fn builder<O: Into<PathBuf>, C: Into<PathBuf>>(original: O, compared: C) -> ConfigBuilder {
        ConfigBuilder {
            original: original.into(),
            compared: compared.into(),
            samples: SamplePolicy::DEFAULT_SAMPLES,
            sample_size: SamplePolicy::DEFAULT_SAMPLE_SIZE,
            entire: false,
            parallelism: None,
        }
    }

    /// Returns the original (reference) root.
    #[must_use]
    pub fn original(&self) -> &Path {
        &self.original
    }

    /// Returns the compared root that drives traversal.
    #[must_use]
    pub fn compared(&self) -> &Path {
        &self.compared
    }

    /// Returns the sampling policy applied to every file pair.
    #[must_use]
    pub fn policy(&self) -> SamplePolicy {
        self.policy
    }

    /// Returns the maximum number of simultaneously active file comparisons.
    #[must_use]
    pub fn parallelism(&self) -> usize {
        self.parallelism
    }
}

/// Validating builder for [`Config`].
#[derive(Clone, Debug)]
pub struct ConfigBuilder {
    original: PathBuf,
    compared: PathBuf,
    samples: u32,
    sample_size: usize,
    entire: bool,
    parallelism: Option<usize>,
}

impl ConfigBuilder {
    /// Sets the number of samples read per file (default 4).
    #[must_use]
    pub fn samples(mut self, samples: u32) -> Self {
        self.samples = samples;
        self
    }

    /// Sets the size of each sample in bytes (default 4000).
    #[must_use]
    pub fn sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }

    /// Reads entire files instead of sampling. More accurate but slower.
    #[must_use]
    pub fn entire(mut self, entire: bool) -> Self {
        self.entire = entire;
        self
    }

    /// Sets the worker count. Defaults to the available hardware
    /// concurrency; a value of 1 selects the serial execution path.
    #[must_use]
    pub fn parallelism(mut self, parallelism: usize) -> Self {
        self.parallelism = Some(parallelism);
        self
    }

    /// Validates the parameters and produces an immutable [`Config`].
    pub fn build(self) -> Result<Config, ConfigError> {
        let policy = if self.entire {
            SamplePolicy::entire(self.sample_size)?
        } else {
            SamplePolicy::sampled(self.samples, self.sample_size)?
        };

        let parallelism = match self.parallelism {
            Some(0) => return Err(ConfigError::Parallelism),
            Some(limit) => limit,
            None => thread::available_parallelism()
                .map(NonZeroUsize::get)
                .unwrap_or(1),
        };

        Ok(Config {
            original: self.original,
            compared: self.compared,
            policy,
            parallelism,
        })
    }
}
