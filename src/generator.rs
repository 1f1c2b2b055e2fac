//! Multi-tenor fixture generation.
//!
//! ```no_run
//! use volsurf_fixtures::generator::{FixtureGenerator, GeneratorConfig};
//!
//! let generator = FixtureGenerator::from_path(
//!     "output/btc_2025-01-03_7d_result.json",
//!     GeneratorConfig::default(),
//! )?;
//! for written in generator.run()? {
//!     println!("{}", written.path.display());
//! }
//! # Ok::<(), volsurf_fixtures::FixtureError>(())
//! ```

use std::path::{Path, PathBuf};

use crate::error::{self, FixtureError};
use crate::fixture::{BaseResult, SyntheticFixture};

/// Tenors generated when the caller asks for none, in calendar days.
pub const DEFAULT_TENOR_DAYS: [u32; 2] = [14, 30];

/// What to generate and where to put it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Target tenors in calendar days, processed in this order.
    pub tenor_days: Vec<u32>,
    /// Output directory; `None` writes alongside the base file.
    pub output_dir: Option<PathBuf>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            tenor_days: DEFAULT_TENOR_DAYS.to_vec(),
            output_dir: None,
        }
    }
}

impl GeneratorConfig {
    /// Use `tenor_days`, or the defaults if it is empty.
    pub fn with_tenors(tenor_days: Vec<u32>) -> Self {
        if tenor_days.is_empty() {
            return Self::default();
        }
        Self {
            tenor_days,
            output_dir: None,
        }
    }

    /// Write fixtures into `dir` instead of next to the base file.
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// Reject zero-day tenors.
    ///
    /// # Errors
    /// Returns [`FixtureError::InvalidInput`] naming the first bad tenor.
    pub fn validate(&self) -> error::Result<()> {
        if let Some(pos) = self.tenor_days.iter().position(|&d| d == 0) {
            return Err(FixtureError::InvalidInput {
                message: format!("tenor #{} must be at least one day, got 0", pos + 1),
            });
        }
        Ok(())
    }
}

/// One fixture file produced by [`FixtureGenerator::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFixture {
    pub tenor_days: u32,
    pub path: PathBuf,
}

/// Generates synthetic fixtures for each configured tenor from one base.
#[derive(Debug, Clone)]
pub struct FixtureGenerator {
    base: BaseResult,
    source_stem: String,
    output_dir: PathBuf,
    tenor_days: Vec<u32>,
}

impl FixtureGenerator {
    /// Create a generator over an already-loaded base.
    ///
    /// `source_stem` is the base file name without extension; fixture ids are
    /// derived from it.
    ///
    /// # Errors
    /// Returns [`FixtureError::InvalidInput`] if the config holds a zero-day tenor.
    pub fn new(
        base: BaseResult,
        source_stem: impl Into<String>,
        output_dir: impl Into<PathBuf>,
        config: GeneratorConfig,
    ) -> error::Result<Self> {
        config.validate()?;
        let output_dir = config.output_dir.unwrap_or_else(|| output_dir.into());
        Ok(Self {
            base,
            source_stem: source_stem.into(),
            output_dir,
            tenor_days: config.tenor_days,
        })
    }

    /// Load the base result at `path`.
    ///
    /// The base is read and validated once, so malformed or incomplete input
    /// fails here before any fixture is written.
    ///
    /// # Errors
    /// [`FixtureError::BaseNotFound`] if `path` does not exist, otherwise any
    /// error from [`BaseResult::from_path`] or [`GeneratorConfig::validate`].
    pub fn from_path(path: impl AsRef<Path>, config: GeneratorConfig) -> error::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(FixtureError::BaseNotFound {
                path: path.to_path_buf(),
            });
        }
        let base = BaseResult::from_path(path)?;
        let source_stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();

        tracing::debug!(
            path = %path.display(),
            forward = base.forward(),
            n_strikes = base.strikes().len(),
            "base result loaded"
        );

        Self::new(base, source_stem, base_dir, config)
    }

    /// The loaded base result.
    pub fn base(&self) -> &BaseResult {
        &self.base
    }

    /// Tenors this generator will produce, in order.
    pub fn tenor_days(&self) -> &[u32] {
        &self.tenor_days
    }

    /// Directory fixtures are written to.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Build the fixture for one tenor without touching the filesystem.
    ///
    /// # Errors
    /// Returns [`FixtureError::InvalidInput`] for a zero-day tenor.
    pub fn generate(&self, tenor_days: u32) -> error::Result<SyntheticFixture> {
        SyntheticFixture::generate(&self.base, &self.source_stem, tenor_days)
    }

    /// Generate and write the fixture for one tenor.
    ///
    /// # Errors
    /// As [`generate`](Self::generate), plus [`FixtureError::Io`] on write failure.
    pub fn write(&self, tenor_days: u32) -> error::Result<GeneratedFixture> {
        let path = self.generate(tenor_days)?.write_to(&self.output_dir)?;
        Ok(GeneratedFixture { tenor_days, path })
    }

    /// Write one fixture per configured tenor, in order.
    ///
    /// Stops at the first failure; fixtures already written stay on disk.
    ///
    /// # Errors
    /// The first error from [`write`](Self::write).
    pub fn run(&self) -> error::Result<Vec<GeneratedFixture>> {
        self.tenor_days.iter().map(|&days| self.write(days)).collect()
    }
}
