//! Synthetic fixtures: a base smile re-evaluated at a new tenor.
//!
//! The curve parameters are carried over untouched. Only the expiry changes,
//! so each strike keeps its total variance `w(k)` and its implied vol becomes
//! `√(w / T_new)`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::conventions::tenor_from_days;
use crate::error::{self, FixtureError};
use crate::fixture::BaseResult;
use crate::smile::{SmileSection, SviParams};

/// Suffix stripped from the source file stem when deriving a fixture id.
pub const RESULT_SUFFIX: &str = "_result";

/// Derive a fixture id from the base file stem and the target tenor.
///
/// Every occurrence of `_result` is removed from the stem, then
/// `_synthetic_{days}d` is appended.
///
/// ```
/// use volsurf_fixtures::fixture::fixture_id;
/// assert_eq!(fixture_id("btc_2025-01-03_7d_result", 30), "btc_2025-01-03_7d_synthetic_30d");
/// ```
pub fn fixture_id(source_stem: &str, tenor_days: u32) -> String {
    format!(
        "{}_synthetic_{tenor_days}d",
        source_stem.replace(RESULT_SUFFIX, "")
    )
}

/// A generated fixture record.
///
/// Field order matches the JSON key order consumers are used to seeing,
/// though nothing should depend on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyntheticFixture {
    #[serde(rename = "fixtureId")]
    pub fixture_id: String,
    pub forward: f64,
    /// Time to expiry in years.
    #[serde(rename = "T")]
    pub expiry: f64,
    pub strikes: Vec<f64>,
    pub svi_params: SviParams,
    /// Implied vols, index-aligned with `strikes`.
    pub ivs: Vec<f64>,
    pub df: f64,
}

impl SyntheticFixture {
    /// Re-evaluate the base smile at `tenor_days` calendar days.
    ///
    /// # Errors
    /// Returns [`FixtureError::InvalidInput`] for a zero-day tenor.
    pub fn generate(base: &BaseResult, source_stem: &str, tenor_days: u32) -> error::Result<Self> {
        let expiry = tenor_from_days(tenor_days)?.0;
        let smile = base.smile(expiry)?;

        let ivs = base
            .strikes()
            .iter()
            .map(|&strike| smile.vol(strike).map(|v| v.0))
            .collect::<error::Result<Vec<_>>>()?;

        tracing::debug!(tenor_days, expiry, n_strikes = ivs.len(), "fixture generated");

        Ok(Self {
            fixture_id: fixture_id(source_stem, tenor_days),
            forward: base.forward(),
            expiry,
            strikes: base.strikes().to_vec(),
            svi_params: *base.svi_params(),
            ivs,
            df: base.df(),
        })
    }

    /// File name this fixture is written under: `{fixtureId}_result.json`.
    pub fn file_name(&self) -> String {
        format!("{}{RESULT_SUFFIX}.json", self.fixture_id)
    }

    /// Pretty-printed JSON (two-space indent, no trailing newline).
    ///
    /// # Errors
    /// Returns [`FixtureError::Json`] if serialization fails.
    pub fn to_json(&self) -> error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the fixture into `dir`, replacing any existing file.
    ///
    /// # Errors
    /// Returns [`FixtureError::Io`] if the file cannot be written.
    pub fn write_to(&self, dir: &Path) -> error::Result<PathBuf> {
        let path = dir.join(self.file_name());
        fs::write(&path, self.to_json()?).map_err(|source| FixtureError::Io {
            path: path.clone(),
            source,
        })?;
        tracing::info!(path = %path.display(), "fixture written");
        Ok(path)
    }
}
