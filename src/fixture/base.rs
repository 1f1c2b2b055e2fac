//! Base result: the previously computed smile a fixture set is derived from.
//!
//! Base files come from more than one producer, so two spellings are accepted
//! for the forward (`forward`, `F`) and for the curve parameters
//! (`svi_params`, `svi`). Both shapes are normalized into [`BaseResult`] at
//! the boundary; everything downstream sees one canonical record.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::error::{self, FixtureError};
use crate::smile::{SviParams, SviSmile};
use crate::validate::{validate_finite, validate_positive};

/// Discount factor used when the base record carries none.
pub const DEFAULT_DISCOUNT_FACTOR: f64 = 1.0;

/// Canonical, validated base result.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "BaseResultRaw")]
pub struct BaseResult {
    forward: f64,
    strikes: Vec<f64>,
    svi_params: SviParams,
    df: f64,
}

/// Every key a base file may use, all optional until normalization.
#[derive(Debug, Deserialize)]
struct BaseResultRaw {
    forward: Option<f64>,
    #[serde(rename = "F")]
    forward_alt: Option<f64>,
    strikes: Option<Vec<f64>>,
    svi_params: Option<Map<String, Value>>,
    svi: Option<Map<String, Value>>,
    /// Outer `None`: key absent. `Some(None)`: explicit `null`.
    #[serde(default, deserialize_with = "present")]
    df: Option<Option<f64>>,
}

/// Distinguish an explicit `null` from an absent key.
fn present<'de, D>(deserializer: D) -> Result<Option<Option<f64>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<f64>::deserialize(deserializer).map(Some)
}

#[derive(Debug, Deserialize)]
struct SviParamsRaw {
    a: Option<f64>,
    b: Option<f64>,
    rho: Option<f64>,
    m: Option<f64>,
    sigma: Option<f64>,
}

impl TryFrom<SviParamsRaw> for SviParams {
    type Error = FixtureError;
    fn try_from(raw: SviParamsRaw) -> Result<Self, Self::Error> {
        SviParams::new(
            raw.a.ok_or(FixtureError::MissingField {
                field: "svi_params.a",
            })?,
            raw.b.ok_or(FixtureError::MissingField {
                field: "svi_params.b",
            })?,
            raw.rho.ok_or(FixtureError::MissingField {
                field: "svi_params.rho",
            })?,
            raw.m.ok_or(FixtureError::MissingField {
                field: "svi_params.m",
            })?,
            raw.sigma.ok_or(FixtureError::MissingField {
                field: "svi_params.sigma",
            })?,
        )
    }
}

impl TryFrom<BaseResultRaw> for BaseResult {
    type Error = FixtureError;
    fn try_from(raw: BaseResultRaw) -> Result<Self, Self::Error> {
        // A zero, null or empty-object primary key falls through to the
        // alternate spelling. Any non-empty object counts as present.
        let forward = raw
            .forward
            .filter(|&f| f != 0.0)
            .or(raw.forward_alt)
            .ok_or(FixtureError::MissingField {
                field: "forward (or F)",
            })?;
        let strikes = raw.strikes.ok_or(FixtureError::MissingField {
            field: "strikes",
        })?;
        let svi_params = raw
            .svi_params
            .filter(|p| !p.is_empty())
            .or(raw.svi)
            .ok_or(FixtureError::MissingField {
                field: "svi_params (or svi)",
            })?;
        let svi_params: SviParamsRaw = serde_json::from_value(Value::Object(svi_params))?;
        let df = match raw.df {
            None => DEFAULT_DISCOUNT_FACTOR,
            Some(Some(df)) => df,
            Some(None) => {
                return Err(FixtureError::InvalidInput {
                    message: "df must be a number, got null".into(),
                });
            }
        };

        Self::new(forward, strikes, SviParams::try_from(svi_params)?, df)
    }
}

impl BaseResult {
    /// Create a base result from already-normalized values.
    ///
    /// # Errors
    /// Returns [`FixtureError::InvalidInput`] if the forward or any strike is
    /// not positive and finite, or if the discount factor is not finite.
    pub fn new(
        forward: f64,
        strikes: Vec<f64>,
        svi_params: SviParams,
        df: f64,
    ) -> error::Result<Self> {
        validate_positive(forward, "forward")?;
        for &strike in &strikes {
            validate_positive(strike, "strike")?;
        }
        validate_finite(df, "df")?;
        Ok(Self {
            forward,
            strikes,
            svi_params,
            df,
        })
    }

    /// Parse a base result from JSON text.
    ///
    /// Unknown keys are ignored, so a previously generated fixture is itself
    /// a valid base.
    ///
    /// # Errors
    /// [`FixtureError::Json`] for malformed JSON, [`FixtureError::MissingField`]
    /// when neither spelling of a required field is present.
    pub fn from_json(text: &str) -> error::Result<Self> {
        let raw: BaseResultRaw = serde_json::from_str(text)?;
        Self::try_from(raw)
    }

    /// Read and parse a base result file.
    ///
    /// # Errors
    /// [`FixtureError::Io`] if the file cannot be read, otherwise as
    /// [`from_json`](Self::from_json).
    pub fn from_path(path: &Path) -> error::Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| FixtureError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Forward price F.
    pub fn forward(&self) -> f64 {
        self.forward
    }

    /// Strike grid, in source order.
    pub fn strikes(&self) -> &[f64] {
        &self.strikes
    }

    /// Fitted SVI coefficients.
    pub fn svi_params(&self) -> &SviParams {
        &self.svi_params
    }

    /// Discount factor, `1.0` when the source omitted it.
    pub fn df(&self) -> f64 {
        self.df
    }

    /// The base curve re-anchored at a new expiry (years).
    ///
    /// # Errors
    /// Returns [`FixtureError::InvalidInput`] for a non-positive expiry.
    pub fn smile(&self, expiry: f64) -> error::Result<SviSmile> {
        SviSmile::new(self.forward, expiry, self.svi_params)
    }
}
