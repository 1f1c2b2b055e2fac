//! SVI (Stochastic Volatility Inspired) smile model.
//!
//! The raw SVI parameterization models total implied variance as:
//!
//! ```text
//! w(k) = a + b·[ρ(k − m) + √((k − m)² + σ²)]
//! ```
//!
//! where `k = ln(K/F)` is log-moneyness and `(a, b, ρ, m, σ)` are the five
//! SVI parameters.
//!
//! Parameters here come from an earlier calibration and are reused as-is at
//! other expiries. No-arbitrage conditions are not enforced: a degenerate
//! parameter set still evaluates, with total variance floored at
//! [`VARIANCE_FLOOR`].
//!
//! # References
//! - Gatheral, J. "The Volatility Surface: A Practitioner's Guide" (2006)

use serde::{Deserialize, Serialize};

use crate::conventions::log_moneyness;
use crate::error::{self, FixtureError};
use crate::smile::SmileSection;
use crate::types::{Variance, Vol};
use crate::validate::{validate_finite, validate_positive};

/// Lower bound applied to total variance before taking a square root.
pub const VARIANCE_FLOOR: f64 = 1e-12;

/// The five raw SVI coefficients.
///
/// Serializes with the keys `a`, `b`, `rho`, `m`, `sigma`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SviParams {
    /// Variance level.
    pub a: f64,
    /// Slope of the wings.
    pub b: f64,
    /// Correlation (skew direction).
    pub rho: f64,
    /// Log-moneyness shift.
    pub m: f64,
    /// Curvature around the vertex.
    pub sigma: f64,
}

impl SviParams {
    /// Create a parameter set.
    ///
    /// # Errors
    /// Returns [`FixtureError::InvalidInput`](crate::FixtureError::InvalidInput)
    /// if any coefficient is NaN or infinite.
    pub fn new(a: f64, b: f64, rho: f64, m: f64, sigma: f64) -> error::Result<Self> {
        validate_finite(a, "a")?;
        validate_finite(b, "b")?;
        validate_finite(rho, "rho")?;
        validate_finite(m, "m")?;
        validate_finite(sigma, "sigma")?;
        Ok(Self {
            a,
            b,
            rho,
            m,
            sigma,
        })
    }

    /// Evaluate the raw SVI total variance w(k) at log-moneyness k.
    ///
    /// Unfloored: may be zero or negative for degenerate parameters.
    ///
    /// ```
    /// use volsurf_fixtures::smile::SviParams;
    /// let p = SviParams::new(0.04, 0.1, -0.3, 0.0, 0.2).unwrap();
    /// // At k = m the root term collapses to sigma.
    /// assert!((p.total_variance(0.0) - (0.04 + 0.1 * 0.2)).abs() < 1e-15);
    /// ```
    pub fn total_variance(&self, k: f64) -> f64 {
        let dk = k - self.m;
        self.a + self.b * (self.rho * dk + (dk * dk + self.sigma * self.sigma).sqrt())
    }
}

/// SVI smile: a parameter set bound to a forward and an expiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "SviSmileRaw", into = "SviSmileRaw")]
pub struct SviSmile {
    forward: f64,
    expiry: f64,
    params: SviParams,
}

#[derive(Serialize, Deserialize)]
struct SviSmileRaw {
    forward: f64,
    expiry: f64,
    params: SviParams,
}

impl TryFrom<SviSmileRaw> for SviSmile {
    type Error = FixtureError;
    fn try_from(raw: SviSmileRaw) -> Result<Self, Self::Error> {
        Self::new(raw.forward, raw.expiry, raw.params)
    }
}

impl From<SviSmile> for SviSmileRaw {
    fn from(s: SviSmile) -> Self {
        Self {
            forward: s.forward,
            expiry: s.expiry,
            params: s.params,
        }
    }
}

impl SviSmile {
    /// Bind SVI parameters to a forward price and an expiry in years.
    ///
    /// # Errors
    /// Returns [`FixtureError::InvalidInput`](crate::FixtureError::InvalidInput)
    /// if forward or expiry is not positive and finite.
    pub fn new(forward: f64, expiry: f64, params: SviParams) -> error::Result<Self> {
        validate_positive(forward, "forward")?;
        validate_positive(expiry, "expiry")?;
        Ok(Self {
            forward,
            expiry,
            params,
        })
    }

    /// The underlying coefficients.
    pub fn params(&self) -> &SviParams {
        &self.params
    }
}

impl SmileSection for SviSmile {
    fn vol(&self, strike: f64) -> error::Result<Vol> {
        let w = self.variance(strike)?;
        Ok(Vol((w.0 / self.expiry).sqrt()))
    }

    fn variance(&self, strike: f64) -> error::Result<Variance> {
        validate_positive(strike, "strike")?;
        let k = log_moneyness(strike, self.forward);
        Ok(Variance(self.params.total_variance(k).max(VARIANCE_FLOOR)))
    }

    fn forward(&self) -> f64 {
        self.forward
    }

    fn expiry(&self) -> f64 {
        self.expiry
    }
}
