//! Single-tenor volatility smiles.
//!
//! A smile maps strike to implied volatility at a fixed expiry. Fixtures are
//! produced by evaluating a [`SmileSection`] over the base strike grid.
//!
//! ## Models
//!
//! - [`SviSmile`] — raw SVI parameterization (Gatheral), 5 parameters

pub mod svi;

pub use svi::{SviParams, SviSmile, VARIANCE_FLOOR};

use crate::error;
use crate::types::{Variance, Vol};

/// A single-tenor volatility smile.
///
/// # Error Handling
/// Methods return `Result` so implementations can reject strikes the model
/// cannot evaluate (zero, negative, NaN) rather than panicking.
pub trait SmileSection {
    /// Implied Black volatility σ at the given strike.
    fn vol(&self, strike: f64) -> error::Result<Vol>;

    /// Total Black variance σ²T at the given strike.
    fn variance(&self, strike: f64) -> error::Result<Variance>;

    /// Forward price F at this tenor.
    fn forward(&self) -> f64;

    /// Time to expiry T in years.
    fn expiry(&self) -> f64;
}
