//! Market conventions: moneyness and day count.
//!
//! Tenors arrive in calendar days and are annualized on an ACT/365 basis,
//! which is what the fixture consumers assume.

use crate::error::FixtureError;
use crate::types::Tenor;

/// Calendar days per year for tenor annualization.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Convert a strike to log-moneyness: k = ln(K / F).
pub fn log_moneyness(strike: f64, forward: f64) -> f64 {
    (strike / forward).ln()
}

/// Annualize a tenor given in calendar days: T = days / 365.
///
/// # Errors
/// Returns [`FixtureError::InvalidInput`] for a zero-day tenor.
///
/// # Examples
/// ```
/// use volsurf_fixtures::conventions::tenor_from_days;
/// assert_eq!(tenor_from_days(365).unwrap().0, 1.0);
/// ```
pub fn tenor_from_days(days: u32) -> crate::error::Result<Tenor> {
    if days == 0 {
        return Err(FixtureError::InvalidInput {
            message: "tenor must be at least one day".into(),
        });
    }
    Ok(Tenor(f64::from(days) / DAYS_PER_YEAR))
}
