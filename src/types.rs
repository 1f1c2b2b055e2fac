//! Core value types.
//!
//! These newtypes wrap `f64` so a tenor in years cannot be confused with a
//! volatility or a total variance at a call site. Outputs use newtypes, inputs
//! take bare `f64` and are validated where they enter the crate.
//!
//! Only `PartialEq` / `PartialOrd` are derived: `NaN` breaks total ordering.

/// Time to expiry `T` in years (annualized).
///
/// # Examples
/// ```
/// use volsurf_fixtures::types::Tenor;
/// let one_year = Tenor(1.0);
/// assert_eq!(one_year.0, 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Tenor(pub f64);

/// Implied volatility `σ`, annualized.
///
/// # Examples
/// ```
/// use volsurf_fixtures::types::Vol;
/// let vol = Vol(0.20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Vol(pub f64);

/// Total implied variance `w = σ²T`.
///
/// # Examples
/// ```
/// use volsurf_fixtures::types::Variance;
/// let w = Variance(0.04);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Variance(pub f64);
