//! # volsurf-fixtures
//!
//! Synthesizes volatility-surface test fixtures at new tenors from a
//! previously computed SVI smile.
//!
//! A base result carries a forward, a strike grid and fitted SVI parameters.
//! The same total-variance curve `w(k)` is re-anchored at each requested tenor
//! and the implied vols `√(w / T)` are written as new fixture files. Nothing
//! is refit.
//!
//! ## Architecture
//!
//! - **`smile`** — SVI curve evaluation behind the [`SmileSection`] trait
//! - **`fixture`** — input normalization ([`BaseResult`]) and the output
//!   record ([`SyntheticFixture`])
//! - **`generator`** — per-tenor generation and file output
//!
//! ## Design
//!
//! - **Normalize at the boundary.** Alternate key spellings (`forward`/`F`,
//!   `svi_params`/`svi`) are resolved when the base is parsed; the rest of
//!   the crate only sees [`BaseResult`].
//! - **No panics.** Every fallible operation returns [`Result`].
//! - **Floored variance.** Degenerate parameters never produce a NaN vol:
//!   total variance is clamped at [`smile::VARIANCE_FLOOR`].

pub mod conventions;
pub mod error;
pub mod fixture;
pub mod generator;
pub mod smile;
pub mod types;
mod validate;

#[doc(inline)]
pub use error::{FixtureError, Result};
#[doc(inline)]
pub use fixture::{BaseResult, SyntheticFixture};
#[doc(inline)]
pub use generator::{FixtureGenerator, GeneratorConfig};
#[doc(inline)]
pub use smile::SmileSection;
#[doc(inline)]
pub use types::{Tenor, Variance, Vol};
