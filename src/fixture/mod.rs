//! Fixture records.
//!
//! - [`BaseResult`] — normalized input: forward, strikes, fitted SVI params
//! - [`SyntheticFixture`] — output: the same smile evaluated at a new tenor

pub mod base;
pub mod synthetic;

pub use base::{BaseResult, DEFAULT_DISCOUNT_FACTOR};
pub use synthetic::{RESULT_SUFFIX, SyntheticFixture, fixture_id};
