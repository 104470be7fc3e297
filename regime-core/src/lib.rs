//! Core engine for comparing Indian income-tax liability under the Old and
//! New regimes.
//!
//! Given a financial input, the engine computes taxable income and tax
//! payable under each regime, picks the cheaper one, and suggests where
//! unused deduction headroom remains. The whole computation is pure and
//! synchronous; rates, limits, and thresholds live in an injected
//! [`RegimePolicy`] so a new assessment year is a data change, not a code
//! change.

pub mod calculations;
pub mod models;

pub use calculations::{DeductionSummary, TaxEngine};
pub use models::*;
