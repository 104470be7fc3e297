//! Calculation modules for the regime comparison pipeline.
//!
//! The pipeline is linear: input normalization, exemption and deduction
//! computation, slab-based tax computation, rebate and cess adjustment, then
//! regime comparison and recommendation generation. [`TaxEngine`] ties the
//! stages together; the individual modules stay usable on their own.

pub mod common;
pub mod deductions;
pub mod engine;
pub mod hra;
pub mod recommendations;
pub mod slab_tax;

pub use deductions::DeductionSummary;
pub use engine::TaxEngine;
