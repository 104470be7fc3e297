mod city_category;
mod financial_input;
mod recommendation;
mod regime;
mod regime_policy;
mod tax_result;
mod tax_slab;

pub use city_category::CityCategory;
pub use financial_input::{FinancialInput, RawFinancialInput};
pub use recommendation::{DeductionCategory, SavingsRecommendation};
pub use regime::Regime;
pub use regime_policy::{DeductionLimits, PolicyError, RegimePolicy};
pub use tax_result::{RegimeComputation, TaxResult};
pub use tax_slab::TaxSlab;
