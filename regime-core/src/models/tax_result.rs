use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Regime, SavingsRecommendation};

/// The liability computed under a single regime, with the intermediate
/// values kept for transparency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegimeComputation {
    /// Income remaining after this regime's exemptions and deductions.
    pub taxable_income: Decimal,

    /// Slab tax before the Section 87A rebate and cess.
    pub tax_before_cess: Decimal,

    /// Section 87A rebate actually applied (zero under the old regime).
    pub rebate: Decimal,

    /// Health and education cess on the post-rebate tax.
    pub cess: Decimal,

    /// Final liability, rounded to the nearest whole rupee.
    pub tax_amount: Decimal,

    /// Gross income minus the final liability.
    pub in_hand_amount: Decimal,
}

/// Output of one full assessment: both regimes side by side, the cheaper
/// regime, and the savings suggestions when deduction headroom remains.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxResult {
    pub gross_income: Decimal,
    pub old_regime: RegimeComputation,
    pub new_regime: RegimeComputation,
    pub best_regime: Regime,
    /// Absolute difference between the two liabilities; zero when equal.
    pub total_savings: Decimal,
    pub recommendations: Vec<SavingsRecommendation>,
}
