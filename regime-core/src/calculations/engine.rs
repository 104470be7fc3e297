//! The regime comparison engine.
//!
//! One assessment runs the full pipeline for both regimes:
//!
//! | Stage | Old regime | New regime |
//! |-------|------------|------------|
//! | Gross income | basic + HRA + special allowance + LTA + other income | same |
//! | Reductions | HRA exemption, capped LTA, capped 80C/80D/NPS/home-loan | standard deduction only |
//! | Slab tax | old schedule | new schedule |
//! | Rebate | none | Section 87A when taxable ≤ ceiling |
//! | Cess | 4% on post-rebate tax | same |
//!
//! The engine is a pure function of its inputs: no I/O, no shared state, and
//! safe to call from any number of threads at once.

use rust_decimal::Decimal;

use crate::calculations::common::{floor_zero, round_rupee};
use crate::calculations::deductions::old_regime_deductions;
use crate::calculations::recommendations::savings_recommendations;
use crate::calculations::slab_tax::slab_tax;
use crate::models::{
    FinancialInput, PolicyError, RawFinancialInput, Regime, RegimeComputation, RegimePolicy,
    TaxResult,
};

/// Compares old- and new-regime liability for a financial input.
///
/// Construction validates the policy once; after that every assessment is
/// infallible. Inputs are normalized rather than rejected, so the engine
/// always produces a result.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use regime_core::{FinancialInput, Regime, TaxEngine};
///
/// let engine = TaxEngine::default();
///
/// let input = FinancialInput {
///     basic_salary: dec!(800000),
///     hra_received: dec!(400000),
///     special_allowance: dec!(300000),
///     rent_paid: dec!(240000),
///     section_80c: dec!(150000),
///     section_80d_self: dec!(25000),
///     nps_additional: dec!(50000),
///     ..FinancialInput::default()
/// };
///
/// let result = engine.assess_normalized(&input);
///
/// assert_eq!(result.gross_income, dec!(1500000));
/// assert_eq!(result.best_regime, Regime::New);
/// assert_eq!(result.new_regime.tax_amount, dec!(145600));
/// ```
#[derive(Debug, Clone)]
pub struct TaxEngine {
    policy: RegimePolicy,
}

impl TaxEngine {
    /// Creates an engine for the given policy.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError`] if the policy fails
    /// [`RegimePolicy::validate`].
    pub fn new(policy: RegimePolicy) -> Result<Self, PolicyError> {
        policy.validate()?;
        Ok(Self { policy })
    }

    /// The policy this engine was built with.
    pub fn policy(&self) -> &RegimePolicy {
        &self.policy
    }

    /// Normalizes an untrusted input and assesses it.
    pub fn assess(
        &self,
        raw: &RawFinancialInput,
    ) -> TaxResult {
        self.assess_normalized(&raw.normalize())
    }

    /// Assesses an already-normalized input.
    ///
    /// Identical inputs always produce identical output; there is no hidden
    /// state, randomness, or time dependence.
    pub fn assess_normalized(
        &self,
        input: &FinancialInput,
    ) -> TaxResult {
        let gross_income = gross_income(input);

        let deductions = old_regime_deductions(&self.policy, input);
        let old_taxable = floor_zero(gross_income - deductions.total);
        let new_taxable = floor_zero(gross_income - self.policy.standard_deduction);

        let old_regime = self.regime_computation(Regime::Old, old_taxable, gross_income);
        let new_regime = self.regime_computation(Regime::New, new_taxable, gross_income);

        // Ties go to the old regime, which keeps the deduction headroom
        // suggestions in play.
        let best_regime = if old_regime.tax_amount <= new_regime.tax_amount {
            Regime::Old
        } else {
            Regime::New
        };
        let total_savings = (old_regime.tax_amount - new_regime.tax_amount).abs();

        let recommendations = match best_regime {
            Regime::Old => savings_recommendations(&self.policy.deduction_limits, input),
            Regime::New => Vec::new(),
        };

        TaxResult {
            gross_income,
            old_regime,
            new_regime,
            best_regime,
            total_savings,
            recommendations,
        }
    }

    /// Applies slab tax, the Section 87A rebate, and cess for one regime.
    fn regime_computation(
        &self,
        regime: Regime,
        taxable_income: Decimal,
        gross_income: Decimal,
    ) -> RegimeComputation {
        let tax_before_cess = slab_tax(self.policy.slabs(regime), taxable_income);

        let rebate = match regime {
            Regime::New if taxable_income <= self.policy.rebate_income_ceiling => {
                tax_before_cess.min(self.policy.rebate_cap)
            }
            _ => Decimal::ZERO,
        };

        let after_rebate = floor_zero(tax_before_cess - rebate);
        let cess = after_rebate * self.policy.cess_rate;
        let tax_amount = round_rupee(after_rebate + cess);

        RegimeComputation {
            taxable_income,
            tax_before_cess,
            rebate,
            cess,
            tax_amount,
            in_hand_amount: gross_income - tax_amount,
        }
    }
}

impl Default for TaxEngine {
    fn default() -> Self {
        Self {
            policy: RegimePolicy::fy_2025(),
        }
    }
}

fn gross_income(input: &FinancialInput) -> Decimal {
    input.basic_salary
        + input.hra_received
        + input.special_allowance
        + input.lta
        + input.other_income
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use crate::models::TaxSlab;

    use super::*;

    fn engine() -> TaxEngine {
        TaxEngine::default()
    }

    /// Salary-only input with the given basic salary, everything else zero.
    fn salary_only(basic: Decimal) -> FinancialInput {
        FinancialInput {
            basic_salary: basic,
            ..FinancialInput::default()
        }
    }

    // =========================================================================
    // construction tests
    // =========================================================================

    #[test]
    fn new_accepts_valid_policy() {
        let result = TaxEngine::new(RegimePolicy::fy_2025());

        assert!(result.is_ok());
    }

    #[test]
    fn new_rejects_invalid_policy() {
        let policy = RegimePolicy {
            old_regime_slabs: vec![TaxSlab {
                upper_limit: Some(dec!(250000)),
                rate: dec!(0),
            }],
            ..RegimePolicy::fy_2025()
        };

        let result = TaxEngine::new(policy);

        assert_eq!(
            result.err(),
            Some(PolicyError::UnboundedSlabMisplaced(Regime::Old))
        );
    }

    // =========================================================================
    // worked scenarios
    // =========================================================================

    #[test]
    fn new_regime_liability_for_ten_lakh_salary() {
        // Gross 10L, standard deduction 50000, taxable 950000.
        let result = engine().assess_normalized(&salary_only(dec!(1000000)));

        assert_eq!(result.new_regime.taxable_income, dec!(950000));
        // 0 + 15000 + 30000 + 7500
        assert_eq!(result.new_regime.tax_before_cess, dec!(52500));
        assert_eq!(result.new_regime.cess, dec!(2100));
        assert_eq!(result.new_regime.tax_amount, dec!(54600));
        assert_eq!(result.new_regime.in_hand_amount, dec!(945400));
    }

    #[test]
    fn old_regime_liability_for_twelve_lakh_salary_with_80d() {
        // Gross 12L, 25000 of 80D: old taxable 1175000.
        let input = FinancialInput {
            basic_salary: dec!(1200000),
            section_80d_self: dec!(25000),
            ..FinancialInput::default()
        };

        let result = engine().assess_normalized(&input);

        assert_eq!(result.old_regime.taxable_income, dec!(1175000));
        // 0 + 12500 + 100000 + 52500
        assert_eq!(result.old_regime.tax_before_cess, dec!(165000));
        assert_eq!(result.old_regime.cess, dec!(6600));
        assert_eq!(result.old_regime.tax_amount, dec!(171600));
    }

    #[test]
    fn heavy_deductions_make_old_regime_win() {
        let input = FinancialInput {
            basic_salary: dec!(600000),
            hra_received: dec!(300000),
            special_allowance: dec!(100000),
            lta: dec!(50000),
            rent_paid: dec!(300000),
            section_80c: dec!(150000),
            section_80d_self: dec!(10000),
            ..FinancialInput::default()
        };

        let result = engine().assess_normalized(&input);

        assert_eq!(result.gross_income, dec!(1050000));
        // HRA 240000 + LTA 50000 + 80C 150000 + 80D 10000 = 450000
        assert_eq!(result.old_regime.taxable_income, dec!(600000));
        assert_eq!(result.old_regime.tax_amount, dec!(33800));
        assert_eq!(result.new_regime.taxable_income, dec!(1000000));
        assert_eq!(result.new_regime.tax_amount, dec!(62400));
        assert_eq!(result.best_regime, Regime::Old);
        assert_eq!(result.total_savings, dec!(28600));
    }

    #[test]
    fn minimal_deductions_make_new_regime_win() {
        let input = FinancialInput {
            basic_salary: dec!(800000),
            hra_received: dec!(400000),
            special_allowance: dec!(300000),
            rent_paid: dec!(240000),
            section_80c: dec!(150000),
            section_80d_self: dec!(25000),
            nps_additional: dec!(50000),
            ..FinancialInput::default()
        };

        let result = engine().assess_normalized(&input);

        assert_eq!(result.gross_income, dec!(1500000));
        // Deductions: HRA 160000 + 225000 of capped categories
        assert_eq!(result.old_regime.taxable_income, dec!(1115000));
        assert_eq!(result.old_regime.tax_amount, dec!(152880));
        assert_eq!(result.new_regime.taxable_income, dec!(1450000));
        assert_eq!(result.new_regime.tax_amount, dec!(145600));
        assert_eq!(result.best_regime, Regime::New);
        assert_eq!(result.total_savings, dec!(7280));
    }

    // =========================================================================
    // rebate boundary
    // =========================================================================

    #[test]
    fn rebate_zeroes_new_regime_tax_at_ceiling() {
        // Gross 750000, new taxable exactly 700000.
        let result = engine().assess_normalized(&salary_only(dec!(750000)));

        assert_eq!(result.new_regime.taxable_income, dec!(700000));
        assert_eq!(result.new_regime.tax_before_cess, dec!(25000));
        assert_eq!(result.new_regime.rebate, dec!(25000));
        assert_eq!(result.new_regime.tax_amount, dec!(0));
    }

    #[test]
    fn tax_jumps_one_rupee_past_the_rebate_ceiling() {
        let result = engine().assess_normalized(&salary_only(dec!(750001)));

        assert_eq!(result.new_regime.taxable_income, dec!(700001));
        assert_eq!(result.new_regime.rebate, dec!(0));
        // (25000.10) * 1.04 rounded
        assert_eq!(result.new_regime.tax_amount, dec!(26000));
    }

    #[test]
    fn rebate_never_applies_to_old_regime() {
        let result = engine().assess_normalized(&salary_only(dec!(400000)));

        assert_eq!(result.old_regime.rebate, dec!(0));
        // Old taxable 400000: 5% on 150000, plus cess
        assert_eq!(result.old_regime.tax_amount, dec!(7800));
    }

    // =========================================================================
    // totality and invariants
    // =========================================================================

    #[test]
    fn all_zero_input_yields_zero_everywhere() {
        let result = engine().assess_normalized(&FinancialInput::default());

        assert_eq!(result.gross_income, dec!(0));
        assert_eq!(result.old_regime.taxable_income, dec!(0));
        assert_eq!(result.new_regime.taxable_income, dec!(0));
        assert_eq!(result.old_regime.tax_amount, dec!(0));
        assert_eq!(result.new_regime.tax_amount, dec!(0));
        assert_eq!(result.best_regime, Regime::Old);
        assert_eq!(result.total_savings, dec!(0));
    }

    #[test]
    fn deductions_never_push_taxable_income_negative() {
        let input = FinancialInput {
            basic_salary: dec!(30000),
            section_80c: dec!(150000),
            home_loan_interest: dec!(200000),
            ..FinancialInput::default()
        };

        let result = engine().assess_normalized(&input);

        assert_eq!(result.old_regime.taxable_income, dec!(0));
        assert_eq!(result.new_regime.taxable_income, dec!(0));
    }

    #[test]
    fn tax_is_monotonic_in_basic_salary() {
        let salaries = [
            dec!(0),
            dec!(250000),
            dec!(500000),
            dec!(700000),
            dec!(750001),
            dec!(1000000),
            dec!(2500000),
        ];

        let mut previous_old = Decimal::ZERO;
        let mut previous_new = Decimal::ZERO;
        for salary in salaries {
            let result = engine().assess_normalized(&salary_only(salary));

            assert!(result.old_regime.tax_amount >= previous_old);
            assert!(result.new_regime.tax_amount >= previous_new);
            previous_old = result.old_regime.tax_amount;
            previous_new = result.new_regime.tax_amount;
        }
    }

    #[test]
    fn assessment_is_idempotent() {
        let input = FinancialInput {
            basic_salary: dec!(1234567),
            hra_received: dec!(345678),
            rent_paid: dec!(456789),
            section_80c: dec!(120000),
            ..FinancialInput::default()
        };

        let first = engine().assess_normalized(&input);
        let second = engine().assess_normalized(&input);

        assert_eq!(first, second);
    }

    #[test]
    fn savings_is_a_true_absolute_difference() {
        let result = engine().assess_normalized(&salary_only(dec!(1500000)));

        let forward = (result.old_regime.tax_amount - result.new_regime.tax_amount).abs();
        let backward = (result.new_regime.tax_amount - result.old_regime.tax_amount).abs();

        assert_eq!(result.total_savings, forward);
        assert_eq!(result.total_savings, backward);
        assert!(result.total_savings >= Decimal::ZERO);
    }

    // =========================================================================
    // recommendations
    // =========================================================================

    #[test]
    fn recommendations_emitted_only_when_old_regime_wins() {
        let old_wins = FinancialInput {
            basic_salary: dec!(600000),
            hra_received: dec!(300000),
            special_allowance: dec!(100000),
            lta: dec!(50000),
            rent_paid: dec!(300000),
            section_80c: dec!(150000),
            section_80d_self: dec!(10000),
            ..FinancialInput::default()
        };

        let result = engine().assess_normalized(&old_wins);

        assert_eq!(result.best_regime, Regime::Old);
        // 80C is maxed; headroom remains in the other three.
        assert_eq!(result.recommendations.len(), 3);
    }

    #[test]
    fn no_recommendations_when_new_regime_wins() {
        let result = engine().assess_normalized(&salary_only(dec!(2000000)));

        assert_eq!(result.best_regime, Regime::New);
        assert!(result.recommendations.is_empty());
    }

    // =========================================================================
    // raw input path
    // =========================================================================

    #[test]
    fn assess_normalizes_before_computing() {
        let raw = RawFinancialInput {
            basic_salary: Some(dec!(-800000)),
            city_category: Some("village".to_string()),
            ..RawFinancialInput::default()
        };

        let result = engine().assess(&raw);

        assert_eq!(result, engine().assess_normalized(&FinancialInput::default()));
    }

    #[test]
    fn assess_matches_normalized_path_for_clean_input() {
        let raw = RawFinancialInput {
            basic_salary: Some(dec!(1000000)),
            ..RawFinancialInput::default()
        };

        let via_raw = engine().assess(&raw);
        let via_normalized = engine().assess_normalized(&salary_only(dec!(1000000)));

        assert_eq!(via_raw, via_normalized);
    }
}
