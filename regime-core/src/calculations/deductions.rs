//! Old-regime exemption and deduction aggregation.
//!
//! Each claimed deduction category is capped at its statutory limit; the HRA
//! and LTA exemptions are added on top. The new regime ignores all of this
//! and takes only the flat standard deduction.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::calculations::hra::hra_exemption;
use crate::models::{FinancialInput, RegimePolicy};

/// The capped per-category amounts that reduce old-regime taxable income,
/// kept individually for transparency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionSummary {
    pub hra_exemption: Decimal,
    pub lta_exemption: Decimal,
    pub section_80c: Decimal,
    pub section_80d_self: Decimal,
    pub section_80d_parents: Decimal,
    pub nps_additional: Decimal,
    pub home_loan_interest: Decimal,
    pub total: Decimal,
}

/// Aggregates the old-regime deductions and exemptions for one input.
///
/// Claims above a category's statutory limit contribute only the limit; the
/// excess is logged and discarded.
pub fn old_regime_deductions(
    policy: &RegimePolicy,
    input: &FinancialInput,
) -> DeductionSummary {
    let limits = &policy.deduction_limits;

    let hra = hra_exemption(
        policy,
        input.basic_salary,
        input.hra_received,
        input.rent_paid,
        input.city_category,
    );
    let lta = cap("lta", input.lta, limits.lta_exemption);
    let section_80c = cap("section_80c", input.section_80c, limits.section_80c);
    let section_80d_self = cap(
        "section_80d_self",
        input.section_80d_self,
        limits.section_80d_self,
    );
    let section_80d_parents = cap(
        "section_80d_parents",
        input.section_80d_parents,
        limits.section_80d_parents,
    );
    let nps_additional = cap("nps_additional", input.nps_additional, limits.nps_additional);
    let home_loan_interest = cap(
        "home_loan_interest",
        input.home_loan_interest,
        limits.home_loan_interest,
    );

    let total = hra
        + lta
        + section_80c
        + section_80d_self
        + section_80d_parents
        + nps_additional
        + home_loan_interest;

    DeductionSummary {
        hra_exemption: hra,
        lta_exemption: lta,
        section_80c,
        section_80d_self,
        section_80d_parents,
        nps_additional,
        home_loan_interest,
        total,
    }
}

fn cap(
    category: &str,
    claimed: Decimal,
    limit: Decimal,
) -> Decimal {
    if claimed > limit {
        warn!(category, claimed = %claimed, limit = %limit, "claim exceeds statutory limit, capped");
        limit
    } else {
        claimed
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use tracing_subscriber::fmt::format::FmtSpan;

    use super::*;

    /// Initializes tracing subscriber for tests that verify log output.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_span_events(FmtSpan::NONE)
            .with_test_writer()
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    fn policy() -> RegimePolicy {
        RegimePolicy::fy_2025()
    }

    fn input() -> FinancialInput {
        FinancialInput {
            basic_salary: dec!(800000),
            hra_received: dec!(400000),
            special_allowance: dec!(300000),
            rent_paid: dec!(240000),
            section_80c: dec!(150000),
            section_80d_self: dec!(25000),
            nps_additional: dec!(50000),
            ..FinancialInput::default()
        }
    }

    #[test]
    fn sums_capped_categories_and_exemptions() {
        let summary = old_regime_deductions(&policy(), &input());

        // HRA: min(400000, 240000 - 80000, 400000) = 160000
        assert_eq!(summary.hra_exemption, dec!(160000));
        assert_eq!(summary.lta_exemption, dec!(0));
        assert_eq!(summary.section_80c, dec!(150000));
        assert_eq!(summary.section_80d_self, dec!(25000));
        assert_eq!(summary.section_80d_parents, dec!(0));
        assert_eq!(summary.nps_additional, dec!(50000));
        assert_eq!(summary.home_loan_interest, dec!(0));
        assert_eq!(summary.total, dec!(385000));
    }

    #[test]
    fn each_category_is_capped_at_its_limit() {
        let _guard = init_test_tracing();
        let absurd = FinancialInput {
            section_80c: dec!(10000000),
            section_80d_self: dec!(10000000),
            section_80d_parents: dec!(10000000),
            nps_additional: dec!(10000000),
            home_loan_interest: dec!(10000000),
            lta: dec!(10000000),
            ..input()
        };

        let summary = old_regime_deductions(&policy(), &absurd);

        assert_eq!(summary.section_80c, dec!(150000));
        assert_eq!(summary.section_80d_self, dec!(25000));
        assert_eq!(summary.section_80d_parents, dec!(50000));
        assert_eq!(summary.nps_additional, dec!(50000));
        assert_eq!(summary.home_loan_interest, dec!(200000));
        assert_eq!(summary.lta_exemption, dec!(75000));
    }

    #[test]
    fn lta_below_cap_passes_through() {
        let with_lta = FinancialInput {
            lta: dec!(40000),
            ..input()
        };

        let summary = old_regime_deductions(&policy(), &with_lta);

        assert_eq!(summary.lta_exemption, dec!(40000));
    }

    #[test]
    fn all_zero_input_gives_zero_total() {
        let summary = old_regime_deductions(&policy(), &FinancialInput::default());

        assert_eq!(summary.total, dec!(0));
    }
}
