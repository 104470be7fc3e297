//! Savings recommendation generation.
//!
//! For each deduction category not yet at its statutory cap, one suggestion
//! naming the remaining headroom, in a fixed order so output is reproducible:
//! 80C, then 80D self, then 80D parents, then NPS. If every category is
//! already maxed, a single generic entry.

use rust_decimal::Decimal;

use crate::models::{DeductionCategory, DeductionLimits, FinancialInput, SavingsRecommendation};

/// Builds the ordered recommendation list for one input.
pub fn savings_recommendations(
    limits: &DeductionLimits,
    input: &FinancialInput,
) -> Vec<SavingsRecommendation> {
    let categories = [
        (
            DeductionCategory::Section80C,
            input.section_80c,
            limits.section_80c,
        ),
        (
            DeductionCategory::Section80DSelf,
            input.section_80d_self,
            limits.section_80d_self,
        ),
        (
            DeductionCategory::Section80DParents,
            input.section_80d_parents,
            limits.section_80d_parents,
        ),
        (
            DeductionCategory::NpsAdditional,
            input.nps_additional,
            limits.nps_additional,
        ),
    ];

    let mut recommendations = Vec::new();
    for (category, claimed, limit) in categories {
        let headroom = limit - claimed.min(limit);
        if headroom > Decimal::ZERO {
            recommendations.push(SavingsRecommendation::Invest { category, headroom });
        }
    }

    if recommendations.is_empty() {
        recommendations.push(SavingsRecommendation::FullyOptimized);
    }

    recommendations
}
