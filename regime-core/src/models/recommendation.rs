use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Old-regime deduction categories the recommender reports headroom for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeductionCategory {
    Section80C,
    Section80DSelf,
    Section80DParents,
    NpsAdditional,
}

/// One actionable savings suggestion.
///
/// `Display` renders the user-facing message; callers that need structure
/// (category, remaining headroom) match on the variant instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SavingsRecommendation {
    Invest {
        category: DeductionCategory,
        headroom: Decimal,
    },
    FullyOptimized,
}

impl fmt::Display for SavingsRecommendation {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Invest {
                category: DeductionCategory::Section80C,
                headroom,
            } => write!(
                f,
                "Consider investing ₹{headroom} more in Section 80C instruments like PPF, ELSS, or NPS."
            ),
            Self::Invest {
                category: DeductionCategory::Section80DSelf,
                headroom,
            } => write!(
                f,
                "You can save tax on up to ₹{headroom} more of health insurance premiums for yourself and your family under Section 80D."
            ),
            Self::Invest {
                category: DeductionCategory::Section80DParents,
                headroom,
            } => write!(
                f,
                "Consider a health insurance policy for your parents to claim up to ₹{headroom} more under Section 80D."
            ),
            Self::Invest {
                category: DeductionCategory::NpsAdditional,
                headroom,
            } => write!(
                f,
                "Investing up to ₹{headroom} more in NPS qualifies for an additional deduction under Section 80CCD(1B)."
            ),
            Self::FullyOptimized => write!(
                f,
                "You're already using your deduction headroom well. Consider consulting a tax professional for advanced strategies."
            ),
        }
    }
}
