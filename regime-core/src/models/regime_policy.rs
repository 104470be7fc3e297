use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Regime, TaxSlab};

/// Errors raised when a [`RegimePolicy`] is structurally unsound.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PolicyError {
    /// A regime has no slabs at all.
    #[error("{0:?} regime slab schedule is empty")]
    EmptySchedule(Regime),

    /// Slab upper limits must be strictly increasing.
    #[error("{regime:?} regime slab limits are not strictly increasing at {limit}")]
    NonIncreasingLimits { regime: Regime, limit: Decimal },

    /// Only the final slab may be unbounded, and it must be.
    #[error("{0:?} regime schedule must end with exactly one unbounded slab")]
    UnboundedSlabMisplaced(Regime),

    /// A slab rate must lie in [0, 1].
    #[error("{regime:?} regime slab rate must be between 0 and 1, got {rate}")]
    InvalidSlabRate { regime: Regime, rate: Decimal },

    /// A percentage-style policy value must lie in [0, 1].
    #[error("{name} must be between 0 and 1, got {value}")]
    InvalidPercent { name: &'static str, value: Decimal },

    /// A monetary policy value must be non-negative.
    #[error("{name} must be non-negative, got {value}")]
    NegativeAmount { name: &'static str, value: Decimal },
}

/// Statutory caps on the old-regime deduction categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionLimits {
    pub section_80c: Decimal,
    pub section_80d_self: Decimal,
    pub section_80d_parents: Decimal,
    pub nps_additional: Decimal,
    pub home_loan_interest: Decimal,
    /// Assumed LTA exemption ceiling. Not a published statutory figure, so it
    /// lives in policy data rather than as a hard-coded rule.
    pub lta_exemption: Decimal,
}

/// The complete rule set for one assessment year: slab schedules for both
/// regimes, deduction limits, and the rebate/cess parameters.
///
/// Policies are immutable once built and injected into the calculator, so a
/// future year only needs a new `RegimePolicy` value, not new code.
///
/// # Example
///
/// ```
/// use regime_core::RegimePolicy;
///
/// let policy = RegimePolicy::fy_2025();
///
/// assert_eq!(policy.assessment_year, 2025);
/// assert_eq!(policy.validate(), Ok(()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegimePolicy {
    pub assessment_year: i32,
    pub old_regime_slabs: Vec<TaxSlab>,
    pub new_regime_slabs: Vec<TaxSlab>,
    pub deduction_limits: DeductionLimits,

    /// Flat deduction applied under the new regime.
    pub standard_deduction: Decimal,

    /// HRA exemption ceiling as a fraction of basic salary, by city kind.
    pub hra_metro_percent: Decimal,
    pub hra_non_metro_percent: Decimal,

    /// Fraction of basic salary subtracted from rent paid in the HRA formula.
    pub rent_offset_percent: Decimal,

    /// Section 87A rebate: applies under the new regime when taxable income
    /// is at or below this ceiling, up to `rebate_cap` of tax.
    pub rebate_income_ceiling: Decimal,
    pub rebate_cap: Decimal,

    /// Health and education cess on post-rebate tax.
    pub cess_rate: Decimal,
}

impl RegimePolicy {
    /// The FY 2025 policy constants used across the calculator.
    pub fn fy_2025() -> Self {
        Self {
            assessment_year: 2025,
            old_regime_slabs: vec![
                TaxSlab {
                    upper_limit: Some(Decimal::from(250_000)),
                    rate: Decimal::ZERO,
                },
                TaxSlab {
                    upper_limit: Some(Decimal::from(500_000)),
                    rate: Decimal::new(5, 2),
                },
                TaxSlab {
                    upper_limit: Some(Decimal::from(1_000_000)),
                    rate: Decimal::new(20, 2),
                },
                TaxSlab {
                    upper_limit: None,
                    rate: Decimal::new(30, 2),
                },
            ],
            new_regime_slabs: vec![
                TaxSlab {
                    upper_limit: Some(Decimal::from(300_000)),
                    rate: Decimal::ZERO,
                },
                TaxSlab {
                    upper_limit: Some(Decimal::from(600_000)),
                    rate: Decimal::new(5, 2),
                },
                TaxSlab {
                    upper_limit: Some(Decimal::from(900_000)),
                    rate: Decimal::new(10, 2),
                },
                TaxSlab {
                    upper_limit: Some(Decimal::from(1_200_000)),
                    rate: Decimal::new(15, 2),
                },
                TaxSlab {
                    upper_limit: Some(Decimal::from(1_500_000)),
                    rate: Decimal::new(20, 2),
                },
                TaxSlab {
                    upper_limit: None,
                    rate: Decimal::new(30, 2),
                },
            ],
            deduction_limits: DeductionLimits {
                section_80c: Decimal::from(150_000),
                section_80d_self: Decimal::from(25_000),
                section_80d_parents: Decimal::from(50_000),
                nps_additional: Decimal::from(50_000),
                home_loan_interest: Decimal::from(200_000),
                lta_exemption: Decimal::from(75_000),
            },
            standard_deduction: Decimal::from(50_000),
            hra_metro_percent: Decimal::new(50, 2),
            hra_non_metro_percent: Decimal::new(40, 2),
            rent_offset_percent: Decimal::new(10, 2),
            rebate_income_ceiling: Decimal::from(700_000),
            rebate_cap: Decimal::from(25_000),
            cess_rate: Decimal::new(4, 2),
        }
    }

    /// Validates the policy's structure.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError`] if either slab schedule is empty, out of
    /// order, or lacks a single trailing unbounded slab, or if any rate,
    /// percentage, or monetary value is outside its valid range.
    pub fn validate(&self) -> Result<(), PolicyError> {
        validate_schedule(Regime::Old, &self.old_regime_slabs)?;
        validate_schedule(Regime::New, &self.new_regime_slabs)?;

        validate_percent("hra_metro_percent", self.hra_metro_percent)?;
        validate_percent("hra_non_metro_percent", self.hra_non_metro_percent)?;
        validate_percent("rent_offset_percent", self.rent_offset_percent)?;
        validate_percent("cess_rate", self.cess_rate)?;

        validate_amount("standard_deduction", self.standard_deduction)?;
        validate_amount("rebate_income_ceiling", self.rebate_income_ceiling)?;
        validate_amount("rebate_cap", self.rebate_cap)?;

        let limits = &self.deduction_limits;
        validate_amount("section_80c limit", limits.section_80c)?;
        validate_amount("section_80d_self limit", limits.section_80d_self)?;
        validate_amount("section_80d_parents limit", limits.section_80d_parents)?;
        validate_amount("nps_additional limit", limits.nps_additional)?;
        validate_amount("home_loan_interest limit", limits.home_loan_interest)?;
        validate_amount("lta_exemption limit", limits.lta_exemption)?;

        Ok(())
    }

    /// The slab schedule for the given regime.
    pub fn slabs(&self, regime: Regime) -> &[TaxSlab] {
        match regime {
            Regime::Old => &self.old_regime_slabs,
            Regime::New => &self.new_regime_slabs,
        }
    }
}

impl Default for RegimePolicy {
    fn default() -> Self {
        Self::fy_2025()
    }
}

fn validate_schedule(
    regime: Regime,
    slabs: &[TaxSlab],
) -> Result<(), PolicyError> {
    if slabs.is_empty() {
        return Err(PolicyError::EmptySchedule(regime));
    }

    let mut previous: Option<Decimal> = None;
    for (idx, slab) in slabs.iter().enumerate() {
        if slab.rate < Decimal::ZERO || slab.rate > Decimal::ONE {
            return Err(PolicyError::InvalidSlabRate {
                regime,
                rate: slab.rate,
            });
        }
        match slab.upper_limit {
            Some(limit) => {
                if idx == slabs.len() - 1 {
                    // Final slab must be the unbounded one.
                    return Err(PolicyError::UnboundedSlabMisplaced(regime));
                }
                if limit <= previous.unwrap_or(Decimal::ZERO) {
                    return Err(PolicyError::NonIncreasingLimits { regime, limit });
                }
                previous = Some(limit);
            }
            None => {
                if idx != slabs.len() - 1 {
                    return Err(PolicyError::UnboundedSlabMisplaced(regime));
                }
            }
        }
    }

    Ok(())
}

fn validate_percent(
    name: &'static str,
    value: Decimal,
) -> Result<(), PolicyError> {
    if value < Decimal::ZERO || value > Decimal::ONE {
        return Err(PolicyError::InvalidPercent { name, value });
    }
    Ok(())
}

fn validate_amount(
    name: &'static str,
    value: Decimal,
) -> Result<(), PolicyError> {
    if value < Decimal::ZERO {
        return Err(PolicyError::NegativeAmount { name, value });
    }
    Ok(())
}
