//! Progressive slab taxation.
//!
//! Marginal-rate taxation over an ordered slab schedule: every rupee up to
//! the first limit is taxed at the first slab's rate, every rupee between
//! limits at the next rate, and so on. This is not a flat rate on the whole
//! amount.

use rust_decimal::Decimal;

use crate::models::TaxSlab;

/// Computes the slab tax on `taxable_income` before any rebate or cess.
///
/// The schedule must be ordered by `upper_limit` ascending with the unbounded
/// slab last, as [`RegimePolicy::validate`](crate::RegimePolicy::validate)
/// enforces. Income at or below zero yields zero tax.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use regime_core::RegimePolicy;
/// use regime_core::calculations::slab_tax::slab_tax;
///
/// let policy = RegimePolicy::fy_2025();
///
/// // 0 on the first 3L, 5% on the next 3L, 10% on the next 3L,
/// // 15% on the last 50000
/// let tax = slab_tax(&policy.new_regime_slabs, dec!(950000));
///
/// assert_eq!(tax, dec!(52500));
/// ```
pub fn slab_tax(
    slabs: &[TaxSlab],
    taxable_income: Decimal,
) -> Decimal {
    if taxable_income <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let mut tax = Decimal::ZERO;
    let mut lower = Decimal::ZERO;

    for slab in slabs {
        if taxable_income <= lower {
            break;
        }
        let ceiling = match slab.upper_limit {
            Some(limit) => limit.min(taxable_income),
            None => taxable_income,
        };
        tax += (ceiling - lower) * slab.rate;
        match slab.upper_limit {
            Some(limit) => lower = limit,
            None => break,
        }
    }

    tax
}
