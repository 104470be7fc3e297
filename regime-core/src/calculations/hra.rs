//! House Rent Allowance exemption.
//!
//! The exemption is the least of three amounts, each clamped at zero before
//! the minimum is taken:
//!
//! 1. HRA actually received
//! 2. Rent paid minus 10% of basic salary
//! 3. 50% of basic salary in a metro, 40% otherwise
//!
//! With a zero basic salary, term 2 degenerates to the rent paid and term 3
//! to zero, so the exemption is zero.

use rust_decimal::Decimal;

use crate::calculations::common::floor_zero;
use crate::models::{CityCategory, RegimePolicy};

/// Computes the HRA exemption for the given salary, rent, and city.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use regime_core::calculations::hra::hra_exemption;
/// use regime_core::{CityCategory, RegimePolicy};
///
/// let policy = RegimePolicy::fy_2025();
///
/// // min(20000, 20000 - 5000, 25000) = 15000
/// let exemption = hra_exemption(
///     &policy,
///     dec!(50000),
///     dec!(20000),
///     dec!(20000),
///     CityCategory::Metro,
/// );
///
/// assert_eq!(exemption, dec!(15000));
/// ```
pub fn hra_exemption(
    policy: &RegimePolicy,
    basic_salary: Decimal,
    hra_received: Decimal,
    rent_paid: Decimal,
    city: CityCategory,
) -> Decimal {
    let salary_percent = match city {
        CityCategory::Metro => policy.hra_metro_percent,
        CityCategory::NonMetro => policy.hra_non_metro_percent,
    };

    let received = floor_zero(hra_received);
    let rent_over_offset = floor_zero(rent_paid - policy.rent_offset_percent * basic_salary);
    let salary_ceiling = floor_zero(basic_salary * salary_percent);

    received.min(rent_over_offset).min(salary_ceiling)
}
