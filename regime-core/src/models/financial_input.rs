use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::CityCategory;

/// Fully-normalized financial inputs for one assessment.
///
/// Every monetary field is guaranteed non-negative. Build one directly when
/// the caller already holds trusted values, or go through
/// [`RawFinancialInput::normalize`] for untrusted data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialInput {
    pub basic_salary: Decimal,
    pub hra_received: Decimal,
    pub special_allowance: Decimal,
    pub lta: Decimal,
    pub other_income: Decimal,
    pub rent_paid: Decimal,
    pub city_category: CityCategory,

    pub section_80c: Decimal,
    pub section_80d_self: Decimal,
    pub section_80d_parents: Decimal,
    pub nps_additional: Decimal,
    pub home_loan_interest: Decimal,
}

/// Untrusted, possibly partial input as it arrives from a form or JSON body.
///
/// Normalization never fails: missing amounts default to zero, negative
/// amounts are clamped to zero with a logged warning, and an unrecognized
/// city degrades to metro with a logged warning. This keeps the engine total
/// over whatever a calling layer hands it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawFinancialInput {
    pub basic_salary: Option<Decimal>,
    pub hra_received: Option<Decimal>,
    pub special_allowance: Option<Decimal>,
    pub lta: Option<Decimal>,
    pub other_income: Option<Decimal>,
    pub rent_paid: Option<Decimal>,
    pub city_category: Option<String>,

    pub section_80c: Option<Decimal>,
    pub section_80d_self: Option<Decimal>,
    pub section_80d_parents: Option<Decimal>,
    pub nps_additional: Option<Decimal>,
    pub home_loan_interest: Option<Decimal>,
}

impl RawFinancialInput {
    /// Produces a fully-populated [`FinancialInput`], replacing anything
    /// missing or out of range with a safe default.
    pub fn normalize(&self) -> FinancialInput {
        FinancialInput {
            basic_salary: normalize_amount("basic_salary", self.basic_salary),
            hra_received: normalize_amount("hra_received", self.hra_received),
            special_allowance: normalize_amount("special_allowance", self.special_allowance),
            lta: normalize_amount("lta", self.lta),
            other_income: normalize_amount("other_income", self.other_income),
            rent_paid: normalize_amount("rent_paid", self.rent_paid),
            city_category: normalize_city(self.city_category.as_deref()),
            section_80c: normalize_amount("section_80c", self.section_80c),
            section_80d_self: normalize_amount("section_80d_self", self.section_80d_self),
            section_80d_parents: normalize_amount("section_80d_parents", self.section_80d_parents),
            nps_additional: normalize_amount("nps_additional", self.nps_additional),
            home_loan_interest: normalize_amount("home_loan_interest", self.home_loan_interest),
        }
    }
}

fn normalize_amount(
    field: &str,
    value: Option<Decimal>,
) -> Decimal {
    match value {
        Some(v) if v >= Decimal::ZERO => v,
        Some(v) => {
            warn!(field, value = %v, "negative amount clamped to zero");
            Decimal::ZERO
        }
        None => Decimal::ZERO,
    }
}

fn normalize_city(value: Option<&str>) -> CityCategory {
    match value {
        Some(s) => CityCategory::parse(s).unwrap_or_else(|| {
            warn!(value = s, "unrecognized city category, defaulting to metro");
            CityCategory::Metro
        }),
        None => CityCategory::Metro,
    }
}
