use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One slab of a progressive rate schedule.
///
/// `upper_limit` of `None` marks the final, unbounded slab. Schedules are
/// ordered by `upper_limit` ascending with the unbounded slab last.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxSlab {
    pub upper_limit: Option<Decimal>,
    pub rate: Decimal,
}
