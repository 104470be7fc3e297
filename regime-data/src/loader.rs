use std::io::Read;

use regime_core::{PolicyError, Regime, RegimePolicy, TaxSlab};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading slab-schedule data.
#[derive(Debug, Error)]
pub enum SlabScheduleError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("Unknown regime '{0}' (expected 'old' or 'new')")]
    UnknownRegime(String),

    #[error("No {regime} regime schedule for assessment year {year}")]
    ScheduleNotFound { year: i32, regime: &'static str },

    #[error("Invalid schedule: {0}")]
    Policy(#[from] PolicyError),
}

impl From<csv::Error> for SlabScheduleError {
    fn from(err: csv::Error) -> Self {
        SlabScheduleError::CsvParse(err.to_string())
    }
}

/// A single record from a slab-schedule CSV file.
///
/// The CSV format:
/// - `assessment_year`: the year the schedule applies to (e.g., 2025)
/// - `regime`: `old` or `new`
/// - `upper_limit`: the slab's upper bound (empty for the unbounded slab)
/// - `rate`: the marginal rate as a decimal (e.g., 0.05 for 5%)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SlabScheduleRecord {
    pub assessment_year: i32,
    pub regime: String,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub upper_limit: Option<Decimal>,
    pub rate: Decimal,
}

fn deserialize_optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s
            .trim()
            .parse::<Decimal>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// Loader for slab-schedule CSV data.
///
/// Rows may arrive in any order; schedules are sorted by upper limit with
/// the unbounded slab last before they are handed to the engine.
pub struct SlabScheduleLoader;

impl SlabScheduleLoader {
    /// Parse slab-schedule records from a CSV reader.
    ///
    /// The reader can be any type that implements `Read`, such as a file or
    /// a string slice.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<SlabScheduleRecord>, SlabScheduleError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: SlabScheduleRecord = result?;
            records.push(record);
        }

        Ok(records)
    }

    /// Extracts one regime's ordered schedule for an assessment year.
    ///
    /// # Errors
    ///
    /// Returns [`SlabScheduleError::UnknownRegime`] if any record for the
    /// year carries an unrecognized regime label, or
    /// [`SlabScheduleError::ScheduleNotFound`] if the year/regime pair has
    /// no rows.
    pub fn schedule(
        records: &[SlabScheduleRecord],
        year: i32,
        regime: Regime,
    ) -> Result<Vec<TaxSlab>, SlabScheduleError> {
        let mut slabs = Vec::new();

        for record in records.iter().filter(|r| r.assessment_year == year) {
            let record_regime = Regime::parse(&record.regime)
                .ok_or_else(|| SlabScheduleError::UnknownRegime(record.regime.clone()))?;
            if record_regime == regime {
                slabs.push(TaxSlab {
                    upper_limit: record.upper_limit,
                    rate: record.rate,
                });
            }
        }

        if slabs.is_empty() {
            return Err(SlabScheduleError::ScheduleNotFound {
                year,
                regime: regime.as_str(),
            });
        }

        slabs.sort_by_key(|slab| (slab.upper_limit.is_none(), slab.upper_limit));
        Ok(slabs)
    }

    /// Assembles a validated [`RegimePolicy`] for an assessment year.
    ///
    /// Only the slab schedules come from the records; deduction limits and
    /// the rebate/cess parameters keep their current statutory values.
    ///
    /// # Errors
    ///
    /// Returns the schedule-extraction errors of [`Self::schedule`], or
    /// [`SlabScheduleError::Policy`] if the assembled policy fails
    /// validation (misordered limits, missing unbounded slab, out-of-range
    /// rates).
    pub fn policy(
        records: &[SlabScheduleRecord],
        year: i32,
    ) -> Result<RegimePolicy, SlabScheduleError> {
        let policy = RegimePolicy {
            assessment_year: year,
            old_regime_slabs: Self::schedule(records, year, Regime::Old)?,
            new_regime_slabs: Self::schedule(records, year, Regime::New)?,
            ..RegimePolicy::fy_2025()
        };

        policy.validate()?;
        Ok(policy)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    const TEST_CSV: &str = r#"assessment_year,regime,upper_limit,rate
2025,old,250000,0
2025,old,500000,0.05
2025,old,1000000,0.20
2025,old,,0.30
"#;

    #[test]
    fn parse_reads_all_records() {
        let records = SlabScheduleLoader::parse(TEST_CSV.as_bytes()).unwrap();

        assert_eq!(records.len(), 4);
        assert_eq!(
            records[0],
            SlabScheduleRecord {
                assessment_year: 2025,
                regime: "old".to_string(),
                upper_limit: Some(dec!(250000)),
                rate: dec!(0),
            }
        );
    }

    #[test]
    fn parse_treats_empty_upper_limit_as_unbounded() {
        let records = SlabScheduleLoader::parse(TEST_CSV.as_bytes()).unwrap();

        assert_eq!(records[3].upper_limit, None);
        assert_eq!(records[3].rate, dec!(0.30));
    }

    #[test]
    fn parse_rejects_malformed_rows() {
        let csv = "assessment_year,regime,upper_limit,rate\n2025,old,not-a-number,0.05\n";

        let result = SlabScheduleLoader::parse(csv.as_bytes());

        assert!(matches!(result, Err(SlabScheduleError::CsvParse(_))));
    }
}
