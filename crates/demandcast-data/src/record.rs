//! The historical demand record and the fixed datasets shipped with the
//! placeholder trainer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of historical demand data.
///
/// Matches the columns of `data/historical_demand.csv`:
/// `timestamp,demand,temperature,price`. `price` is optional because the
/// fabricated in-memory table omits it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingRecord {
    /// Observation date.
    pub timestamp: NaiveDate,

    /// Units demanded on that date.
    pub demand: i64,

    /// Ambient temperature, degrees Celsius.
    pub temperature: f64,

    /// Unit price, when recorded.
    pub price: Option<f64>,
}

impl TrainingRecord {
    /// Create a record without a price column.
    pub fn new(timestamp: NaiveDate, demand: i64, temperature: f64) -> Self {
        Self {
            timestamp,
            demand,
            temperature,
            price: None,
        }
    }

    /// Attach a price to this record.
    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("builtin tables use valid dates")
}

/// The fixed four-row table the trainer falls back to when no data file is
/// available.
pub fn builtin_records() -> Vec<TrainingRecord> {
    vec![
        TrainingRecord::new(date(2023, 1, 1), 100, 10.0),
        TrainingRecord::new(date(2023, 1, 2), 110, 12.0),
        TrainingRecord::new(date(2023, 1, 3), 105, 11.0),
        TrainingRecord::new(date(2023, 1, 4), 115, 13.0),
    ]
}

/// The five-row sample dataset written to disk by the example entry point.
pub fn sample_records() -> Vec<TrainingRecord> {
    vec![
        TrainingRecord::new(date(2023, 1, 1), 100, 10.0).with_price(5.0),
        TrainingRecord::new(date(2023, 1, 2), 110, 12.0).with_price(5.1),
        TrainingRecord::new(date(2023, 1, 3), 105, 11.0).with_price(5.0),
        TrainingRecord::new(date(2023, 1, 4), 115, 13.0).with_price(5.2),
        TrainingRecord::new(date(2023, 1, 5), 120, 11.0).with_price(5.1),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_records_shape() {
        let records = builtin_records();
        assert_eq!(records.len(), 4);
        assert!(records.iter().all(|r| r.price.is_none()));
        assert_eq!(records[0].demand, 100);
        assert_eq!(records[3].demand, 115);
    }

    #[test]
    fn test_sample_records_have_prices() {
        let records = sample_records();
        assert_eq!(records.len(), 5);
        assert!(records.iter().all(|r| r.price.is_some()));
        assert_eq!(records[4].timestamp, date(2023, 1, 5));
    }

    #[test]
    fn test_with_price() {
        let record = TrainingRecord::new(date(2023, 6, 1), 42, 20.0).with_price(9.99);
        assert_eq!(record.price, Some(9.99));
    }
}
