//! Milk Collection Record Model

use super::serde_helpers;
use super::shift::Shift;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Accepted fat band (percent)
pub const FAT_MIN: f64 = 2.0;
pub const FAT_MAX: f64 = 8.0;

/// Accepted SNF band (percent)
pub const SNF_MIN: f64 = 7.0;
pub const SNF_MAX: f64 = 9.5;

/// One weighed-and-tested delivery at the collection ramp
///
/// Records are immutable once entered. Numeric fields deserialize
/// leniently: imported dumps carry strings and occasional garbage, and
/// an unusable value must surface as a billing warning, not a rejected
/// payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MilkRecord {
    #[serde(default)]
    pub id: Option<i64>,
    pub date: NaiveDate,
    pub farmer_code: String,
    /// Resolved at entry time, "Unknown" when the code is unregistered
    #[serde(default)]
    pub farmer_name: String,
    #[serde(default)]
    pub category: String,
    pub shift: Shift,
    #[serde(with = "serde_helpers::lenient_f64", default = "serde_helpers::nan")]
    pub litres: f64,
    #[serde(with = "serde_helpers::lenient_f64", default = "serde_helpers::nan")]
    pub fat: f64,
    #[serde(with = "serde_helpers::lenient_f64", default = "serde_helpers::nan")]
    pub snf: f64,
    /// Rupees per litre applied to this delivery
    #[serde(with = "serde_helpers::lenient_f64", default = "serde_helpers::nan")]
    pub rate: f64,
    /// litres x rate, fixed at entry time
    #[serde(with = "serde_helpers::lenient_f64", default = "serde_helpers::nan")]
    pub amount: f64,
    /// Entry timestamp, milliseconds since the epoch
    #[serde(default)]
    pub created_at: Option<i64>,
}

/// Entry payload for a new collection record
///
/// The date arrives as text and is validated server-side so a bad value
/// gets a structured error instead of a deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MilkRecordCreate {
    pub date: String,
    pub farmer_code: String,
    pub shift: String,
    pub litres: f64,
    pub fat: f64,
    pub snf: f64,
    /// Omit to have the rate quoted from the farmer's category rule
    #[serde(default)]
    pub rate: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_deserialize_clean() {
        let json = r#"{
            "id": 1,
            "date": "2025-03-10",
            "farmer_code": "F001",
            "farmer_name": "Ramesh Patil",
            "category": "Cow",
            "shift": "Morning",
            "litres": 10.0,
            "fat": 4.2,
            "snf": 8.1,
            "rate": 30.0,
            "amount": 300.0
        }"#;
        let record: MilkRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.litres, 10.0);
        assert_eq!(record.amount, 300.0);
        assert_eq!(record.shift, Shift::Morning);
    }

    #[test]
    fn test_record_deserialize_stringly_numbers() {
        let json = r#"{
            "date": "2025-03-10",
            "farmer_code": "F001",
            "shift": "Evening",
            "litres": "8.5",
            "fat": "4.0",
            "snf": "8.0",
            "rate": "28",
            "amount": "238"
        }"#;
        let record: MilkRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.litres, 8.5);
        assert_eq!(record.rate, 28.0);
        assert_eq!(record.amount, 238.0);
    }

    #[test]
    fn test_record_deserialize_garbage_amount() {
        // A corrupted amount must not reject the record wholesale
        let json = r#"{
            "date": "2025-03-10",
            "farmer_code": "F002",
            "shift": "Morning",
            "litres": 5.0,
            "fat": 4.5,
            "snf": 8.2,
            "rate": 30.0,
            "amount": "abc"
        }"#;
        let record: MilkRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.litres, 5.0);
        assert!(record.amount.is_nan());
    }

    #[test]
    fn test_record_missing_numerics_are_nan() {
        let json = r#"{
            "date": "2025-03-10",
            "farmer_code": "F003",
            "shift": "Morning"
        }"#;
        let record: MilkRecord = serde_json::from_str(json).unwrap();
        assert!(record.litres.is_nan());
        assert!(record.fat.is_nan());
        assert!(record.amount.is_nan());
    }

    #[test]
    fn test_bands() {
        assert!(FAT_MIN < FAT_MAX);
        assert!(SNF_MIN < SNF_MAX);
    }
}
