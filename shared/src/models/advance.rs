//! Advance Model

use super::serde_helpers;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Cash paid out to a farmer ahead of the billing cycle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvanceRecord {
    #[serde(default)]
    pub id: Option<i64>,
    pub farmer_code: String,
    pub date: NaiveDate,
    #[serde(with = "serde_helpers::lenient_f64", default = "serde_helpers::nan")]
    pub amount: f64,
    #[serde(default)]
    pub remarks: Option<String>,
    #[serde(default)]
    pub created_at: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvanceCreate {
    pub farmer_code: String,
    pub date: String,
    pub amount: f64,
    #[serde(default)]
    pub remarks: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_deserialize() {
        let json = r#"{
            "id": 4,
            "farmer_code": "F001",
            "date": "2025-03-05",
            "amount": 100.0,
            "remarks": "Seed purchase"
        }"#;
        let advance: AdvanceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(advance.amount, 100.0);
        assert_eq!(advance.remarks.as_deref(), Some("Seed purchase"));
    }

    #[test]
    fn test_advance_garbage_amount_is_nan() {
        let json = r#"{
            "farmer_code": "F001",
            "date": "2025-03-05",
            "amount": "n/a"
        }"#;
        let advance: AdvanceRecord = serde_json::from_str(json).unwrap();
        assert!(advance.amount.is_nan());
        assert!(advance.remarks.is_none());
    }
}
