//! Counter Sale Model

use super::serde_helpers;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Milk sold over the counter to a walk-in customer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleRecord {
    #[serde(default)]
    pub id: Option<i64>,
    pub date: NaiveDate,
    pub customer: String,
    #[serde(with = "serde_helpers::lenient_f64", default = "serde_helpers::nan")]
    pub litres: f64,
    #[serde(with = "serde_helpers::lenient_f64", default = "serde_helpers::nan")]
    pub rate: f64,
    #[serde(with = "serde_helpers::lenient_f64", default = "serde_helpers::nan")]
    pub amount: f64,
    #[serde(default)]
    pub created_at: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleCreate {
    pub date: String,
    pub customer: String,
    pub litres: f64,
    pub rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sale_deserialize() {
        let json = r#"{
            "id": 2,
            "date": "2025-03-08",
            "customer": "Hotel Swad",
            "litres": 20.0,
            "rate": 45.0,
            "amount": 900.0
        }"#;
        let sale: SaleRecord = serde_json::from_str(json).unwrap();
        assert_eq!(sale.customer, "Hotel Swad");
        assert_eq!(sale.amount, 900.0);
    }

    #[test]
    fn test_sale_stringly_numbers() {
        let json = r#"{
            "date": "2025-03-08",
            "customer": "Walk-in",
            "litres": "2",
            "rate": "50",
            "amount": "100"
        }"#;
        let sale: SaleRecord = serde_json::from_str(json).unwrap();
        assert_eq!(sale.litres, 2.0);
        assert_eq!(sale.amount, 100.0);
    }
}
