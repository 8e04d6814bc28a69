//! Rate Rule Model

use serde::{Deserialize, Serialize};

/// Per-category pricing rule
///
/// The quoted rate for a delivery is
/// `base + fat * fat_rate + snf * snf_rate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateRule {
    pub category: String,
    pub base: f64,
    pub fat_rate: f64,
    pub snf_rate: f64,
}

/// Quote produced for a given category and quality reading
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateQuote {
    pub category: String,
    pub fat: f64,
    pub snf: f64,
    /// Rupees per litre, rounded to 2 decimal places
    pub rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_rule_serde() {
        let json = r#"{"category":"Cow","base":20.0,"fat_rate":5.0,"snf_rate":3.0}"#;
        let rule: RateRule = serde_json::from_str(json).unwrap();
        assert_eq!(rule.category, "Cow");
        assert_eq!(rule.base, 20.0);
        assert_eq!(rule.fat_rate, 5.0);
        assert_eq!(rule.snf_rate, 3.0);
    }
}
