//! Farmer Model

use serde::{Deserialize, Serialize};

/// Fallback name/category for codes that were never registered
pub const UNKNOWN_FARMER: &str = "Unknown";

/// Registered member of the cooperative
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Farmer {
    #[serde(default)]
    pub id: Option<i64>,
    /// Short member code quoted on every record (e.g. "F001")
    pub code: String,
    pub name: String,
    /// Cattle category the member supplies, drives the rate rule
    pub category: String,
}

impl Farmer {
    /// Placeholder for a code with no registration behind it
    pub fn unknown(code: impl Into<String>) -> Self {
        Self {
            id: None,
            code: code.into(),
            name: UNKNOWN_FARMER.to_string(),
            category: UNKNOWN_FARMER.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FarmerCreate {
    pub code: String,
    pub name: String,
    pub category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FarmerUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_farmer() {
        let farmer = Farmer::unknown("F099");
        assert_eq!(farmer.code, "F099");
        assert_eq!(farmer.name, "Unknown");
        assert_eq!(farmer.category, "Unknown");
        assert!(farmer.id.is_none());
    }

    #[test]
    fn test_farmer_serde() {
        let json = r#"{"id":3,"code":"F001","name":"Ramesh Patil","category":"Cow"}"#;
        let farmer: Farmer = serde_json::from_str(json).unwrap();
        assert_eq!(farmer.id, Some(3));
        assert_eq!(farmer.code, "F001");

        // id is optional on the way in
        let json = r#"{"code":"F002","name":"Sunita Jadhav","category":"Buffalo"}"#;
        let farmer: Farmer = serde_json::from_str(json).unwrap();
        assert!(farmer.id.is_none());
    }

    #[test]
    fn test_update_skips_absent_fields() {
        let update = FarmerUpdate {
            name: Some("Renamed".to_string()),
            category: None,
        };
        let json = serde_json::to_string(&update).unwrap();
        assert!(json.contains("name"));
        assert!(!json.contains("category"));
    }
}
