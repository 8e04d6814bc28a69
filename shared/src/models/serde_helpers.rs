//! Common serde helpers for ledger record numerics
//!
//! Collection dumps and hand-edited imports carry quantities as JSON
//! numbers, numeric strings, or outright garbage. Record models accept
//! all of them: anything unusable lands as `f64::NAN` so the billing
//! engine can skip the record and report it instead of the transport
//! layer rejecting the whole batch.

/// Default for missing numeric fields: the not-a-number sentinel.
pub fn nan() -> f64 {
    f64::NAN
}

/// f64 that tolerates numeric strings and garbage on deserialization.
///
/// - JSON number -> the value
/// - numeric string ("30", "12.5") -> parsed value
/// - anything else (null, "abc", true, objects) -> `f64::NAN`
///
/// Serialization is plain f64 (serde_json writes non-finite as null).
pub mod lenient_f64 {
    use serde::de::{self, Visitor};
    use serde::{Deserializer, Serializer};
    use std::fmt;

    pub fn serialize<S>(value: &f64, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_f64(*value)
    }

    pub fn deserialize<'de, D>(d: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct LenientVisitor;

        impl<'de> Visitor<'de> for LenientVisitor {
            type Value = f64;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a number or numeric string")
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(value)
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(value as f64)
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(value as f64)
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(value.trim().parse::<f64>().unwrap_or(f64::NAN))
            }

            fn visit_bool<E>(self, _value: bool) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(f64::NAN)
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(f64::NAN)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(f64::NAN)
            }

            fn visit_some<D>(self, d: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                d.deserialize_any(LenientVisitor)
            }

            fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
            where
                M: de::MapAccess<'de>,
            {
                // Drain so the deserializer stays consistent
                while map
                    .next_entry::<de::IgnoredAny, de::IgnoredAny>()?
                    .is_some()
                {}
                Ok(f64::NAN)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                while seq.next_element::<de::IgnoredAny>()?.is_some() {}
                Ok(f64::NAN)
            }
        }

        d.deserialize_any(LenientVisitor)
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize)]
    struct Probe {
        #[serde(with = "super::lenient_f64", default = "super::nan")]
        value: f64,
    }

    #[test]
    fn test_number_passthrough() {
        let p: Probe = serde_json::from_str(r#"{"value": 12.5}"#).unwrap();
        assert_eq!(p.value, 12.5);

        let p: Probe = serde_json::from_str(r#"{"value": 30}"#).unwrap();
        assert_eq!(p.value, 30.0);
    }

    #[test]
    fn test_numeric_string() {
        let p: Probe = serde_json::from_str(r#"{"value": "12.5"}"#).unwrap();
        assert_eq!(p.value, 12.5);

        let p: Probe = serde_json::from_str(r#"{"value": " 30 "}"#).unwrap();
        assert_eq!(p.value, 30.0);
    }

    #[test]
    fn test_garbage_string_is_nan() {
        let p: Probe = serde_json::from_str(r#"{"value": "abc"}"#).unwrap();
        assert!(p.value.is_nan());

        let p: Probe = serde_json::from_str(r#"{"value": ""}"#).unwrap();
        assert!(p.value.is_nan());
    }

    #[test]
    fn test_null_is_nan() {
        let p: Probe = serde_json::from_str(r#"{"value": null}"#).unwrap();
        assert!(p.value.is_nan());
    }

    #[test]
    fn test_missing_is_nan() {
        let p: Probe = serde_json::from_str(r#"{}"#).unwrap();
        assert!(p.value.is_nan());
    }

    #[test]
    fn test_bool_and_object_are_nan() {
        let p: Probe = serde_json::from_str(r#"{"value": true}"#).unwrap();
        assert!(p.value.is_nan());

        let p: Probe = serde_json::from_str(r#"{"value": {"litres": 5}}"#).unwrap();
        assert!(p.value.is_nan());

        let p: Probe = serde_json::from_str(r#"{"value": [1, 2]}"#).unwrap();
        assert!(p.value.is_nan());
    }

    #[test]
    fn test_nan_serializes_as_null() {
        let p = Probe { value: f64::NAN };
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"{"value":null}"#);
    }

    #[test]
    fn test_finite_serializes_as_number() {
        let p = Probe { value: 42.5 };
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"{"value":42.5}"#);
    }
}
