//! Field decoders for node payloads that treat a wrongly typed value as absent.
//!
//! The ledger is decoded as a whole, so a single odd field must not fail the decode. Each
//! helper first reads the raw JSON value and then decodes it into the target type, dropping it
//! (or the offending sequence element) on mismatch.

use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::Value;

/// `None` if the value does not decode as `T`.
pub(crate) fn option<'de, D, T>(d: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(d)?;
    Ok(T::deserialize(value).ok())
}

/// `T::default()` if the value does not decode as `T`.
pub(crate) fn or_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(d)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

/// Elements of an array that decode as `T`; empty if the value is not an array.
pub(crate) fn vec<'de, D, T>(d: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(option_vec(d)?.unwrap_or_default())
}

/// Like [`vec`], but `None` if the value is not an array.
pub(crate) fn option_vec<'de, D, T>(d: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let items = match Value::deserialize(d)? {
        Value::Array(items) => items,
        _ => return Ok(None),
    };
    Ok(Some(
        items
            .into_iter()
            .filter_map(|item| T::deserialize(item).ok())
            .collect(),
    ))
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Default, Deserialize)]
    struct Sample {
        #[serde(default, deserialize_with = "super::option")]
        name: Option<String>,

        #[serde(default, deserialize_with = "super::or_default")]
        kind: String,

        #[serde(default, deserialize_with = "super::vec")]
        counts: Vec<u32>,

        #[serde(default, deserialize_with = "super::option_vec")]
        tags: Option<Vec<String>>,
    }

    #[test]
    fn test_well_typed_values() {
        let sample: Sample = serde_json::from_value(json!({
            "name": "a",
            "kind": "b",
            "counts": [1, 2],
            "tags": ["x"]
        }))
        .unwrap();

        assert_eq!(sample.name.as_deref(), Some("a"));
        assert_eq!(sample.kind, "b");
        assert_eq!(sample.counts, vec![1, 2]);
        assert_eq!(sample.tags, Some(vec!["x".to_string()]));
    }

    #[test]
    fn test_wrongly_typed_values_dropped() {
        let sample: Sample = serde_json::from_value(json!({
            "name": 5,
            "kind": { "nested": true },
            "counts": { "0": 1 },
            "tags": "x"
        }))
        .unwrap();

        assert_eq!(sample.name, None);
        assert_eq!(sample.kind, "");
        assert!(sample.counts.is_empty());
        assert_eq!(sample.tags, None);
    }

    #[test]
    fn test_bad_elements_skipped() {
        let sample: Sample = serde_json::from_value(json!({
            "counts": [1, "two", 3, null],
            "tags": ["x", 1, "y"]
        }))
        .unwrap();

        assert_eq!(sample.counts, vec![1, 3]);
        assert_eq!(sample.tags, Some(vec!["x".to_string(), "y".to_string()]));
    }

    #[test]
    fn test_missing_and_null() {
        let sample: Sample = serde_json::from_value(json!({ "name": null })).unwrap();
        assert_eq!(sample.name, None);
        assert!(sample.counts.is_empty());
        assert_eq!(sample.tags, None);
    }
}
