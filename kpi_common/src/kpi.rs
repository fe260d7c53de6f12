//! KPI keys and the snapshot map handed to the renderer.
//!
//! A `KpiSnapshot` holds pre-formatted display strings ("50,000+", "$100 billion")
//! keyed by KPI name. The snapshot is produced by whatever reporting backend computes
//! the figures; the renderer only reads it.
use std::collections::HashMap;
use std::io::Read;

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum_macros::{AsRefStr, Display, EnumString};

use crate::error::FragmentError;

/// KPIs consumed by the live-trading fragment.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    Hash,
    Eq,
    PartialEq,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum KpiKey {
    /// Number of live algorithms hosted so far.
    LiveAlgorithmsCount,
    /// Total volume traded through the live servers.
    VolumeTraded,
}

/// Trait providing JSON parsing for KPI snapshots.
pub trait SnapshotParser: Sized {
    /// Parses a snapshot from a reader containing a single JSON object.
    ///
    /// String values are kept verbatim, numbers keep their JSON text and `null`
    /// entries are skipped. Any other value type is rejected.
    fn parse_from_reader<R: Read>(reader: R) -> Result<Self, FragmentError>;
}

/// Pre-formatted KPI values keyed by KPI name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KpiSnapshot {
    values: HashMap<String, String>,
}

impl KpiSnapshot {
    /// Creates an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, handy for constructing snapshots inline.
    pub fn with(mut self, key: KpiKey, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Sets the display value for `key`, replacing any previous one.
    pub fn insert(&mut self, key: KpiKey, value: impl Into<String>) {
        self.values.insert(key.to_string(), value.into());
    }

    /// Display value for `key`, or `None` when it is absent or empty.
    pub fn get(&self, key: KpiKey) -> Option<&str> {
        self.values
            .get(key.as_ref())
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Raw lookup by name, including entries the fragment does not use.
    pub fn get_by_name(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Number of entries in the snapshot.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the snapshot has no entries.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<HashMap<String, String>> for KpiSnapshot {
    fn from(values: HashMap<String, String>) -> Self {
        Self { values }
    }
}

impl SnapshotParser for KpiSnapshot {
    fn parse_from_reader<R: Read>(reader: R) -> Result<Self, FragmentError> {
        let document: Value = serde_json::from_reader(reader)?;
        let Value::Object(entries) = document else {
            return Err(FragmentError::Format(
                "KPI document must be a JSON object".to_string(),
            ));
        };

        let mut values = HashMap::with_capacity(entries.len());
        for (name, value) in entries {
            match value {
                Value::String(text) => {
                    values.insert(name, text);
                }
                Value::Number(number) => {
                    values.insert(name, number.to_string());
                }
                Value::Null => debug!("Skipping null KPI entry: {}", name),
                other => {
                    return Err(FragmentError::InvalidValue {
                        key: name,
                        reason: format!("expected string or number, got {}", json_type(&other)),
                    });
                }
            }
        }
        debug!("Loaded {} KPI entries", values.len());
        Ok(Self { values })
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn key_names_are_kebab_case() {
        assert_eq!(KpiKey::LiveAlgorithmsCount.to_string(), "live-algorithms-count");
        assert_eq!(KpiKey::VolumeTraded.as_ref(), "volume-traded");
        assert_eq!(KpiKey::from_str("volume-traded").unwrap(), KpiKey::VolumeTraded);
        assert!(KpiKey::from_str("volume_traded").is_err());
    }

    #[test]
    fn empty_values_read_as_absent() {
        let snapshot = KpiSnapshot::new()
            .with(KpiKey::LiveAlgorithmsCount, "")
            .with(KpiKey::VolumeTraded, "$100 billion");

        assert_eq!(snapshot.get(KpiKey::LiveAlgorithmsCount), None);
        assert_eq!(snapshot.get_by_name("live-algorithms-count"), Some(""));
        assert_eq!(snapshot.get(KpiKey::VolumeTraded), Some("$100 billion"));
    }

    #[test]
    fn whitespace_values_are_kept() {
        let snapshot = KpiSnapshot::new().with(KpiKey::LiveAlgorithmsCount, " ");
        assert_eq!(snapshot.get(KpiKey::LiveAlgorithmsCount), Some(" "));
    }

    #[test]
    fn parses_strings_numbers_and_nulls() {
        let json = r#"{
            "live-algorithms-count": 375000,
            "volume-traded": "$45 billion",
            "members": null,
            "uptime": "99.9%"
        }"#;
        let snapshot = KpiSnapshot::parse_from_reader(json.as_bytes()).unwrap();

        assert_eq!(snapshot.len(), 3);
        assert_eq!(snapshot.get(KpiKey::LiveAlgorithmsCount), Some("375000"));
        assert_eq!(snapshot.get(KpiKey::VolumeTraded), Some("$45 billion"));
        assert_eq!(snapshot.get_by_name("members"), None);
        assert_eq!(snapshot.get_by_name("uptime"), Some("99.9%"));
    }

    #[test]
    fn rejects_unsupported_value_types() {
        let err = KpiSnapshot::parse_from_reader(r#"{"volume-traded": [1, 2]}"#.as_bytes())
            .unwrap_err();
        match err {
            FragmentError::InvalidValue { key, reason } => {
                assert_eq!(key, "volume-traded");
                assert!(reason.contains("array"));
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let err = KpiSnapshot::parse_from_reader(r#"{"volume-traded": true}"#.as_bytes())
            .unwrap_err();
        assert!(matches!(err, FragmentError::InvalidValue { .. }));
    }

    #[test]
    fn rejects_non_object_documents() {
        let err = KpiSnapshot::parse_from_reader(r#"["50,000"]"#.as_bytes()).unwrap_err();
        assert!(matches!(err, FragmentError::Format(_)));

        let err = KpiSnapshot::parse_from_reader("{not json".as_bytes()).unwrap_err();
        assert!(matches!(err, FragmentError::SerdeJson(_)));
    }
}
