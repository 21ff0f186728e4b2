//! Snapshot wire model
//!
//! One polled batch of tag values, partitioned into sub-maps by device
//! class. An absent sub-map or tag means "no data this cycle" and is a
//! no-op downstream, never an error.

use std::collections::HashMap;

use anyhow::{bail, Result};
use log::warn;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One polled batch of all current tag values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Snapshot {
    /// Pump tags keyed by identifier
    #[serde(default)]
    pub pumps: HashMap<String, PumpTag>,
    /// Valve tags keyed by identifier
    #[serde(default)]
    pub valves: HashMap<String, ValveTag>,
    /// Raw analog sensor values keyed by identifier
    #[serde(default)]
    pub sensors: HashMap<String, Value>,
    /// Level switch states keyed by identifier
    #[serde(default)]
    pub levels: HashMap<String, Value>,
    /// Setup parameter groups, `group -> field -> value`
    #[serde(default)]
    pub setups: HashMap<String, HashMap<String, Value>>,
}

/// Raw pump tag: run/alarm feedback bits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct PumpTag {
    #[serde(default, deserialize_with = "truthy")]
    pub run: bool,
    #[serde(default, deserialize_with = "truthy")]
    pub alarm: bool,
}

/// Raw valve tag: endstop feedbacks plus the open command bit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct ValveTag {
    #[serde(default, rename = "fbOpen", deserialize_with = "truthy")]
    pub fb_open: bool,
    #[serde(default, rename = "fbClose", deserialize_with = "truthy")]
    pub fb_close: bool,
    #[serde(default, rename = "cmdOpen", deserialize_with = "truthy")]
    pub cmd_open: bool,
}

impl Snapshot {
    /// Convert an arbitrary JSON payload into a snapshot, one entry at a
    /// time. A malformed entry is logged and dropped; one bad tag never
    /// fails the whole batch. Only a non-object payload is an error.
    pub fn from_value(payload: Value) -> Result<Self> {
        let Value::Object(root) = payload else {
            bail!("status payload is not a JSON object");
        };

        let mut snapshot = Snapshot::default();
        if let Some(value) = root.get("pumps") {
            snapshot.pumps = typed_entries(value, "pumps");
        }
        if let Some(value) = root.get("valves") {
            snapshot.valves = typed_entries(value, "valves");
        }
        if let Some(value) = root.get("sensors") {
            snapshot.sensors = typed_entries(value, "sensors");
        }
        if let Some(value) = root.get("levels") {
            snapshot.levels = typed_entries(value, "levels");
        }
        if let Some(value) = root.get("setups") {
            snapshot.setups = typed_entries(value, "setups");
        }
        Ok(snapshot)
    }

    /// True when no sub-map carries any tag.
    pub fn is_empty(&self) -> bool {
        self.pumps.is_empty()
            && self.valves.is_empty()
            && self.sensors.is_empty()
            && self.levels.is_empty()
            && self.setups.is_empty()
    }
}

/// Convert one class sub-map entry-by-entry, skipping entries that do not
/// deserialize into the expected tag shape.
fn typed_entries<T: DeserializeOwned>(value: &Value, class: &str) -> HashMap<String, T> {
    let Value::Object(entries) = value else {
        warn!("ignoring {} block: expected a JSON object", class);
        return HashMap::new();
    };

    entries
        .iter()
        .filter_map(|(id, raw)| match serde_json::from_value::<T>(raw.clone()) {
            Ok(tag) => Some((id.clone(), tag)),
            Err(e) => {
                warn!("skipping malformed {} entry {}: {}", class, id, e);
                None
            }
        })
        .collect()
}

/// PLC gateways emit booleans as `true/false` or as 0/1; treat both alike.
fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_truthy(&Value::deserialize(deserializer)?))
}

/// Truthiness of a raw JSON value: booleans as-is, numbers by != 0.
pub fn value_truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(false, |v| v != 0.0),
        _ => false,
    }
}

/// Numeric reading of a raw JSON value. Accepts numbers and numeric
/// strings (gateways occasionally stringify analog values); anything else,
/// including non-finite parses, is `None`.
pub fn value_as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}
