//! Read-only setup field resolution

use serde_json::Value;

use crate::config::SetupFormatter;

/// Resolved setup field value.
///
/// Change detection compares the raw value; the text is what lands on the
/// mimic. A change additionally raises a transient "changed" highlight,
/// applied by the render adapter.
#[derive(Debug, Clone, PartialEq)]
pub struct SetupReading {
    /// Raw value as polled
    pub raw: Value,
    /// Displayed text, after the optional formatter
    pub text: String,
}

/// Resolve a setup field value. Null is "no data this cycle".
pub fn resolve_setup(raw: &Value, format: Option<SetupFormatter>) -> Option<SetupReading> {
    if raw.is_null() {
        return None;
    }
    let text = match format {
        Some(format) => format(raw),
        None => default_text(raw),
    };
    Some(SetupReading {
        raw: raw.clone(),
        text,
    })
}

/// Default rendering: strings bare, everything else as JSON.
fn default_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
