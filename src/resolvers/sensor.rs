//! Analog sensor resolution

use serde_json::Value;

use crate::config::SensorDisplay;
use crate::snapshot::value_as_f64;

/// Resolved sensor reading.
///
/// Change detection compares the raw pre-scaling value: two raw values
/// that round to the same display text are still distinct states, and a
/// repeated raw value never re-renders.
#[derive(Debug, Clone, PartialEq)]
pub struct SensorReading {
    /// Raw value as polled, before scaling
    pub raw: f64,
    /// Formatted engineering value shown on the mimic
    pub text: String,
}

/// Resolve a raw sensor value against its display configuration.
/// Non-numeric values are skipped.
pub fn resolve_sensor(raw: &Value, display: &SensorDisplay) -> Option<SensorReading> {
    let raw = value_as_f64(raw)?;
    let engineering = raw * display.scale;
    Some(SensorReading {
        raw,
        text: format!("{:.*}", display.precision, engineering),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fixed_point_sensor_scales_down() {
        let reading = resolve_sensor(&json!(275), &SensorDisplay::scaled(2)).unwrap();
        assert_eq!(reading.text, "27.50");
        assert_eq!(reading.raw, 275.0);
    }

    #[test]
    fn test_unscaled_sensor_displays_raw_value() {
        let reading = resolve_sensor(&json!(5), &SensorDisplay::unscaled(0)).unwrap();
        assert_eq!(reading.text, "5");
        assert_eq!(reading.raw, 5.0);
    }

    #[test]
    fn test_precision_rounds_display_only() {
        let a = resolve_sensor(&json!(250), &SensorDisplay::scaled(0)).unwrap();
        let b = resolve_sensor(&json!(251), &SensorDisplay::scaled(0)).unwrap();
        assert_eq!(a.text, "25");
        assert_eq!(b.text, "25");
        // Same display text, different raw value: still a state change.
        assert_ne!(a, b);
    }

    #[test]
    fn test_numeric_string_is_coerced() {
        let reading = resolve_sensor(&json!("42.5"), &SensorDisplay::unscaled(1)).unwrap();
        assert_eq!(reading.text, "42.5");
    }

    #[test]
    fn test_non_numeric_value_is_skipped() {
        assert!(resolve_sensor(&json!(null), &SensorDisplay::scaled(2)).is_none());
        assert!(resolve_sensor(&json!("n/a"), &SensorDisplay::scaled(2)).is_none());
        assert!(resolve_sensor(&json!({"v": 1}), &SensorDisplay::scaled(2)).is_none());
    }
}
