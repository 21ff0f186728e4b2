//! Device map configuration
//!
//! Static enumerations of every tag the mimic knows how to render, fixed
//! at build time. The maps are the exhaustive render list: snapshot tags
//! not declared here are ignored, declared tags missing from a snapshot
//! are skipped for that cycle.

mod defaults;

pub use defaults::default_plant;

use serde_json::Value;

/// Formatter for a setup field's displayed text.
pub type SetupFormatter = fn(&Value) -> String;

/// Display configuration for one analog sensor.
///
/// `scale` converts the raw fixed-point reading into engineering units
/// (`engineering = raw * scale`). The legacy PLC convention is one
/// implicit decimal digit, i.e. a scale of 0.1, with a handful of sensors
/// reporting engineering units directly at scale 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorDisplay {
    /// Decimal places shown on the mimic
    pub precision: usize,
    /// Engineering units per raw count
    pub scale: f64,
}

impl SensorDisplay {
    /// Fixed-point reading with one implicit decimal digit.
    pub const fn scaled(precision: usize) -> Self {
        Self {
            precision,
            scale: 0.1,
        }
    }

    /// Reading already in engineering units.
    pub const fn unscaled(precision: usize) -> Self {
        Self {
            precision,
            scale: 1.0,
        }
    }
}

/// Wiring of one read-only setup field: a target element bound to a nested
/// path inside the `setups` sub-map, with an optional formatter.
#[derive(Debug, Clone)]
pub struct SetupBinding {
    /// Element identifier the value is written to
    pub element: String,
    /// Setup group key, e.g. `PT131`
    pub group: String,
    /// Field key inside the group, e.g. `min`
    pub field: String,
    /// Optional display formatter; default is the bare value
    pub format: Option<SetupFormatter>,
}

impl SetupBinding {
    pub fn new(element: &str, group: &str, field: &str) -> Self {
        Self {
            element: element.to_string(),
            group: group.to_string(),
            field: field.to_string(),
            format: None,
        }
    }

    pub fn with_format(mut self, format: SetupFormatter) -> Self {
        self.format = Some(format);
        self
    }
}

/// The full set of tags rendered by one mimic layout.
///
/// Declaration order is dispatch order; it carries no semantics but keeps
/// update passes deterministic.
#[derive(Debug, Clone, Default)]
pub struct DeviceMap {
    pumps: Vec<String>,
    valves: Vec<String>,
    sensors: Vec<(String, SensorDisplay)>,
    levels: Vec<String>,
    setups: Vec<SetupBinding>,
}

impl DeviceMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pumps<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.pumps.extend(ids.into_iter().map(Into::into));
        self
    }

    pub fn with_valves<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.valves.extend(ids.into_iter().map(Into::into));
        self
    }

    pub fn with_sensor(mut self, id: &str, display: SensorDisplay) -> Self {
        self.sensors.push((id.to_string(), display));
        self
    }

    pub fn with_levels<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.levels.extend(ids.into_iter().map(Into::into));
        self
    }

    pub fn with_setup(mut self, binding: SetupBinding) -> Self {
        self.setups.push(binding);
        self
    }

    pub fn pumps(&self) -> &[String] {
        &self.pumps
    }

    pub fn valves(&self) -> &[String] {
        &self.valves
    }

    pub fn sensors(&self) -> &[(String, SensorDisplay)] {
        &self.sensors
    }

    pub fn levels(&self) -> &[String] {
        &self.levels
    }

    pub fn setups(&self) -> &[SetupBinding] {
        &self.setups
    }

    /// Every element identifier this map can address, in dispatch order.
    pub fn element_ids(&self) -> impl Iterator<Item = &str> {
        self.pumps
            .iter()
            .map(String::as_str)
            .chain(self.valves.iter().map(String::as_str))
            .chain(self.sensors.iter().map(|(id, _)| id.as_str()))
            .chain(self.levels.iter().map(String::as_str))
            .chain(self.setups.iter().map(|b| b.element.as_str()))
    }

    /// Total number of declared tags across all classes.
    pub fn len(&self) -> usize {
        self.pumps.len()
            + self.valves.len()
            + self.sensors.len()
            + self.levels.len()
            + self.setups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
