//! Per-class state resolvers
//!
//! Pure functions, one per device class, that derive the canonical display
//! state from a raw tag value. The derived state is the unit of change
//! detection: the dispatcher caches it and re-renders only when it differs.

mod level;
mod pump;
mod sensor;
mod setup;
mod valve;

pub use level::{resolve_level, LevelState};
pub use pump::{resolve_pump, PumpState};
pub use sensor::{resolve_sensor, SensorReading};
pub use setup::{resolve_setup, SetupReading};
pub use valve::{resolve_valve, ValveCommand, ValvePosition, ValveState};

/// Canonical display state of one element, across all device classes.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayState {
    Pump(PumpState),
    Valve(ValveState),
    Sensor(SensorReading),
    Level(LevelState),
    Setup(SetupReading),
}
