//! Pump state resolution

use crate::snapshot::PumpTag;

/// Display state of a pump. Exactly one of three mutually exclusive
/// states; alarm dominates run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PumpState {
    Run,
    Stop,
    Alarm,
}

impl PumpState {
    /// Style class carried on the element for this state.
    pub fn css_class(&self) -> &'static str {
        match self {
            PumpState::Run => "state-run",
            PumpState::Stop => "state-stop",
            PumpState::Alarm => "state-alarm",
        }
    }
}

/// Resolve a pump tag, priority alarm > run > stop.
pub fn resolve_pump(tag: &PumpTag) -> PumpState {
    if tag.alarm {
        PumpState::Alarm
    } else if tag.run {
        PumpState::Run
    } else {
        PumpState::Stop
    }
}
