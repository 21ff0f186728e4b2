//! Level switch resolution

use serde_json::Value;

use crate::snapshot::value_truthy;

/// Display state of a level switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelState {
    On,
    Off,
}

impl LevelState {
    pub fn css_class(&self) -> &'static str {
        match self {
            LevelState::On => "level-on",
            LevelState::Off => "level-off",
        }
    }
}

/// Resolve a raw level switch value. Null is "no data this cycle".
pub fn resolve_level(raw: &Value) -> Option<LevelState> {
    if raw.is_null() {
        return None;
    }
    Some(if value_truthy(raw) {
        LevelState::On
    } else {
        LevelState::Off
    })
}
