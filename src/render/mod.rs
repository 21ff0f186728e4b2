//! Render adapter
//!
//! Applies one resolved display state to one element: an exclusive class
//! swap for pumps, valves and level switches, a text write for sensors,
//! and a text write plus transient "changed" highlight for setup fields.
//! Applying the same state twice yields the same visible result.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use log::{debug, trace};
use tokio::task::JoinHandle;

use crate::core::{ElementRegistry, VisualElement};
use crate::resolvers::DisplayState;

/// Mutually exclusive pump state classes.
pub const PUMP_STATE_CLASSES: [&str; 3] = ["state-run", "state-stop", "state-alarm"];
/// Mutually exclusive valve position classes.
pub const VALVE_POSITION_CLASSES: [&str; 3] = ["pos-full-open", "pos-full-close", "pos-moving"];
/// Mutually exclusive valve command classes.
pub const VALVE_COMMAND_CLASSES: [&str; 2] = ["cmd-open", "cmd-close"];
/// Mutually exclusive level switch classes.
pub const LEVEL_STATE_CLASSES: [&str; 2] = ["level-on", "level-off"];
/// Transient highlight raised when a setup value changes.
pub const CHANGED_CLASS: &str = "changed";

/// How long the "changed" highlight stays up after the last change.
pub const DEFAULT_CHANGE_FLAG_WINDOW: Duration = Duration::from_millis(1500);

/// Applies display states to elements looked up in the registry.
///
/// Owns the per-element debounce timers for the "changed" highlight: a new
/// change within the window aborts the pending clear and restarts it, so
/// the flag drops a full window after the last change.
pub struct RenderAdapter {
    registry: Arc<dyn ElementRegistry>,
    flag_window: Duration,
    flag_timers: HashMap<String, JoinHandle<()>>,
}

impl RenderAdapter {
    pub fn new(registry: Arc<dyn ElementRegistry>) -> Self {
        Self {
            registry,
            flag_window: DEFAULT_CHANGE_FLAG_WINDOW,
            flag_timers: HashMap::new(),
        }
    }

    /// Override the "changed" highlight window.
    pub fn with_flag_window(mut self, window: Duration) -> Self {
        self.flag_window = window;
        self
    }

    /// Apply `state` to the element addressed by `id`.
    ///
    /// Returns false without touching anything when the layout has no such
    /// element; the caller must not cache the state in that case.
    pub fn apply(&mut self, id: &str, state: &DisplayState) -> bool {
        let Some(element) = self.registry.lookup(id) else {
            trace!("no element for {}, skipping", id);
            return false;
        };

        match state {
            DisplayState::Pump(pump) => {
                element.set_exclusive_class(&PUMP_STATE_CLASSES, pump.css_class());
            }
            DisplayState::Valve(valve) => {
                element.set_exclusive_class(&VALVE_POSITION_CLASSES, valve.position.css_class());
                element.set_exclusive_class(&VALVE_COMMAND_CLASSES, valve.command.css_class());
            }
            DisplayState::Sensor(reading) => {
                element.set_text(&reading.text);
            }
            DisplayState::Level(level) => {
                element.set_exclusive_class(&LEVEL_STATE_CLASSES, level.css_class());
            }
            DisplayState::Setup(reading) => {
                element.set_text(&reading.text);
                element.add_class(CHANGED_CLASS);
                self.restart_flag_timer(id, element);
            }
        }

        debug!("rendered {}: {:?}", id, state);
        true
    }

    /// Arm (or re-arm) the clear timer for an element's "changed" flag.
    fn restart_flag_timer(&mut self, id: &str, element: Arc<dyn VisualElement>) {
        if let Some(pending) = self.flag_timers.remove(id) {
            pending.abort();
        }

        let window = self.flag_window;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(window).await;
            element.remove_class(CHANGED_CLASS);
        });
        self.flag_timers.insert(id.to_string(), handle);
    }
}

impl Drop for RenderAdapter {
    fn drop(&mut self) {
        for handle in self.flag_timers.values() {
            handle.abort();
        }
    }
}
