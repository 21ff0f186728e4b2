//! Snapshot dispatcher
//!
//! Drives one polled snapshot through the device maps: resolve each
//! declared tag, compare against the last rendered state, and only on a
//! difference render and then cache. Render and cache update are atomic
//! from the caller's perspective: a state is cached only after its render
//! succeeded, and a skipped render leaves the cache untouched.

use crate::config::DeviceMap;
use crate::render::RenderAdapter;
use crate::resolvers::{
    resolve_level, resolve_pump, resolve_sensor, resolve_setup, resolve_valve, DisplayState,
};
use crate::snapshot::Snapshot;

use super::state_cache::StateCache;

/// Maps one snapshot onto the declared elements, class by class, in
/// declaration order.
pub struct SnapshotDispatcher {
    map: DeviceMap,
    cache: StateCache,
    adapter: RenderAdapter,
}

impl SnapshotDispatcher {
    pub fn new(map: DeviceMap, adapter: RenderAdapter) -> Self {
        Self {
            map,
            cache: StateCache::new(),
            adapter,
        }
    }

    /// Process one snapshot completely. Tags missing from the snapshot and
    /// identifiers without an element on the current layout are skipped;
    /// neither disturbs the cache.
    pub fn dispatch(&mut self, snapshot: &Snapshot) {
        let Self { map, cache, adapter } = self;

        for id in map.pumps() {
            if let Some(tag) = snapshot.pumps.get(id) {
                commit(cache, adapter, id, DisplayState::Pump(resolve_pump(tag)));
            }
        }

        for id in map.valves() {
            if let Some(tag) = snapshot.valves.get(id) {
                commit(cache, adapter, id, DisplayState::Valve(resolve_valve(tag)));
            }
        }

        for (id, display) in map.sensors() {
            let Some(raw) = snapshot.sensors.get(id) else {
                continue;
            };
            if let Some(reading) = resolve_sensor(raw, display) {
                commit(cache, adapter, id, DisplayState::Sensor(reading));
            }
        }

        for id in map.levels() {
            let Some(raw) = snapshot.levels.get(id) else {
                continue;
            };
            if let Some(level) = resolve_level(raw) {
                commit(cache, adapter, id, DisplayState::Level(level));
            }
        }

        for binding in map.setups() {
            let raw = snapshot
                .setups
                .get(&binding.group)
                .and_then(|group| group.get(&binding.field));
            let Some(raw) = raw else {
                continue;
            };
            if let Some(reading) = resolve_setup(raw, binding.format) {
                commit(cache, adapter, &binding.element, DisplayState::Setup(reading));
            }
        }
    }

    pub fn device_map(&self) -> &DeviceMap {
        &self.map
    }

    pub fn cache(&self) -> &StateCache {
        &self.cache
    }
}

/// Render-then-cache for one element, suppressing unchanged states.
fn commit(cache: &mut StateCache, adapter: &mut RenderAdapter, id: &str, state: DisplayState) {
    if cache.matches(id, &state) {
        return;
    }
    if adapter.apply(id, &state) {
        cache.store(id, state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SensorDisplay, SetupBinding};
    use crate::elements::{MemoryElement, MemoryRegistry};
    use crate::resolvers::PumpState;
    use crate::snapshot::PumpTag;
    use serde_json::json;
    use std::sync::Arc;

    fn dispatcher_for(map: DeviceMap) -> (SnapshotDispatcher, Arc<MemoryRegistry>) {
        let registry = Arc::new(MemoryRegistry::new());
        registry.seed(&map);
        let adapter = RenderAdapter::new(registry.clone());
        (SnapshotDispatcher::new(map, adapter), registry)
    }

    fn element(registry: &MemoryRegistry, id: &str) -> Arc<MemoryElement> {
        registry.element(id).unwrap()
    }

    fn pump_snapshot(id: &str, run: bool, alarm: bool) -> Snapshot {
        let mut snapshot = Snapshot::default();
        snapshot.pumps.insert(id.to_string(), PumpTag { run, alarm });
        snapshot
    }

    #[test]
    fn test_unchanged_state_renders_once() {
        let map = DeviceMap::new().with_pumps(["PK011"]);
        let (mut dispatcher, registry) = dispatcher_for(map);
        let el = element(&registry, "PK011");

        dispatcher.dispatch(&pump_snapshot("PK011", true, false));
        let after_first = el.mutation_count();
        assert!(after_first > 0);

        dispatcher.dispatch(&pump_snapshot("PK011", true, false));
        dispatcher.dispatch(&pump_snapshot("PK011", true, false));
        assert_eq!(el.mutation_count(), after_first);
    }

    #[test]
    fn test_state_change_renders_again() {
        let map = DeviceMap::new().with_pumps(["PK011"]);
        let (mut dispatcher, registry) = dispatcher_for(map);
        let el = element(&registry, "PK011");

        dispatcher.dispatch(&pump_snapshot("PK011", true, false));
        assert!(el.has_class("state-run"));

        dispatcher.dispatch(&pump_snapshot("PK011", true, true));
        assert!(el.has_class("state-alarm"));
        assert_eq!(
            dispatcher.cache().get("PK011"),
            Some(&DisplayState::Pump(PumpState::Alarm))
        );
    }

    #[test]
    fn test_raw_value_drives_sensor_change_detection() {
        let map = DeviceMap::new().with_sensor("CIS151", SensorDisplay::scaled(0));
        let (mut dispatcher, registry) = dispatcher_for(map);
        let el = element(&registry, "CIS151");

        let mut snapshot = Snapshot::default();
        snapshot.sensors.insert("CIS151".to_string(), json!(250));
        dispatcher.dispatch(&snapshot);
        let after_first = el.mutation_count();
        assert_eq!(el.text(), "25");

        // 251 formats to the same "25" but is a different raw value, so
        // the adapter must run again.
        snapshot.sensors.insert("CIS151".to_string(), json!(251));
        dispatcher.dispatch(&snapshot);
        assert_eq!(el.text(), "25");
        assert_eq!(el.mutation_count(), after_first + 1);

        dispatcher.dispatch(&snapshot);
        assert_eq!(el.mutation_count(), after_first + 1);
    }

    #[test]
    fn test_missing_tag_leaves_state_untouched() {
        let map = DeviceMap::new().with_pumps(["PK011"]);
        let (mut dispatcher, registry) = dispatcher_for(map);
        let el = element(&registry, "PK011");

        dispatcher.dispatch(&pump_snapshot("PK011", true, false));
        let rendered = el.mutation_count();

        // Empty snapshot: no data this cycle, not a clear.
        dispatcher.dispatch(&Snapshot::default());
        assert_eq!(el.mutation_count(), rendered);
        assert!(el.has_class("state-run"));
        assert_eq!(
            dispatcher.cache().get("PK011"),
            Some(&DisplayState::Pump(PumpState::Run))
        );
    }

    #[test]
    fn test_unmapped_tags_are_ignored() {
        let map = DeviceMap::new().with_pumps(["PK011"]);
        let (mut dispatcher, _registry) = dispatcher_for(map);

        dispatcher.dispatch(&pump_snapshot("UNKNOWN", true, false));
        assert!(dispatcher.cache().is_empty());
    }

    #[test]
    fn test_missing_element_does_not_populate_cache() {
        // Mapped, present in the snapshot, but no element on this layout.
        let map = DeviceMap::new().with_pumps(["PK011"]);
        let registry = Arc::new(MemoryRegistry::new());
        let adapter = RenderAdapter::new(registry);
        let mut dispatcher = SnapshotDispatcher::new(map, adapter);

        dispatcher.dispatch(&pump_snapshot("PK011", true, false));
        assert!(dispatcher.cache().is_empty());
    }

    #[test]
    fn test_valve_composite_state_is_one_cache_entry() {
        let map = DeviceMap::new().with_valves(["VE111"]);
        let (mut dispatcher, registry) = dispatcher_for(map);
        let el = element(&registry, "VE111");

        let mut snapshot = Snapshot::default();
        snapshot.valves.insert(
            "VE111".to_string(),
            crate::snapshot::ValveTag {
                fb_open: true,
                fb_close: false,
                cmd_open: true,
            },
        );
        dispatcher.dispatch(&snapshot);
        assert_eq!(dispatcher.cache().len(), 1);
        let rendered = el.mutation_count();

        // Command flips, position holds: one state change, one render.
        snapshot.valves.get_mut("VE111").unwrap().cmd_open = false;
        dispatcher.dispatch(&snapshot);
        assert_eq!(dispatcher.cache().len(), 1);
        assert!(el.mutation_count() > rendered);
        assert!(el.has_class("cmd-close"));
        assert!(el.has_class("pos-full-open"));
    }

    #[tokio::test]
    async fn test_setup_field_dispatch() {
        let map = DeviceMap::new().with_setup(SetupBinding::new("PT131_MIN", "PT131", "min"));
        let (mut dispatcher, registry) = dispatcher_for(map);
        let el = element(&registry, "PT131_MIN");

        let mut snapshot = Snapshot::default();
        snapshot.setups.insert(
            "PT131".to_string(),
            [("min".to_string(), json!(2))].into_iter().collect(),
        );
        dispatcher.dispatch(&snapshot);
        assert_eq!(el.text(), "2");
        assert!(el.has_class("changed"));

        // Same value next cycle: no re-render, no highlight restart.
        let rendered = el.mutation_count();
        dispatcher.dispatch(&snapshot);
        assert_eq!(el.mutation_count(), rendered);
    }
}
