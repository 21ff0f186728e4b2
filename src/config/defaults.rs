//! Shipped plant layout
//!
//! The tag inventory of the clarifier/dosing plant mimic this crate was
//! built for. Identifiers double as element ids on the layout surface.

use super::{DeviceMap, SensorDisplay, SetupBinding};

/// Device map for the default plant layout.
pub fn default_plant() -> DeviceMap {
    DeviceMap::new()
        .with_pumps([
            "PK011", "PK012", "SP021", "SP022", //
            "MCT01", "MCT02", //
            "DP011", "DP012", "DP021", "DP022", //
            "PK121", "PK131", "PK1601", "PK1602", "PK191", //
            "DP121", "DP122", "DP151", "DP152",
        ])
        .with_valves([
            "VE111", "VE1211", "VE1212", //
            "VE1310", "VE1311", "VE1312", //
            "VE1321", "VE1322", //
            "VE1711", "VE1712", //
            "VE1801", "VE1601", //
            "VS1601", "VS171",
        ])
        .with_sensor("pHS011", SensorDisplay::scaled(2))
        .with_sensor("pHS131", SensorDisplay::scaled(2))
        .with_sensor("PT131", SensorDisplay::scaled(2))
        .with_sensor("PT151", SensorDisplay::scaled(2))
        .with_sensor("FT151", SensorDisplay::scaled(1))
        // Conductivity probes report engineering units directly
        .with_sensor("CIS151", SensorDisplay::unscaled(0))
        .with_sensor("PT1601", SensorDisplay::scaled(2))
        .with_sensor("PT162", SensorDisplay::scaled(2))
        .with_sensor("PT1602", SensorDisplay::scaled(2))
        .with_sensor("CIS180", SensorDisplay::unscaled(0))
        .with_sensor("FT180", SensorDisplay::scaled(1))
        .with_sensor("PK1601-Hz", SensorDisplay::scaled(1))
        .with_sensor("PK1602-Hz", SensorDisplay::scaled(1))
        .with_sensor("VS1601-%", SensorDisplay::scaled(0))
        .with_sensor("VS171-%", SensorDisplay::scaled(0))
        .with_levels(["LS011", "LS121", "LS131", "LS111", "LS181", "LS182"])
        .with_setup(SetupBinding::new("PT131_MIN", "PT131", "min"))
        .with_setup(SetupBinding::new("PT131_MAX", "PT131", "max"))
        .with_setup(SetupBinding::new("PT131_OFFSET", "PT131", "offset"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_plant_inventory() {
        let map = default_plant();
        assert_eq!(map.pumps().len(), 19);
        assert_eq!(map.valves().len(), 14);
        assert_eq!(map.sensors().len(), 15);
        assert_eq!(map.levels().len(), 6);
        assert_eq!(map.setups().len(), 3);
    }

    #[test]
    fn test_default_plant_sensor_scaling() {
        let map = default_plant();
        let display = |id: &str| {
            map.sensors()
                .iter()
                .find(|(sensor, _)| sensor == id)
                .map(|(_, d)| *d)
                .unwrap()
        };

        assert_eq!(display("PT131"), SensorDisplay::scaled(2));
        assert_eq!(display("FT151"), SensorDisplay::scaled(1));
        assert_eq!(display("CIS151"), SensorDisplay::unscaled(0));
        assert_eq!(display("CIS180"), SensorDisplay::unscaled(0));
        assert_eq!(display("VS171-%"), SensorDisplay::scaled(0));
    }

    #[test]
    fn test_default_plant_setup_bindings() {
        let map = default_plant();
        let binding = &map.setups()[0];
        assert_eq!(binding.element, "PT131_MIN");
        assert_eq!(binding.group, "PT131");
        assert_eq!(binding.field, "min");
        assert!(binding.format.is_none());
    }
}
