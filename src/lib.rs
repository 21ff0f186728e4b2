//! scada-mimic: a headless SCADA mimic updater
//!
//! Polls a factory status gateway on a fixed scan period, resolves every
//! declared device tag (pumps, valves, sensors, level switches, setup
//! fields) to a canonical display state, and touches the corresponding
//! display element only when that state changed since the last render.
//!
//! Transport and the rendering substrate are trait seams: implement
//! [`crate::core::StatusProvider`] for a different gateway and
//! [`crate::core::ElementRegistry`] to drive a real layout surface.

pub mod config;
pub mod core;
pub mod elements;
pub mod render;
pub mod resolvers;
pub mod snapshot;
pub mod sources;
pub mod ui;

// Re-export commonly used types
pub use config::{default_plant, DeviceMap, SensorDisplay, SetupBinding};
pub use crate::core::{ScanLoop, SnapshotDispatcher, StateCache, StatusProvider};
pub use render::RenderAdapter;
pub use snapshot::Snapshot;
