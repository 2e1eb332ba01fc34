//! Standalone intersection simulation module
//!
//! This module contains the light/vehicle rules and the cycle scheduler.
//! It knows nothing about how configuration is read or how reports are
//! printed; see [`crate::console`] for that.

mod config;
mod error;
mod scheduler;
mod traffic_light;
mod types;
mod vehicle;

pub use config::{SimConfig, VehicleSpec};
pub use error::{ConfigError, SimError};
pub use scheduler::{CycleReport, IntersectionScheduler, PhaseReport, SimulationSummary};
pub use traffic_light::TrafficLight;
pub use types::{LightState, Phase, RoadId, SimulationMode, VehicleAction};
pub use vehicle::{ActionReport, Vehicle};
