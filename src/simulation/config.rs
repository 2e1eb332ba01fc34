//! Simulation configuration as handed over by the input layer
//!
//! Values are kept exactly as read (signed integers included) so that
//! validation can reject them with a precise reason instead of the input
//! layer silently wrapping or truncating them.

use super::error::ConfigError;
use super::types::{RoadId, SimulationMode};
use super::vehicle::Vehicle;

/// One vehicle as described by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleSpec {
    pub name: String,
    pub road_index: i64,
    pub is_emergency: bool,
}

impl VehicleSpec {
    pub fn new(name: impl Into<String>, road_index: i64, is_emergency: bool) -> Self {
        Self {
            name: name.into(),
            road_index,
            is_emergency,
        }
    }
}

/// Everything needed to build a scheduler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    pub num_roads: i64,
    pub vehicles: Vec<VehicleSpec>,
    pub mode: SimulationMode,
}

impl SimConfig {
    pub fn new(num_roads: i64, vehicles: Vec<VehicleSpec>) -> Self {
        Self {
            num_roads,
            vehicles,
            mode: SimulationMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: SimulationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Check the configuration, returning the road count and the built vehicles
    pub fn validate(&self) -> Result<(usize, Vec<Vehicle>), ConfigError> {
        if self.num_roads <= 0 {
            return Err(ConfigError::NoRoads {
                num_roads: self.num_roads,
            });
        }

        let vehicles = self
            .vehicles
            .iter()
            .enumerate()
            .map(|(position, spec)| self.build_vehicle(position, spec))
            .collect::<Result<Vec<_>, _>>()?;

        Ok((self.num_roads as usize, vehicles))
    }

    fn build_vehicle(&self, position: usize, spec: &VehicleSpec) -> Result<Vehicle, ConfigError> {
        if spec.name.trim().is_empty() {
            return Err(ConfigError::EmptyVehicleName { position });
        }

        if spec.road_index < 0 || spec.road_index >= self.num_roads {
            return Err(ConfigError::RoadOutOfRange {
                vehicle: spec.name.clone(),
                road_index: spec.road_index,
                num_roads: self.num_roads,
            });
        }

        Ok(Vehicle::new(
            spec.name.clone(),
            RoadId(spec.road_index as usize),
            spec.is_emergency,
        ))
    }
}
