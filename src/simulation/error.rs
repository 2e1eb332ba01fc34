//! Errors raised while building or feeding the simulation

use std::fmt;

/// Reasons a configuration is rejected before any cycle runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The intersection needs at least one road
    NoRoads { num_roads: i64 },
    NegativeVehicleCount { num_vehicles: i64 },
    NegativeCycleCount { num_cycles: i64 },
    EmptyVehicleName { position: usize },
    RoadOutOfRange {
        vehicle: String,
        road_index: i64,
        num_roads: i64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::NoRoads { num_roads } => {
                write!(f, "number of roads must be at least 1, got {}", num_roads)
            }
            ConfigError::NegativeVehicleCount { num_vehicles } => {
                write!(f, "number of vehicles cannot be negative, got {}", num_vehicles)
            }
            ConfigError::NegativeCycleCount { num_cycles } => {
                write!(f, "number of cycles cannot be negative, got {}", num_cycles)
            }
            ConfigError::EmptyVehicleName { position } => {
                write!(f, "vehicle #{} has an empty name", position + 1)
            }
            ConfigError::RoadOutOfRange {
                vehicle,
                road_index,
                num_roads,
            } => write!(
                f,
                "vehicle '{}' is assigned to road index {} but only indices 0..{} exist",
                vehicle, road_index, num_roads
            ),
        }
    }
}

/// Every failure the simulation can report. None of them are retryable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    InvalidConfiguration(ConfigError),
    /// A token could not be read as the expected kind of value
    InvalidInput { field: String, token: String },
    /// Input ended before all fields were read
    UnexpectedEof { field: String },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SimError::InvalidConfiguration(reason) => {
                write!(f, "invalid configuration: {}", reason)
            }
            SimError::InvalidInput { field, token } => {
                write!(f, "invalid input for {}: '{}'", field, token)
            }
            SimError::UnexpectedEof { field } => {
                write!(f, "input ended while reading {}", field)
            }
        }
    }
}

impl std::error::Error for SimError {}

impl From<ConfigError> for SimError {
    fn from(reason: ConfigError) -> Self {
        SimError::InvalidConfiguration(reason)
    }
}
