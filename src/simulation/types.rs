//! Core types for the intersection simulation
//!
//! These are plain value types shared by the lights, the vehicles and the
//! scheduler.

use std::fmt;

/// Identifier of a road approaching the intersection
/// This is a 0-based index into the scheduler's light sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoadId(pub usize);

impl RoadId {
    /// The 1-based road number shown in reports
    pub fn display_number(&self) -> usize {
        self.0 + 1
    }
}

/// State of a single traffic light
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LightState {
    #[default]
    Red,
    Yellow,
    Green,
}

impl fmt::Display for LightState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            LightState::Red => "RED",
            LightState::Yellow => "YELLOW",
            LightState::Green => "GREEN",
        };
        // pad() so width/alignment flags work in report columns
        f.pad(label)
    }
}

/// What a vehicle does in response to its road's light
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VehicleAction {
    Moving,
    SlowingDown,
    Stopped,
}

/// Which pass of a cycle a report was taken in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Active road is YELLOW, every other road RED
    Yellow,
    /// Active road is GREEN, every other road RED
    Green,
    /// The only pass of a single-phase cycle
    Single,
}

/// How the scheduler drives the lights each cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SimulationMode {
    /// Yellow pass then green pass on the active road
    #[default]
    Phased,
    /// Active road jumps straight to GREEN, vehicles evaluated once
    Basic,
    /// Lights are not consulted; every vehicle moves
    Advanced,
}

impl SimulationMode {
    pub fn respect_lights(&self) -> bool {
        !matches!(self, SimulationMode::Advanced)
    }
}
