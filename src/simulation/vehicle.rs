//! Vehicle behaviour at the intersection
//!
//! A vehicle only ever looks at the light of the road it is assigned to.
//! Emergency vehicles ignore the light entirely.

use super::types::{LightState, RoadId, VehicleAction};

/// A vehicle waiting at (or passing through) the intersection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    name: String,
    road: RoadId,
    is_emergency: bool,
}

/// The outcome of evaluating one vehicle against a light
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionReport {
    pub vehicle: String,
    pub road: RoadId,
    pub action: VehicleAction,
    pub emergency: bool,
    /// Emergency vehicle moving against a RED or YELLOW light
    pub overrode_light: bool,
}

impl Vehicle {
    pub fn new(name: impl Into<String>, road: RoadId, is_emergency: bool) -> Self {
        Self {
            name: name.into(),
            road,
            is_emergency,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn road(&self) -> RoadId {
        self.road
    }

    pub fn is_emergency(&self) -> bool {
        self.is_emergency
    }

    /// Decide what this vehicle does given its road's light
    pub fn act(&self, light: LightState) -> VehicleAction {
        if self.is_emergency {
            return VehicleAction::Moving;
        }

        match light {
            LightState::Green => VehicleAction::Moving,
            LightState::Yellow => VehicleAction::SlowingDown,
            LightState::Red => VehicleAction::Stopped,
        }
    }

    /// Evaluate against a light and package the result for reporting
    pub fn report(&self, light: LightState) -> ActionReport {
        ActionReport {
            vehicle: self.name.clone(),
            road: self.road,
            action: self.act(light),
            emergency: self.is_emergency,
            overrode_light: self.is_emergency && light != LightState::Green,
        }
    }

    /// Report used when lights are not being respected at all
    pub fn report_unrestricted(&self) -> ActionReport {
        ActionReport {
            vehicle: self.name.clone(),
            road: self.road,
            action: VehicleAction::Moving,
            emergency: self.is_emergency,
            overrode_light: false,
        }
    }
}
