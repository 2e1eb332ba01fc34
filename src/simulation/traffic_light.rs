//! Traffic light for a single road

use super::types::{LightState, RoadId};

/// The light controlling one road
#[derive(Debug, Clone)]
pub struct TrafficLight {
    pub road: RoadId,
    state: LightState,
}

impl TrafficLight {
    /// New lights start out RED
    pub fn new(road: RoadId) -> Self {
        Self {
            road,
            state: LightState::Red,
        }
    }

    pub fn set_state(&mut self, state: LightState) {
        self.state = state;
    }

    pub fn state(&self) -> LightState {
        self.state
    }
}
