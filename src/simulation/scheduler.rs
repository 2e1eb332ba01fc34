//! Intersection scheduler that ties lights and vehicles together
//!
//! The scheduler owns one light per road and every vehicle. Each cycle it
//! picks the active road round-robin, moves the lights, and evaluates every
//! vehicle against the light of its own road.

use log::{debug, info};

use super::config::SimConfig;
use super::error::SimError;
use super::traffic_light::TrafficLight;
use super::types::{LightState, Phase, RoadId, SimulationMode};
use super::vehicle::{ActionReport, Vehicle};

/// Light states and vehicle actions captured during one pass of a cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseReport {
    pub phase: Phase,
    /// Every road in index order. Empty when lights are not consulted.
    pub lights: Vec<(RoadId, LightState)>,
    /// Every vehicle in insertion order
    pub actions: Vec<ActionReport>,
}

/// Everything that happened in a single cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleReport {
    /// 1-based cycle number
    pub cycle: usize,
    /// Road whose light advanced this cycle, if any
    pub active_road: Option<RoadId>,
    pub phases: Vec<PhaseReport>,
}

/// Totals for a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SimulationSummary {
    pub roads: usize,
    pub vehicles: usize,
    pub emergency_vehicles: usize,
    pub cycles_run: usize,
}

/// Drives the lights of the intersection and reports what every vehicle does
#[derive(Debug, Clone)]
pub struct IntersectionScheduler {
    lights: Vec<TrafficLight>,
    vehicles: Vec<Vehicle>,
    mode: SimulationMode,
    /// Number of cycles already run, also the number of the last one
    cycles_run: usize,
}

impl IntersectionScheduler {
    /// Build a scheduler, rejecting configurations that would index out of range
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        let (num_roads, vehicles) = config.validate()?;

        let lights = (0..num_roads).map(|i| TrafficLight::new(RoadId(i))).collect();

        info!(
            "Intersection ready: {} roads, {} vehicles, mode {:?}",
            num_roads,
            vehicles.len(),
            config.mode
        );

        Ok(Self {
            lights,
            vehicles,
            mode: config.mode,
            cycles_run: 0,
        })
    }

    pub fn mode(&self) -> SimulationMode {
        self.mode
    }

    pub fn road_count(&self) -> usize {
        self.lights.len()
    }

    pub fn vehicle_count(&self) -> usize {
        self.vehicles.len()
    }

    pub fn cycles_run(&self) -> usize {
        self.cycles_run
    }

    pub fn lights(&self) -> &[TrafficLight] {
        &self.lights
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Current state of a road's light, `None` for an unknown road
    pub fn light_state(&self, road: RoadId) -> Option<LightState> {
        self.lights.get(road.0).map(TrafficLight::state)
    }

    /// Road that becomes active on the given 1-based cycle number.
    /// Cycle 1 activates road index 0.
    pub fn active_road_for(&self, cycle: usize) -> RoadId {
        // lights is never empty, construction rejects zero roads
        RoadId(cycle.saturating_sub(1) % self.lights.len())
    }

    /// Run `n` cycles, continuing the rotation from any earlier runs
    pub fn run_cycles(&mut self, n: usize) -> Vec<CycleReport> {
        (0..n).map(|_| self.step_cycle()).collect()
    }

    /// Run the next cycle
    pub fn step_cycle(&mut self) -> CycleReport {
        self.cycles_run += 1;
        let cycle = self.cycles_run;

        let report = match self.mode {
            SimulationMode::Phased => {
                let active = self.active_road_for(cycle);
                debug!("Cycle {}: road {} active", cycle, active.display_number());

                self.set_active(active, LightState::Yellow);
                let yellow = self.snapshot(Phase::Yellow);

                self.set_active(active, LightState::Green);
                let green = self.snapshot(Phase::Green);

                CycleReport {
                    cycle,
                    active_road: Some(active),
                    phases: vec![yellow, green],
                }
            }
            SimulationMode::Basic => {
                let active = self.active_road_for(cycle);
                debug!("Cycle {}: road {} active", cycle, active.display_number());

                self.set_active(active, LightState::Green);

                CycleReport {
                    cycle,
                    active_road: Some(active),
                    phases: vec![self.snapshot(Phase::Single)],
                }
            }
            SimulationMode::Advanced => CycleReport {
                cycle,
                active_road: None,
                phases: vec![self.snapshot(Phase::Single)],
            },
        };

        for action in report.phases.iter().flat_map(|p| &p.actions) {
            if action.overrode_light {
                debug!(
                    "{} overrides the light on road {}",
                    action.vehicle,
                    action.road.display_number()
                );
            }
        }

        report
    }

    /// Capture the current lights and every vehicle's action without changing state
    pub fn snapshot(&self, phase: Phase) -> PhaseReport {
        if !self.mode.respect_lights() {
            return PhaseReport {
                phase,
                lights: Vec::new(),
                actions: self
                    .vehicles
                    .iter()
                    .map(Vehicle::report_unrestricted)
                    .collect(),
            };
        }

        let lights = self
            .lights
            .iter()
            .map(|light| (light.road, light.state()))
            .collect();

        let actions = self
            .vehicles
            .iter()
            .map(|vehicle| vehicle.report(self.lights[vehicle.road().0].state()))
            .collect();

        PhaseReport {
            phase,
            lights,
            actions,
        }
    }

    /// Give the active road `state` and turn every other road RED
    fn set_active(&mut self, active: RoadId, state: LightState) {
        for light in &mut self.lights {
            if light.road == active {
                light.set_state(state);
            } else {
                light.set_state(LightState::Red);
            }
        }
    }

    pub fn summary(&self) -> SimulationSummary {
        SimulationSummary {
            roads: self.road_count(),
            vehicles: self.vehicle_count(),
            emergency_vehicles: self.vehicles.iter().filter(|v| v.is_emergency()).count(),
            cycles_run: self.cycles_run,
        }
    }
}
