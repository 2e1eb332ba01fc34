//! Scheduler behaviour tests
//!
//! Light rotation, vehicle rules and configuration checks.

use intersection_sim::simulation::{
    ConfigError, IntersectionScheduler, LightState, Phase, RoadId, SimConfig, SimError,
    SimulationMode, Vehicle, VehicleAction, VehicleSpec,
};

fn three_road_config() -> SimConfig {
    SimConfig::new(
        3,
        vec![
            VehicleSpec::new("Car", 0, false),
            VehicleSpec::new("Bike", 1, false),
            VehicleSpec::new("Ambulance", 2, true),
        ],
    )
}

fn actions_of(phase: &intersection_sim::simulation::PhaseReport) -> Vec<VehicleAction> {
    phase.actions.iter().map(|a| a.action).collect()
}

#[test]
fn test_regular_vehicle_follows_light() {
    let vehicle = Vehicle::new("Car", RoadId(0), false);
    assert_eq!(vehicle.act(LightState::Green), VehicleAction::Moving);
    assert_eq!(vehicle.act(LightState::Yellow), VehicleAction::SlowingDown);
    assert_eq!(vehicle.act(LightState::Red), VehicleAction::Stopped);
}

#[test]
fn test_emergency_vehicle_always_moves() {
    let vehicle = Vehicle::new("Ambulance", RoadId(1), true);
    for light in [LightState::Red, LightState::Yellow, LightState::Green] {
        assert_eq!(vehicle.act(light), VehicleAction::Moving);
    }

    assert!(vehicle.report(LightState::Red).overrode_light);
    assert!(vehicle.report(LightState::Yellow).overrode_light);
    assert!(!vehicle.report(LightState::Green).overrode_light);
}

#[test]
fn test_lights_start_red() {
    let scheduler = IntersectionScheduler::new(three_road_config()).expect("valid config");
    assert_eq!(scheduler.road_count(), 3);
    assert_eq!(scheduler.vehicle_count(), 3);
    for road in 0..3 {
        assert_eq!(scheduler.light_state(RoadId(road)), Some(LightState::Red));
    }
    assert_eq!(scheduler.light_state(RoadId(3)), None);
}

#[test]
fn test_three_road_scenario_first_cycle() {
    let mut scheduler = IntersectionScheduler::new(three_road_config()).expect("valid config");
    let reports = scheduler.run_cycles(1);
    assert_eq!(reports.len(), 1);

    let cycle = &reports[0];
    assert_eq!(cycle.cycle, 1);
    assert_eq!(cycle.active_road, Some(RoadId(0)));
    assert_eq!(cycle.phases.len(), 2);

    let yellow = &cycle.phases[0];
    assert_eq!(yellow.phase, Phase::Yellow);
    assert_eq!(
        yellow.lights,
        vec![
            (RoadId(0), LightState::Yellow),
            (RoadId(1), LightState::Red),
            (RoadId(2), LightState::Red),
        ]
    );
    assert_eq!(
        actions_of(yellow),
        vec![
            VehicleAction::SlowingDown,
            VehicleAction::Stopped,
            VehicleAction::Moving
        ]
    );

    let green = &cycle.phases[1];
    assert_eq!(green.phase, Phase::Green);
    assert_eq!(
        green.lights,
        vec![
            (RoadId(0), LightState::Green),
            (RoadId(1), LightState::Red),
            (RoadId(2), LightState::Red),
        ]
    );
    assert_eq!(
        actions_of(green),
        vec![
            VehicleAction::Moving,
            VehicleAction::Stopped,
            VehicleAction::Moving
        ]
    );
}

#[test]
fn test_rotation_is_periodic_in_road_count() {
    let mut scheduler = IntersectionScheduler::new(three_road_config()).expect("valid config");
    let reports = scheduler.run_cycles(7);

    for report in &reports {
        assert_eq!(report.active_road, Some(RoadId((report.cycle - 1) % 3)));
    }
    let cycles: Vec<usize> = reports.iter().map(|r| r.cycle).collect();
    assert_eq!(cycles, vec![1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(scheduler.cycles_run(), 7);
}

#[test]
fn test_rotation_continues_across_runs() {
    let mut scheduler = IntersectionScheduler::new(three_road_config()).expect("valid config");
    scheduler.run_cycles(2);
    let next = scheduler.step_cycle();
    assert_eq!(next.cycle, 3);
    assert_eq!(next.active_road, Some(RoadId(2)));

    let wrapped = scheduler.step_cycle();
    assert_eq!(wrapped.active_road, Some(RoadId(0)));
}

#[test]
fn test_at_most_one_non_red_light_per_phase() {
    let mut scheduler = IntersectionScheduler::new(three_road_config()).expect("valid config");

    for report in scheduler.run_cycles(6) {
        let active = report.active_road.expect("phased mode always has an active road");
        for phase in &report.phases {
            let non_red: Vec<_> = phase
                .lights
                .iter()
                .filter(|(_, state)| *state != LightState::Red)
                .collect();
            assert_eq!(non_red.len(), 1);
            assert_eq!(non_red[0].0, active);
        }
    }
}

#[test]
fn test_previous_road_returns_to_red() {
    let mut scheduler = IntersectionScheduler::new(three_road_config()).expect("valid config");
    scheduler.step_cycle();
    assert_eq!(scheduler.light_state(RoadId(0)), Some(LightState::Green));

    scheduler.step_cycle();
    assert_eq!(scheduler.light_state(RoadId(0)), Some(LightState::Red));
    assert_eq!(scheduler.light_state(RoadId(1)), Some(LightState::Green));
}

#[test]
fn test_zero_cycles_changes_nothing() {
    let mut scheduler = IntersectionScheduler::new(three_road_config()).expect("valid config");
    let reports = scheduler.run_cycles(0);

    assert!(reports.is_empty());
    assert_eq!(scheduler.cycles_run(), 0);
    assert!(scheduler
        .lights()
        .iter()
        .all(|light| light.state() == LightState::Red));
}

#[test]
fn test_snapshot_is_idempotent() {
    let mut scheduler = IntersectionScheduler::new(three_road_config()).expect("valid config");
    scheduler.step_cycle();

    let first = scheduler.snapshot(Phase::Green);
    let second = scheduler.snapshot(Phase::Green);
    assert_eq!(first, second);
}

#[test]
fn test_single_road_is_always_active() {
    let config = SimConfig::new(1, vec![VehicleSpec::new("Solo", 0, false)]);
    let mut scheduler = IntersectionScheduler::new(config).expect("valid config");

    for report in scheduler.run_cycles(3) {
        assert_eq!(report.active_road, Some(RoadId(0)));
        assert_eq!(report.phases[0].actions[0].action, VehicleAction::SlowingDown);
        assert_eq!(report.phases[1].actions[0].action, VehicleAction::Moving);
    }
}

#[test]
fn test_no_vehicles_still_cycles_lights() {
    let mut scheduler = IntersectionScheduler::new(SimConfig::new(2, Vec::new())).expect("valid");
    let reports = scheduler.run_cycles(2);

    assert_eq!(reports[0].phases[1].lights[0], (RoadId(0), LightState::Green));
    assert_eq!(reports[1].phases[1].lights[1], (RoadId(1), LightState::Green));
    assert!(reports.iter().all(|r| r.phases.iter().all(|p| p.actions.is_empty())));
}

#[test]
fn test_basic_mode_single_pass() {
    let config = three_road_config().with_mode(SimulationMode::Basic);
    let mut scheduler = IntersectionScheduler::new(config).expect("valid config");
    let reports = scheduler.run_cycles(2);

    let first = &reports[0];
    assert_eq!(first.active_road, Some(RoadId(0)));
    assert_eq!(
        actions_of(&first.phases[0]),
        vec![
            VehicleAction::Moving,
            VehicleAction::Stopped,
            VehicleAction::Moving
        ]
    );

    let second = &reports[1];
    assert_eq!(second.phases.len(), 1);
    assert_eq!(second.phases[0].phase, Phase::Single);
    assert_eq!(
        second.phases[0].lights,
        vec![
            (RoadId(0), LightState::Red),
            (RoadId(1), LightState::Green),
            (RoadId(2), LightState::Red),
        ]
    );
    assert_eq!(
        actions_of(&second.phases[0]),
        vec![
            VehicleAction::Stopped,
            VehicleAction::Moving,
            VehicleAction::Moving
        ]
    );
}

#[test]
fn test_advanced_mode_ignores_lights() {
    let config = three_road_config().with_mode(SimulationMode::Advanced);
    let mut scheduler = IntersectionScheduler::new(config).expect("valid config");
    assert!(!scheduler.mode().respect_lights());

    let reports = scheduler.run_cycles(2);
    for report in &reports {
        assert_eq!(report.active_road, None);
        assert_eq!(report.phases.len(), 1);
        assert!(report.phases[0].lights.is_empty());
        assert!(report.phases[0]
            .actions
            .iter()
            .all(|a| a.action == VehicleAction::Moving && !a.overrode_light));
    }
    assert!(scheduler
        .lights()
        .iter()
        .all(|light| light.state() == LightState::Red));
}

#[test]
fn test_summary_counts() {
    let mut scheduler = IntersectionScheduler::new(three_road_config()).expect("valid config");
    scheduler.run_cycles(4);

    let summary = scheduler.summary();
    assert_eq!(summary.roads, 3);
    assert_eq!(summary.vehicles, 3);
    assert_eq!(summary.emergency_vehicles, 1);
    assert_eq!(summary.cycles_run, 4);
}

#[test]
fn test_rejects_zero_roads() {
    let err = IntersectionScheduler::new(SimConfig::new(0, Vec::new())).unwrap_err();
    assert_eq!(
        err,
        SimError::InvalidConfiguration(ConfigError::NoRoads { num_roads: 0 })
    );

    let err = IntersectionScheduler::new(SimConfig::new(-2, Vec::new())).unwrap_err();
    assert!(matches!(
        err,
        SimError::InvalidConfiguration(ConfigError::NoRoads { num_roads: -2 })
    ));
}

#[test]
fn test_rejects_road_out_of_range() {
    let config = SimConfig::new(2, vec![VehicleSpec::new("Truck", 2, false)]);
    let err = IntersectionScheduler::new(config).unwrap_err();
    assert_eq!(
        err,
        SimError::InvalidConfiguration(ConfigError::RoadOutOfRange {
            vehicle: "Truck".to_string(),
            road_index: 2,
            num_roads: 2,
        })
    );

    let config = SimConfig::new(2, vec![VehicleSpec::new("Truck", -1, false)]);
    assert!(IntersectionScheduler::new(config).is_err());
}

#[test]
fn test_rejects_empty_vehicle_name() {
    let config = SimConfig::new(
        2,
        vec![
            VehicleSpec::new("Car", 0, false),
            VehicleSpec::new("  ", 1, false),
        ],
    );
    let err = IntersectionScheduler::new(config).unwrap_err();
    assert_eq!(
        err,
        SimError::InvalidConfiguration(ConfigError::EmptyVehicleName { position: 1 })
    );
    assert_eq!(
        err.to_string(),
        "invalid configuration: vehicle #2 has an empty name"
    );
}
