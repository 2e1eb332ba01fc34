//! Console front end for the simulation
//!
//! Reads a scenario as whitespace separated tokens (the same layout the
//! interactive prompts ask for) and renders scheduler reports as text.

use std::collections::VecDeque;
use std::fmt::Write as _;
use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use crate::simulation::{
    ActionReport, ConfigError, CycleReport, Phase, PhaseReport, SimConfig, SimError,
    SimulationMode, SimulationSummary, VehicleAction, VehicleSpec,
};

/// Width of the left-justified vehicle name column
pub const NAME_WIDTH: usize = 15;

pub const PROMPT_ROADS: &str = "Enter number of roads: ";
pub const PROMPT_VEHICLES: &str = "Enter number of vehicles: ";
pub const PROMPT_VEHICLE_NAME: &str = "Vehicle name: ";
pub const PROMPT_ROAD_INDEX: &str = "Road index: ";
pub const PROMPT_EMERGENCY: &str = "Is it an emergency vehicle? (1 for Yes, 0 for No): ";
pub const PROMPT_CYCLES: &str = "Enter the number of cycles: ";

/// A configuration plus the number of cycles to run it for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub config: SimConfig,
    pub cycles: usize,
}

/// Splits a reader into whitespace separated tokens, across line breaks
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next raw token; `field` names what is being read for error messages
    pub fn next_token(&mut self, field: &str) -> Result<String> {
        while self.pending.is_empty() {
            let mut line = String::new();
            let read = self
                .reader
                .read_line(&mut line)
                .with_context(|| format!("Failed to read {}", field))?;
            if read == 0 {
                return Err(SimError::UnexpectedEof {
                    field: field.to_string(),
                }
                .into());
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }

        // loop above only exits with a token queued
        Ok(self.pending.pop_front().unwrap_or_default())
    }

    pub fn next_int(&mut self, field: &str) -> Result<i64> {
        let token = self.next_token(field)?;
        token.parse::<i64>().map_err(|_| {
            anyhow::Error::from(SimError::InvalidInput {
                field: field.to_string(),
                token,
            })
        })
    }

    /// Yes/no answer given as `1`/`0` (or `true`/`false`)
    pub fn next_flag(&mut self, field: &str) -> Result<bool> {
        let token = self.next_token(field)?;
        match token.as_str() {
            "1" | "true" => Ok(true),
            "0" | "false" => Ok(false),
            _ => Err(SimError::InvalidInput {
                field: field.to_string(),
                token,
            }
            .into()),
        }
    }
}

fn prompt(out: &mut Option<&mut dyn Write>, text: &str) -> Result<()> {
    if let Some(out) = out {
        out.write_all(text.as_bytes())
            .and_then(|_| out.flush())
            .context("Failed to write prompt")?;
    }
    Ok(())
}

/// Read a full scenario: roads, vehicle count, each vehicle, then cycles.
///
/// Prompts are written to `prompts` when it is given. Counts are checked as
/// soon as they are read so that a negative vehicle count does not leave the
/// reader waiting for vehicles that will never come. The vehicle list grows
/// as records arrive; the declared count is not trusted for allocation.
pub fn read_scenario<R: BufRead>(
    tokens: &mut TokenReader<R>,
    mut prompts: Option<&mut dyn Write>,
    mode: SimulationMode,
) -> Result<Scenario> {
    prompt(&mut prompts, PROMPT_ROADS)?;
    let num_roads = tokens.next_int("number of roads")?;
    if num_roads <= 0 {
        return Err(SimError::from(ConfigError::NoRoads { num_roads }).into());
    }

    prompt(&mut prompts, PROMPT_VEHICLES)?;
    let num_vehicles = tokens.next_int("number of vehicles")?;
    if num_vehicles < 0 {
        return Err(SimError::from(ConfigError::NegativeVehicleCount { num_vehicles }).into());
    }

    let mut vehicles = Vec::new();
    for _ in 0..num_vehicles {
        prompt(&mut prompts, PROMPT_VEHICLE_NAME)?;
        let name = tokens.next_token("vehicle name")?;
        prompt(&mut prompts, PROMPT_ROAD_INDEX)?;
        let road_index = tokens.next_int("road index")?;
        prompt(&mut prompts, PROMPT_EMERGENCY)?;
        let is_emergency = tokens.next_flag("emergency flag")?;

        vehicles.push(VehicleSpec::new(name, road_index, is_emergency));
    }

    prompt(&mut prompts, PROMPT_CYCLES)?;
    let num_cycles = tokens.next_int("number of cycles")?;
    if num_cycles < 0 {
        return Err(SimError::from(ConfigError::NegativeCycleCount { num_cycles }).into());
    }

    Ok(Scenario {
        config: SimConfig::new(num_roads, vehicles).with_mode(mode),
        cycles: num_cycles as usize,
    })
}

/// One line describing a vehicle's action
pub fn render_action(action: &ActionReport) -> String {
    let road = action.road.display_number();
    let name = &action.vehicle;
    match action.action {
        VehicleAction::Moving if action.emergency => format!(
            "{:<width$} (EMERGENCY) is moving on road {}.",
            name,
            road,
            width = NAME_WIDTH
        ),
        VehicleAction::Moving => {
            format!("{:<width$} is moving on road {}.", name, road, width = NAME_WIDTH)
        }
        VehicleAction::SlowingDown => format!(
            "{:<width$} is slowing down on road {}.",
            name,
            road,
            width = NAME_WIDTH
        ),
        VehicleAction::Stopped => format!(
            "{:<width$} is stopped at the red light on road {}.",
            name,
            road,
            width = NAME_WIDTH
        ),
    }
}

pub fn render_phase(phase: &PhaseReport) -> String {
    let mut out = String::new();

    match phase.phase {
        Phase::Yellow => out.push_str("  -- YELLOW phase --\n"),
        Phase::Green => out.push_str("  -- GREEN phase --\n"),
        Phase::Single => {}
    }

    for (road, state) in &phase.lights {
        let _ = writeln!(out, "Road {}: {}", road.display_number(), state);
    }
    for action in &phase.actions {
        out.push_str(&render_action(action));
        out.push('\n');
    }

    out
}

/// Text block for a whole cycle, header included
pub fn render_cycle(report: &CycleReport, mode: SimulationMode) -> String {
    let mut out = match mode {
        SimulationMode::Advanced => format!("Advanced Cycle {}\n", report.cycle),
        _ => format!("Cycle {}\n", report.cycle),
    };

    for phase in &report.phases {
        out.push_str(&render_phase(phase));
    }

    out
}

pub fn render_summary(summary: &SimulationSummary) -> String {
    let mut out = String::from("=== Intersection Summary ===\n");
    let _ = writeln!(out, "Total roads: {}", summary.roads);
    let _ = writeln!(out, "Total vehicles: {}", summary.vehicles);
    let _ = writeln!(out, "Emergency vehicles: {}", summary.emergency_vehicles);
    let _ = writeln!(out, "Cycles run: {}", summary.cycles_run);
    out
}
