//! Intersection Simulation Library
//!
//! A round-robin traffic light intersection with vehicles that move, slow
//! down or stop depending on the light of their road.

pub mod console;
pub mod simulation;
