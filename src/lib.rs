//! Blaster: a small arcade shoot-'em-up.
//!
//! `compute` advances the simulation one frame at a time, `display` turns the
//! resulting state into terminal output. The binary in `main.rs` glues the two
//! together with crossterm input and frame pacing.

pub mod compute;
pub mod constants;
pub mod display;
pub mod entities;
pub mod geometry;
pub mod pool;
