//! Core types and definitions for the RICOCHET simulation.
//!
//! This crate defines the vocabulary shared across the workspace:
//! the geometry kernel, components, commands, state snapshots, events,
//! and constants. It has no dependency on any runtime framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod geom;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
