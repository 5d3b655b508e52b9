//! Simulation engine for RICOCHET.
//!
//! Owns the hecs ECS world for the live enemy set, runs systems at a fixed
//! tick rate, and produces GameSnapshots for the frontend.

pub mod beam;
pub mod engine;
pub mod player;
pub mod reflector;
pub mod systems;
pub mod wave;
pub mod world_setup;

pub use engine::GameEngine;
pub use ricochet_core as core;
