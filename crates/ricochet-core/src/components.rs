//! ECS components for hecs entities.
//!
//! Components are plain data structs with no game logic; logic lives in
//! the sim crate's systems. Only enemies live in the ECS world — the
//! player, reflector, and wave controller are engine-owned structs.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::ENEMY_SIZE;
use crate::enums::EnemyPhase;
use crate::types::Rect;

/// Marks an entity as an enemy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy;

/// World position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub DVec2);

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self(DVec2::new(x, y))
    }

    /// Enemy collision box centered on this position.
    pub fn enemy_rect(&self) -> Rect {
        Rect::from_center(self.0, ENEMY_SIZE, ENEMY_SIZE)
    }
}

/// Enemy behavior profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyProfile {
    /// Wave this enemy was spawned in (1-based; presentation tints by it).
    pub wave: u32,
    /// Seek speed, fixed at spawn from the wave's speed.
    pub speed: f64,
    pub phase: EnemyPhase,
}
