//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    MainMenu,
    /// A run is underway (includes wave transitions).
    Active,
    Paused,
    /// Player health reached zero.
    Defeat,
    /// All waves cleared.
    Victory,
}

/// Player control mode. Movement input is ignored while Aiming.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerMode {
    #[default]
    Maneuvering,
    Aiming,
}

/// Enemy lifecycle phase. Headings only exist while Moving and the death
/// timer only exists while Dying, so stale fields in the wrong state are
/// unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state")]
pub enum EnemyPhase {
    /// Spawned but not yet seeking.
    Idle,
    /// Seeking the player. The vulnerable heading is always the back:
    /// `vulnerable_deg == wrap_degrees(heading_deg + 180)`.
    Moving { heading_deg: f64, vulnerable_deg: f64 },
    /// Death animation running; position frozen, deals no damage.
    Dying { elapsed_secs: f64 },
}
