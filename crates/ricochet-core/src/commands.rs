//! Player commands sent from the frontend to the simulation.
//!
//! Commands are queued and processed at the next tick boundary. Firing is
//! edge-triggered: `BeginAim` on press puts the player in Aiming mode
//! (movement locked), `ReleaseFire` on release fires once if the cooldown
//! allows and always returns the player to Maneuvering.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Movement & steering ---
    /// Movement intent as a direction vector; normalized internally,
    /// so axis input and analog input look the same to the sim.
    SetMoveInput { x: f64, y: f64 },
    /// Cursor position the reflector eases toward.
    SetReflectorTarget { x: f64, y: f64 },
    /// Nudge the reflector's persistent angular offset by one increment.
    RotateOffset { clockwise: bool },

    // --- Firing ---
    /// Fire button pressed: enter Aiming mode.
    BeginAim,
    /// Fire button released: fire the beam (cooldown permitting) and
    /// return to Maneuvering.
    ReleaseFire,

    // --- Session control ---
    /// Start a run from the menu or after Defeat/Victory.
    StartRun,
    /// Full-state replace: rebuild the level, player, reflector, and wave
    /// state, and clear any in-flight beam.
    ResetRun,
    /// Pause the simulation.
    Pause,
    /// Resume from pause.
    Resume,
}
