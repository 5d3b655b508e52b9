//! Events emitted by the simulation for audio and UI feedback.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// One-shot feedback events, drained into each snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A new wave has begun spawning.
    WaveStarted { wave: u32 },
    /// The beam was fired; `reached_reflector` is false when the first leg
    /// was blocked by a wall or an enemy body.
    BeamFired { reached_reflector: bool },
    /// An enemy was destroyed (beam hit from the vulnerable arc, or
    /// self-destructed on player contact).
    EnemyDestroyed { position: DVec2, wave: u32 },
    /// The player took contact damage.
    PlayerHit { health_remaining: u32 },
    /// Player health reached zero; the run is over.
    Defeat,
    /// All waves cleared.
    Victory,
}
