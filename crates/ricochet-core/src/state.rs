//! Game state snapshot — the complete visible state sent to the frontend
//! each tick. The snapshot is read-only presentation data; all gameplay
//! effects have already been applied by the time it is built.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::{EnemyPhase, GamePhase, PlayerMode};
use crate::events::GameEvent;
use crate::types::{Rect, SimTime};

/// Complete game state broadcast to the frontend after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub player: PlayerView,
    pub reflector: ReflectorView,
    pub enemies: Vec<EnemyView>,
    /// Present only while the beam's visual display window is live.
    pub beam: Option<BeamView>,
    pub wave: WaveView,
    /// Static level geometry (immutable for the session).
    pub walls: Vec<Rect>,
    pub events: Vec<GameEvent>,
}

/// Player status for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: DVec2,
    pub health: u32,
    pub mode: PlayerMode,
    pub invulnerable: bool,
    /// Fraction of the fire cooldown elapsed; 1.0 = ready to fire.
    pub cooldown_fraction: f64,
}

/// Reflector status for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReflectorView {
    pub position: DVec2,
    pub target: DVec2,
    /// Persistent post-reflection angular offset, degrees in [0, 360).
    pub offset_deg: f64,
}

/// A live enemy on the playfield.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u32,
    pub position: DVec2,
    pub wave: u32,
    pub phase: EnemyPhase,
}

/// The most recent beam resolution, kept for the visual display window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeamView {
    /// Emitter position at fire time.
    pub origin: DVec2,
    /// End of the first leg: the reflector, or the earlier obstruction.
    pub first_leg_end: DVec2,
    /// End of the reflected leg; `None` when the beam never reached the
    /// reflector (a valid terminal state, not an error).
    pub second_leg_end: Option<DVec2>,
    pub reached_reflector: bool,
    /// Seconds since the shot, for pulse/fade effects.
    pub age_secs: f64,
}

/// Wave controller status for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WaveView {
    /// Current wave, 1-based. 0 before the first wave starts.
    pub wave: u32,
    pub total_waves: u32,
    pub remaining_to_spawn: u32,
    pub live_enemies: u32,
    pub in_transition: bool,
    /// Seconds until the next wave starts (0 when not in transition).
    pub transition_remaining_secs: f64,
}
