//! Beam resolution pipeline — the combat core.
//!
//! A fire command resolves synchronously into a two-leg path: emitter to
//! reflector, then reflector (with its angular offset applied) out to the
//! first obstruction. Enemies intercept either leg by segment proximity;
//! whether an intercepted enemy dies depends on its vulnerable arc. At most
//! one enemy is destroyed per shot, chosen nearest-first on each leg.
//!
//! The pipeline is pure: it reads a narrow [`InterceptTarget`] view of the
//! live enemy set and never touches the world. The engine applies the
//! destruction it reports through the lifecycle system.

use glam::DVec2;

use ricochet_core::constants::*;
use ricochet_core::geom;

/// Read-only interception view of one live enemy. Only Moving enemies are
/// eligible; the engine never builds targets for Dying or Idle ones.
#[derive(Debug, Clone, Copy)]
pub struct InterceptTarget {
    pub entity: hecs::Entity,
    pub center: DVec2,
    /// Collision radius (half the enemy box).
    pub radius: f64,
    /// Center of the vulnerable arc, degrees.
    pub vulnerable_deg: f64,
}

/// Fully-resolved beam, recomputed on every fire event and kept only for
/// the visual display window.
#[derive(Debug, Clone)]
pub struct BeamResolution {
    /// Emitter position at fire time.
    pub origin: DVec2,
    /// End of the first leg: the reflector, or the earlier obstruction.
    pub first_leg_end: DVec2,
    /// Whether the first leg reached the reflector. False is a valid
    /// terminal state (wall or enemy body in the way), not an error.
    pub reached_reflector: bool,
    /// End of the reflected leg, when there is one.
    pub second_leg_end: Option<DVec2>,
    /// Wall index that terminated the second leg, if a wall did.
    pub blocked_wall: Option<usize>,
    /// The enemy destroyed by this shot, if any. Never more than one.
    pub destroyed: Option<hecs::Entity>,
}

/// The most recent resolution plus its display timer. Gameplay effects are
/// applied once at fire time; this only drives presentation.
#[derive(Debug, Clone)]
pub struct BeamEffect {
    pub resolution: BeamResolution,
    pub age_secs: f64,
}

impl BeamEffect {
    pub fn new(resolution: BeamResolution) -> Self {
        Self {
            resolution,
            age_secs: 0.0,
        }
    }

    /// Advance the display timer; returns whether the visual window is
    /// still live.
    pub fn advance(&mut self, dt: f64) -> bool {
        self.age_secs += dt;
        self.age_secs < BEAM_DISPLAY_SECS
    }
}

/// Resolve one fire event.
pub fn resolve(
    emitter: DVec2,
    reflector_pos: DVec2,
    offset_deg: f64,
    walls: &[ricochet_core::types::Rect],
    targets: &[InterceptTarget],
) -> BeamResolution {
    // --- Step A: first leg, emitter -> reflector ---

    let to_reflector = reflector_pos - emitter;
    let reflector_dist = to_reflector.length();

    let first_ray = geom::raycast(emitter, to_reflector, walls, BEAM_MAX_DISTANCE);
    if first_ray.wall.is_some()
        && emitter.distance(first_ray.point) < reflector_dist - BEAM_WALL_TOLERANCE
    {
        // Wall strictly in front of the reflector: no reflection, no kill.
        return BeamResolution {
            origin: emitter,
            first_leg_end: first_ray.point,
            reached_reflector: false,
            second_leg_end: None,
            blocked_wall: first_ray.wall,
            destroyed: None,
        };
    }

    if let Some(hit) = nearest_intercept(emitter, reflector_pos, targets) {
        let destroyed = hit.vulnerable.then_some(hit.target.entity);
        return BeamResolution {
            origin: emitter,
            first_leg_end: hit.point,
            reached_reflector: false,
            second_leg_end: None,
            blocked_wall: None,
            destroyed,
        };
    }

    // --- Step B: reflection and provisional second leg ---

    let outgoing = geom::reflect(to_reflector, offset_deg);
    let second_ray = geom::raycast(reflector_pos, outgoing, walls, BEAM_MAX_DISTANCE);

    // --- Step C: second leg interception ---

    if let Some(hit) = nearest_intercept(reflector_pos, second_ray.point, targets) {
        let destroyed = hit.vulnerable.then_some(hit.target.entity);
        return BeamResolution {
            origin: emitter,
            first_leg_end: reflector_pos,
            reached_reflector: true,
            second_leg_end: Some(hit.point),
            blocked_wall: None,
            destroyed,
        };
    }

    BeamResolution {
        origin: emitter,
        first_leg_end: reflector_pos,
        reached_reflector: true,
        second_leg_end: Some(second_ray.point),
        blocked_wall: second_ray.wall,
        destroyed: None,
    }
}

/// A qualifying interception on one leg.
struct Intercept {
    target: InterceptTarget,
    /// Closest point of the leg segment to the enemy center.
    point: DVec2,
    /// Whether the hit came from inside the vulnerable arc.
    vulnerable: bool,
}

/// Find the nearest enemy intercepting the segment `a -> b`.
///
/// An enemy is on the path when the projection of its center onto the
/// segment has parameter strictly inside (0, 1) and the perpendicular
/// distance is within its collision radius plus a small buffer. Among all
/// intercepting enemies the one closest to `a` is selected; vulnerability
/// is judged afterward from the direction intercept-point -> enemy-center
/// against the enemy's vulnerable arc. A near-zero-length segment yields
/// no interceptions.
fn nearest_intercept(a: DVec2, b: DVec2, targets: &[InterceptTarget]) -> Option<Intercept> {
    let seg = b - a;
    let len_sq = seg.length_squared();
    if len_sq < 1e-9 {
        return None;
    }

    let mut best: Option<(f64, &InterceptTarget, DVec2)> = None;
    for target in targets {
        let t = (target.center - a).dot(seg) / len_sq;
        if t <= 0.0 || t >= 1.0 {
            continue;
        }
        let closest = a + seg * t;
        if closest.distance(target.center) > target.radius + BEAM_INTERCEPT_BUFFER {
            continue;
        }
        let dist = t * len_sq.sqrt();
        if best.map_or(true, |(d, _, _)| dist < d) {
            best = Some((dist, target, closest));
        }
    }

    best.map(|(_, target, point)| {
        let incoming_deg = geom::angle_of(target.center - point);
        Intercept {
            target: *target,
            point,
            vulnerable: geom::angle_in_arc(incoming_deg, target.vulnerable_deg, VULNERABLE_ARC_DEG),
        }
    })
}
