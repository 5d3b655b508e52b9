//! Stateless geometry kernel: angle arithmetic, arc membership,
//! ray/AABB casting, and offset reflection.
//!
//! Everything here is a pure function over `glam::DVec2`. Degenerate
//! inputs collapse to defined fallback values instead of errors: a
//! zero-length direction normalizes to the zero vector, an unobstructed
//! ray returns the far-field point, and the angle of the zero vector is 0°.

use glam::DVec2;

use crate::types::Rect;

/// Wrap an angle in degrees to `[0, 360)`.
pub fn wrap_degrees(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}

/// Angle of a vector in degrees, `[0, 360)`. The zero vector maps to 0°.
pub fn angle_of(v: DVec2) -> f64 {
    wrap_degrees(v.y.atan2(v.x).to_degrees())
}

/// Unit vector pointing at `deg` degrees.
pub fn vec_from_angle(deg: f64) -> DVec2 {
    DVec2::from_angle(deg.to_radians())
}

/// Rotate a vector by `deg` degrees.
pub fn rotate(v: DVec2, deg: f64) -> DVec2 {
    DVec2::from_angle(deg.to_radians()).rotate(v)
}

/// Test whether `angle` lies inside the arc of `width` degrees centered on
/// `center`. Boundaries are inclusive. Arcs that straddle the 0°/360° seam
/// (lower bound wrapping above the upper bound) are handled by splitting the
/// membership test into the two unwrapped intervals.
pub fn angle_in_arc(angle: f64, center: f64, width: f64) -> bool {
    let angle = wrap_degrees(angle);
    let lower = wrap_degrees(center - width / 2.0);
    let upper = wrap_degrees(center + width / 2.0);

    if lower > upper {
        angle >= lower || angle <= upper
    } else {
        angle >= lower && angle <= upper
    }
}

/// Result of a raycast: the point the ray stopped at, and the index of the
/// wall it stopped on (`None` for the unobstructed far-field case).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub point: DVec2,
    pub wall: Option<usize>,
}

/// Cast a ray from `origin` along `dir` against a set of axis-aligned walls.
///
/// The direction is normalized internally, so the parametric distance `t`
/// is in world units. Each wall contributes at most two candidate entry
/// edges (left or right picked by the sign of `dir.x`, top or bottom by the
/// sign of `dir.y`); a candidate counts when `t` lies in `[0, max_distance]`
/// and the perpendicular coordinate falls inside the edge span. The nearest
/// candidate across all walls wins; with no candidate the far-field point at
/// `origin + dir * max_distance` is returned with no wall.
///
/// A zero direction is degenerate: the ray goes nowhere and the hit is the
/// origin itself, with no wall.
///
/// Tie-break: strictly smaller distance replaces the best candidate, so
/// among exactly equidistant hits the first one examined is kept (lowest
/// wall index, vertical entry edge before horizontal).
pub fn raycast(origin: DVec2, dir: DVec2, walls: &[Rect], max_distance: f64) -> RayHit {
    let dir = dir.normalize_or_zero();
    if dir == DVec2::ZERO {
        return RayHit {
            point: origin,
            wall: None,
        };
    }

    let mut best_t = max_distance;
    let mut best_wall = None;

    for (idx, wall) in walls.iter().enumerate() {
        if dir.x != 0.0 {
            let edge_x = if dir.x > 0.0 { wall.left() } else { wall.right() };
            let t = (edge_x - origin.x) / dir.x;
            if (0.0..=max_distance).contains(&t) {
                let y = origin.y + t * dir.y;
                if y >= wall.top() && y <= wall.bottom() && t < best_t {
                    best_t = t;
                    best_wall = Some(idx);
                }
            }
        }

        if dir.y != 0.0 {
            let edge_y = if dir.y > 0.0 { wall.top() } else { wall.bottom() };
            let t = (edge_y - origin.y) / dir.y;
            if (0.0..=max_distance).contains(&t) {
                let x = origin.x + t * dir.x;
                if x >= wall.left() && x <= wall.right() && t < best_t {
                    best_t = t;
                    best_wall = Some(idx);
                }
            }
        }
    }

    RayHit {
        point: origin + dir * best_t,
        wall: best_wall,
    }
}

/// Reflect an incoming vector off the reflector and apply its angular offset.
///
/// The reflector has no fixed orientation; its surface normal is defined as
/// the negation of the normalized incoming direction, so the textbook
/// formula `r = v - 2(v.n)n` sends the beam straight back before the offset
/// rotation is applied. The un-normalized incoming vector is reflected so
/// magnitude carries through, though callers only use the direction.
pub fn reflect(incoming: DVec2, offset_deg: f64) -> DVec2 {
    let normal = -incoming.normalize_or_zero();
    let reflected = incoming - 2.0 * incoming.dot(normal) * normal;
    rotate(reflected, offset_deg)
}
