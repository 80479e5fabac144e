//! 2D circular arc math utilities.
//!
//! Arcs are described by `(cx, cy, radius, start_angle, sweep)`:
//! - `sweep > 0`: counter-clockwise arc
//! - `sweep < 0`: clockwise arc
//! - `|sweep| = 2π`: full circle
use std::f64::consts::TAU;

use super::TOLERANCE;

/// Normalizes an angle into `[0, 2π)`.
#[must_use]
pub fn normalize_angle(angle: f64) -> f64 {
    let a = angle.rem_euclid(TAU);
    if a >= TAU - TOLERANCE {
        0.0
    } else {
        a
    }
}

/// Computes the circle passing through three points.
///
/// Returns `(cx, cy, radius)`, or `None` when the points are collinear
/// (or coincident) and no finite circle exists.
#[must_use]
pub fn circle_through_points(
    ax: f64, ay: f64,
    bx: f64, by: f64,
    qx: f64, qy: f64,
) -> Option<(f64, f64, f64)> {
    let d = 2.0 * (ax * (by - qy) + bx * (qy - ay) + qx * (ay - by));
    // Scale the collinearity check by the spread of the points.
    let spread = (bx - ax).hypot(by - ay).max((qx - ax).hypot(qy - ay));
    if d.abs() < TOLERANCE * spread.max(1.0) {
        return None;
    }

    let a2 = ax * ax + ay * ay;
    let b2 = bx * bx + by * by;
    let q2 = qx * qx + qy * qy;
    let cx = (a2 * (by - qy) + b2 * (qy - ay) + q2 * (ay - by)) / d;
    let cy = (a2 * (qx - bx) + b2 * (ax - qx) + q2 * (bx - ax)) / d;
    let radius = (ax - cx).hypot(ay - cy);
    Some((cx, cy, radius))
}

/// Computes the signed sweep that travels from `start_angle` to `end_angle`
/// while passing through `mid_angle`.
#[must_use]
pub fn sweep_through(start_angle: f64, mid_angle: f64, end_angle: f64) -> f64 {
    let to_end = normalize_angle(end_angle - start_angle);
    let to_mid = normalize_angle(mid_angle - start_angle);
    if to_mid <= to_end {
        to_end
    } else {
        to_end - TAU
    }
}

/// Constructs the arc that starts at `(sx, sy)` heading along `(tx, ty)` and
/// ends at `(ex, ey)`.
///
/// Returns `(cx, cy, radius, start_angle, sweep)`, or `None` when the end
/// point lies on the tangent line (the "arc" would be a straight line) or the
/// inputs are degenerate.
#[must_use]
pub fn tangent_arc(
    sx: f64, sy: f64,
    tx: f64, ty: f64,
    ex: f64, ey: f64,
) -> Option<(f64, f64, f64, f64, f64)> {
    let t_len = tx.hypot(ty);
    let wx = ex - sx;
    let wy = ey - sy;
    let w_len_sq = wx * wx + wy * wy;
    if t_len < TOLERANCE || w_len_sq < TOLERANCE * TOLERANCE {
        return None;
    }

    // Left normal of the unit tangent; the center lies on this line.
    let nx = -ty / t_len;
    let ny = tx / t_len;
    let wn = wx * nx + wy * ny;
    if wn.abs() < TOLERANCE * w_len_sq.sqrt() {
        return None;
    }

    // Signed distance from start to center along the normal: |c - e| = |s|.
    let s = w_len_sq / (2.0 * wn);
    let cx = sx + nx * s;
    let cy = sy + ny * s;
    let radius = s.abs();

    let start_angle = (sy - cy).atan2(sx - cx);
    let end_angle = (ey - cy).atan2(ex - cx);
    let sweep = if s > 0.0 {
        normalize_angle(end_angle - start_angle)
    } else {
        -normalize_angle(start_angle - end_angle)
    };
    Some((cx, cy, radius, start_angle, sweep))
}

/// Evaluates a point on an arc at parameter `t` in `[0, 1]`.
#[must_use]
pub fn arc_point_at(
    cx: f64, cy: f64,
    radius: f64,
    start_angle: f64,
    sweep: f64,
    t: f64,
) -> (f64, f64) {
    let angle = start_angle + sweep * t;
    (cx + radius * angle.cos(), cy + radius * angle.sin())
}

/// Computes the unit tangent direction on an arc at parameter `t` in `[0, 1]`.
///
/// The tangent points in the direction of increasing `t`.
#[must_use]
pub fn arc_tangent_at(start_angle: f64, sweep: f64, t: f64) -> (f64, f64) {
    let angle = start_angle + sweep * t;
    let sign = if sweep >= 0.0 { 1.0 } else { -1.0 };
    // Tangent to circle at angle θ is (-sin θ, cos θ) for CCW; negate for CW.
    (-sign * angle.sin(), sign * angle.cos())
}

/// Converts an absolute angle to an arc parameter `t` in `[0, 1]`.
///
/// Returns `None` if the angle is not within the arc's angular range.
#[must_use]
pub fn angle_to_arc_param(angle: f64, start_angle: f64, sweep: f64) -> Option<f64> {
    if sweep.abs() < TOLERANCE {
        return None;
    }
    let eps = TOLERANCE * 100.0;

    // Angular offset from start_angle to angle in the sweep direction.
    let mut delta = angle - start_angle;
    if sweep > 0.0 {
        while delta < -eps {
            delta += TAU;
        }
        while delta > TAU + eps {
            delta -= TAU;
        }
    } else {
        while delta > eps {
            delta -= TAU;
        }
        while delta < -TAU - eps {
            delta += TAU;
        }
    }

    let t = delta / sweep;
    if t >= -eps && t <= 1.0 + eps {
        Some(t.clamp(0.0, 1.0))
    } else {
        None
    }
}

/// Computes the number of line segments needed to approximate an arc
/// within the given chord tolerance.
#[must_use]
pub fn arc_subdivision_count(radius: f64, abs_sweep: f64, tolerance: f64) -> usize {
    if radius < 1e-12 || abs_sweep < 1e-12 || tolerance <= 0.0 {
        return 1;
    }
    // From the sagitta formula: sagitta = r * (1 - cos(θ/2))
    // For a given tolerance: θ = 2 * acos(1 - tolerance/r)
    let max_angle = if tolerance >= radius {
        std::f64::consts::PI
    } else {
        2.0 * (1.0 - tolerance / radius).acos()
    };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let n = (abs_sweep / max_angle).ceil() as usize;
    n.max(1)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    const TOL: f64 = 1e-10;

    #[test]
    fn circle_through_unit_points() {
        let (cx, cy, r) = circle_through_points(1.0, 0.0, 0.0, 1.0, -1.0, 0.0).unwrap();
        assert!(cx.abs() < TOL, "cx={cx}");
        assert!(cy.abs() < TOL, "cy={cy}");
        assert!((r - 1.0).abs() < TOL, "r={r}");
    }

    #[test]
    fn circle_through_collinear_is_none() {
        assert!(circle_through_points(0.0, 0.0, 1.0, 1.0, 2.0, 2.0).is_none());
        assert!(circle_through_points(1.0, 1.0, 1.0, 1.0, 1.0, 1.0).is_none());
    }

    #[test]
    fn sweep_through_picks_direction() {
        // 0 → π/2 → π is counter-clockwise.
        let ccw = sweep_through(0.0, FRAC_PI_2, PI);
        assert!((ccw - PI).abs() < TOL, "ccw={ccw}");
        // 0 → -π/2 → π is clockwise.
        let cw = sweep_through(0.0, -FRAC_PI_2, PI);
        assert!((cw + PI).abs() < TOL, "cw={cw}");
    }

    #[test]
    fn tangent_arc_perpendicular_tangent_is_semicircle() {
        // Start (0,0) heading -y, ending at (2,0): center (1,0), CCW half turn below the chord.
        let (cx, cy, r, sa, sw) = tangent_arc(0.0, 0.0, 0.0, -1.0, 2.0, 0.0).unwrap();
        assert!((cx - 1.0).abs() < TOL, "cx={cx}");
        assert!(cy.abs() < TOL, "cy={cy}");
        assert!((r - 1.0).abs() < TOL, "r={r}");
        assert!((sw - PI).abs() < TOL, "sweep={sw}");

        let (mx, my) = arc_point_at(cx, cy, r, sa, sw, 0.5);
        assert!((mx - 1.0).abs() < TOL, "mx={mx}");
        assert!((my + 1.0).abs() < TOL, "my={my}");
    }

    #[test]
    fn tangent_arc_clockwise() {
        // Start (0,0) heading +x, ending at (1,-1): center (0,-1), quarter turn clockwise.
        let (cx, cy, r, _sa, sw) = tangent_arc(0.0, 0.0, 1.0, 0.0, 1.0, -1.0).unwrap();
        assert!(cx.abs() < TOL);
        assert!((cy + 1.0).abs() < TOL);
        assert!((r - 1.0).abs() < TOL);
        assert!((sw + FRAC_PI_2).abs() < TOL, "sweep={sw}");
    }

    #[test]
    fn tangent_arc_start_tangent_matches() {
        let (_, _, _, sa, sw) = tangent_arc(0.0, 0.0, 1.0, 1.0, 3.0, 0.5).unwrap();
        let (tx, ty) = arc_tangent_at(sa, sw, 0.0);
        let inv = 1.0 / 2.0_f64.sqrt();
        assert!((tx - inv).abs() < 1e-9, "tx={tx}");
        assert!((ty - inv).abs() < 1e-9, "ty={ty}");
    }

    #[test]
    fn tangent_arc_collinear_end_is_none() {
        assert!(tangent_arc(0.0, 0.0, 1.0, 0.0, 5.0, 0.0).is_none());
        assert!(tangent_arc(0.0, 0.0, 0.0, 0.0, 5.0, 1.0).is_none());
    }

    #[test]
    fn angle_param_inside_and_outside() {
        let t = angle_to_arc_param(FRAC_PI_2, 0.0, PI).unwrap();
        assert!((t - 0.5).abs() < TOL);
        assert!(angle_to_arc_param(-FRAC_PI_2, 0.0, PI).is_none());
        // Clockwise arc from 0 to -π covers -π/2.
        let t = angle_to_arc_param(-FRAC_PI_2, 0.0, -PI).unwrap();
        assert!((t - 0.5).abs() < TOL);
    }

    #[test]
    fn subdivision_count_tolerance() {
        assert_eq!(arc_subdivision_count(1.0, PI, 10.0), 1);
        let n = arc_subdivision_count(1.0, PI, 0.001);
        assert!(n > 10, "expected many subdivisions, got {n}");
    }

    #[test]
    fn normalize_wraps_negative() {
        assert!((normalize_angle(-FRAC_PI_2) - 1.5 * PI).abs() < TOL);
        assert!(normalize_angle(TAU).abs() < TOL);
    }
}
