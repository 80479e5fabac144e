//! Planar (XY) vector helpers. Z components are carried through unchanged.

use super::{Point3, Vector3, TOLERANCE};

/// Rotates a vector about the Z axis by `angle` radians (counter-clockwise
/// for positive angles). The Z component is preserved.
#[must_use]
pub fn rotate_xy(v: &Vector3, angle: f64) -> Vector3 {
    let (sin, cos) = angle.sin_cos();
    Vector3::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos, v.z)
}

/// Returns the XY component of `b - a` with a zero Z.
#[must_use]
pub fn planar_delta(a: &Point3, b: &Point3) -> Vector3 {
    Vector3::new(b.x - a.x, b.y - a.y, 0.0)
}

/// Distance between two points measured in the XY plane.
#[must_use]
pub fn planar_distance(a: &Point3, b: &Point3) -> f64 {
    (b.x - a.x).hypot(b.y - a.y)
}

/// Returns the right-pointing normal of a direction vector in the XY plane.
#[must_use]
pub fn right_normal(dir: &Vector3) -> Vector3 {
    Vector3::new(dir.y, -dir.x, 0.0)
}

/// 2D cross product (Z component of `a × b`).
#[must_use]
pub fn cross_xy(a: &Vector3, b: &Vector3) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Unsigned angle between two vectors in the XY plane, in `[0, π]`.
///
/// Returns `None` when either vector has zero planar length.
#[must_use]
pub fn angle_between_xy(a: &Vector3, b: &Vector3) -> Option<f64> {
    let la = a.x.hypot(a.y);
    let lb = b.x.hypot(b.y);
    if la < TOLERANCE || lb < TOLERANCE {
        return None;
    }
    Some(cross_xy(a, b).atan2(a.x * b.x + a.y * b.y).abs())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn rotate_quarter_turn() {
        let v = rotate_xy(&Vector3::new(1.0, 0.0, 3.0), FRAC_PI_2);
        assert!(v.x.abs() < TOLERANCE);
        assert!((v.y - 1.0).abs() < TOLERANCE);
        assert!((v.z - 3.0).abs() < TOLERANCE);
    }

    #[test]
    fn rotate_preserves_length() {
        let v = Vector3::new(3.0, 4.0, 0.0);
        let r = rotate_xy(&v, 0.7);
        assert!((r.norm() - 5.0).abs() < TOLERANCE);
    }

    #[test]
    fn planar_distance_ignores_z() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(3.0, 4.0, 100.0);
        assert!((planar_distance(&a, &b) - 5.0).abs() < TOLERANCE);
        assert!(planar_delta(&a, &b).z.abs() < TOLERANCE);
    }

    #[test]
    fn right_normal_is_clockwise() {
        let d = Vector3::new(2.0, 1.0, 0.0);
        assert!(d.dot(&right_normal(&d)).abs() < TOLERANCE);
        assert!(cross_xy(&d, &right_normal(&d)) < 0.0);
    }

    #[test]
    fn angle_between_opposites() {
        let a = Vector3::new(1.0, 0.0, 0.0);
        let b = Vector3::new(-2.0, 0.0, 0.0);
        assert!((angle_between_xy(&a, &b).unwrap() - PI).abs() < TOLERANCE);
        assert!(angle_between_xy(&a, &Vector3::zeros()).is_none());
    }
}
