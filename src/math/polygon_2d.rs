use super::{Point3, TOLERANCE};

/// Computes the signed area of a polygon in the XY plane (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise. The polygon is
/// implicitly closed; a repeated closing vertex contributes nothing.
#[must_use]
pub fn signed_area_2d(points: &[Point3]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Removes consecutive duplicate vertices (in XY) from a closed ring,
/// including a trailing vertex that repeats the first.
#[must_use]
pub fn dedup_ring(points: &[Point3]) -> Vec<Point3> {
    let mut ring: Vec<Point3> = Vec::with_capacity(points.len());
    for &pt in points {
        let repeats = ring
            .last()
            .is_some_and(|last| (last.x - pt.x).abs() < TOLERANCE && (last.y - pt.y).abs() < TOLERANCE);
        if !repeats {
            ring.push(pt);
        }
    }
    while ring.len() > 1 {
        let (first, last) = (ring[0], ring[ring.len() - 1]);
        if (first.x - last.x).abs() < TOLERANCE && (first.y - last.y).abs() < TOLERANCE {
            ring.pop();
        } else {
            break;
        }
    }
    ring
}
