use super::arc_2d::angle_to_arc_param;
use super::{Point2, TOLERANCE};

/// Bounded segment-segment intersection in 2D.
///
/// Returns `(intersection_point, t, u)` where `t` and `u` are in `[0, 1]`.
/// Parallel (including collinear) segments report no intersection.
#[must_use]
pub fn segment_segment_intersect_2d(
    a0: &Point2,
    a1: &Point2,
    b0: &Point2,
    b1: &Point2,
) -> Option<(Point2, f64, f64)> {
    let da = a1 - a0;
    let db = b1 - b0;

    let cross = da.x * db.y - da.y * db.x;
    if cross.abs() < TOLERANCE {
        return None;
    }

    let d = b0 - a0;
    let t = (d.x * db.y - d.y * db.x) / cross;
    let u = (d.x * da.y - d.y * da.x) / cross;

    // Use a small epsilon to include endpoints.
    let eps = TOLERANCE;
    if t >= -eps && t <= 1.0 + eps && u >= -eps && u <= 1.0 + eps {
        let t = t.clamp(0.0, 1.0);
        Some((a0 + da * t, t, u.clamp(0.0, 1.0)))
    } else {
        None
    }
}

/// Intersection of a line segment with a circular arc in 2D.
///
/// The arc has center `c`, `radius`, `start_angle`, and `sweep`.
///
/// Returns `(point, t_seg, t_arc)` tuples ordered by `t_seg`, where both
/// parameters are in `[0, 1]`.
#[must_use]
pub fn segment_arc_intersect_2d(
    a0: &Point2,
    a1: &Point2,
    c: &Point2,
    radius: f64,
    start_angle: f64,
    sweep: f64,
) -> Vec<(Point2, f64, f64)> {
    let mut results = Vec::new();
    if radius < TOLERANCE || sweep.abs() < TOLERANCE {
        return results;
    }

    let d = a1 - a0;
    let seg_len_sq = d.norm_squared();
    if seg_len_sq < TOLERANCE * TOLERANCE {
        return results;
    }

    // Substitute the parametric segment into the circle equation:
    // |a0 + t*d - c|² = r²
    let f = a0 - c;
    let a = seg_len_sq;
    let b = 2.0 * f.dot(&d);
    let q = f.norm_squared() - radius * radius;
    let discriminant = b * b - 4.0 * a * q;

    // Scale-aware tangency band.
    let band = TOLERANCE * (b * b + (4.0 * a * q).abs()).max(1.0);
    if discriminant < -band {
        return results;
    }
    let disc_sqrt = discriminant.max(0.0).sqrt();

    let roots = if discriminant.abs() <= band {
        vec![-b / (2.0 * a)]
    } else {
        vec![(-b - disc_sqrt) / (2.0 * a), (-b + disc_sqrt) / (2.0 * a)]
    };

    let eps = TOLERANCE;
    for t_seg in roots {
        if t_seg < -eps || t_seg > 1.0 + eps {
            continue;
        }
        let t_seg = t_seg.clamp(0.0, 1.0);
        let p = a0 + d * t_seg;
        let angle = (p.y - c.y).atan2(p.x - c.x);
        if let Some(t_arc) = angle_to_arc_param(angle, start_angle, sweep) {
            results.push((p, t_seg, t_arc));
        }
    }

    results
}

/// Intersection of two circular arcs in 2D.
///
/// Returns `(point, t1, t2)` tuples where `t1` and `t2` are the arc
/// parameters in `[0, 1]`. Concentric arcs report no intersection.
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn arc_arc_intersect_2d(
    c1: &Point2,
    r1: f64,
    start1: f64,
    sweep1: f64,
    c2: &Point2,
    r2: f64,
    start2: f64,
    sweep2: f64,
) -> Vec<(Point2, f64, f64)> {
    let mut results = Vec::new();
    if r1 < TOLERANCE || r2 < TOLERANCE {
        return results;
    }

    let dc = c2 - c1;
    let dist_sq = dc.norm_squared();
    let dist = dist_sq.sqrt();
    if dist < TOLERANCE {
        return results;
    }

    let sum = r1 + r2;
    let diff = (r1 - r2).abs();
    if dist > sum + TOLERANCE || dist < diff - TOLERANCE {
        return results;
    }

    // Distance from c1 along c1→c2 to the radical line.
    let a = (r1 * r1 - r2 * r2 + dist_sq) / (2.0 * dist);
    let h = (r1 * r1 - a * a).max(0.0).sqrt();

    let axis = dc / dist;
    let mid = c1 + axis * a;
    let perp = nalgebra::Vector2::new(-axis.y, axis.x);

    let candidates = if h < TOLERANCE {
        vec![mid]
    } else {
        vec![mid + perp * h, mid - perp * h]
    };

    for p in candidates {
        let angle1 = (p.y - c1.y).atan2(p.x - c1.x);
        let angle2 = (p.y - c2.y).atan2(p.x - c2.x);
        if let (Some(t1), Some(t2)) = (
            angle_to_arc_param(angle1, start1, sweep1),
            angle_to_arc_param(angle2, start2, sweep2),
        ) {
            results.push((p, t1, t2));
        }
    }

    results
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn segment_segment_crossing() {
        let (pt, t, u) =
            segment_segment_intersect_2d(&p(0.0, 0.0), &p(2.0, 2.0), &p(0.0, 2.0), &p(2.0, 0.0))
                .unwrap();
        assert!((pt.x - 1.0).abs() < TOLERANCE);
        assert!((pt.y - 1.0).abs() < TOLERANCE);
        assert!((t - 0.5).abs() < TOLERANCE);
        assert!((u - 0.5).abs() < TOLERANCE);
    }

    #[test]
    fn segment_segment_parallel() {
        assert!(
            segment_segment_intersect_2d(&p(0.0, 0.0), &p(1.0, 0.0), &p(0.0, 1.0), &p(1.0, 1.0))
                .is_none()
        );
    }

    #[test]
    fn segment_arc_two_crossings() {
        let hits = segment_arc_intersect_2d(&p(-2.0, 0.0), &p(2.0, 0.0), &p(0.0, 0.0), 1.0, 0.0, PI);
        assert_eq!(hits.len(), 2, "hits={hits:?}");
        assert!((hits[0].0.x + 1.0).abs() < 1e-9);
        assert!((hits[1].0.x - 1.0).abs() < 1e-9);
    }

    #[test]
    fn segment_arc_tangent() {
        let hits = segment_arc_intersect_2d(&p(-1.0, 1.0), &p(1.0, 1.0), &p(0.0, 0.0), 1.0, 0.0, PI);
        assert_eq!(hits.len(), 1, "hits={hits:?}");
        assert!(hits[0].0.x.abs() < 1e-6);
        assert!((hits[0].2 - 0.5).abs() < 1e-6);
    }

    #[test]
    fn segment_arc_outside_angular_range() {
        let hits = segment_arc_intersect_2d(
            &p(-2.0, 0.0),
            &p(2.0, 0.0),
            &p(0.0, 0.0),
            1.0,
            PI / 4.0,
            PI / 4.0,
        );
        assert!(hits.is_empty(), "hits={hits:?}");
    }

    #[test]
    fn segment_arc_starting_on_arc() {
        // Segment starts on the arc's start point and leaves through the circle again.
        let hits = segment_arc_intersect_2d(&p(0.0, 0.0), &p(4.0, -4.0), &p(1.0, 0.0), 1.0, PI, PI);
        assert_eq!(hits.len(), 2, "hits={hits:?}");
        assert!(hits[0].1.abs() < 1e-9);
        assert!((hits[1].0.x - 1.0).abs() < 1e-9);
        assert!((hits[1].0.y + 1.0).abs() < 1e-9);
    }

    #[test]
    fn arc_arc_two_crossings() {
        let hits = arc_arc_intersect_2d(
            &p(0.0, 0.0), 1.0, -PI, 2.0 * PI,
            &p(1.0, 0.0), 1.0, 0.0, 2.0 * PI,
        );
        assert_eq!(hits.len(), 2, "hits={hits:?}");
        let sqrt3_2 = 3.0_f64.sqrt() / 2.0;
        for (pt, _, _) in &hits {
            assert!((pt.x - 0.5).abs() < 1e-9);
            assert!((pt.y.abs() - sqrt3_2).abs() < 1e-9);
        }
    }

    #[test]
    fn arc_arc_disjoint() {
        let hits = arc_arc_intersect_2d(
            &p(0.0, 0.0), 1.0, 0.0, PI,
            &p(5.0, 0.0), 1.0, 0.0, PI,
        );
        assert!(hits.is_empty());
    }
}
