use std::f64::consts::TAU;

use super::{Point3, TOLERANCE};

/// Plan-view test of whether two bounded segments meet (Z ignored).
///
/// Both a transverse crossing and a collinear overlap count as a meet;
/// parallel but offset segments do not.
#[must_use]
pub fn segment_segment_meet_2d(a0: &Point3, a1: &Point3, b0: &Point3, b1: &Point3) -> bool {
    let dax = a1.x - a0.x;
    let day = a1.y - a0.y;
    let dbx = b1.x - b0.x;
    let dby = b1.y - b0.y;

    let cross = dax * dby - day * dbx;
    if cross.abs() < TOLERANCE {
        return collinear_overlap_2d(a0, a1, b0, b1);
    }

    let dx = b0.x - a0.x;
    let dy = b0.y - a0.y;
    let t = (dx * dby - dy * dbx) / cross;
    let u = (dx * day - dy * dax) / cross;

    // A small epsilon includes endpoint touches.
    let eps = TOLERANCE;
    t >= -eps && t <= 1.0 + eps && u >= -eps && u <= 1.0 + eps
}

/// Overlap test for parallel segments: collinear and sharing more than a point.
fn collinear_overlap_2d(a0: &Point3, a1: &Point3, b0: &Point3, b1: &Point3) -> bool {
    let dax = a1.x - a0.x;
    let day = a1.y - a0.y;
    let len_sq = dax * dax + day * day;
    if len_sq < TOLERANCE * TOLERANCE {
        return false;
    }

    let perp = dax * (b0.y - a0.y) - day * (b0.x - a0.x);
    if perp.abs() / len_sq.sqrt() > TOLERANCE {
        return false;
    }

    let t0 = (dax * (b0.x - a0.x) + day * (b0.y - a0.y)) / len_sq;
    let t1 = (dax * (b1.x - a0.x) + day * (b1.y - a0.y)) / len_sq;
    let (lo, hi) = if t0 <= t1 { (t0, t1) } else { (t1, t0) };
    hi.min(1.0) - lo.max(0.0) > TOLERANCE
}

/// Plan-view test of whether a bounded segment meets a circular arc.
///
/// The arc is given in 2D polar form: center `(cx, cy)`, `radius`,
/// `start_angle` and signed `sweep` in radians, angles measured
/// counter-clockwise from the +X axis.
#[must_use]
#[allow(clippy::similar_names)]
pub fn segment_arc_meet_2d(
    a0: &Point3,
    a1: &Point3,
    cx: f64,
    cy: f64,
    radius: f64,
    start_angle: f64,
    sweep: f64,
) -> bool {
    if radius < TOLERANCE || sweep.abs() < TOLERANCE {
        return false;
    }

    let dx = a1.x - a0.x;
    let dy = a1.y - a0.y;
    let seg_len_sq = dx * dx + dy * dy;
    if seg_len_sq < TOLERANCE * TOLERANCE {
        return false;
    }

    // Substitute the parametric segment into the circle equation:
    // (a0.x + t*dx - cx)^2 + (a0.y + t*dy - cy)^2 = r^2
    let fx = a0.x - cx;
    let fy = a0.y - cy;
    let a = seg_len_sq;
    let b = 2.0 * (fx * dx + fy * dy);
    let c = fx * fx + fy * fy - radius * radius;

    let disc = b * b - 4.0 * a * c;
    if disc < 0.0 {
        return false;
    }
    let sqrt_disc = disc.sqrt();

    let eps = TOLERANCE;
    for t in [(-b - sqrt_disc) / (2.0 * a), (-b + sqrt_disc) / (2.0 * a)] {
        if !(-eps..=1.0 + eps).contains(&t) {
            continue;
        }
        let px = a0.x + t * dx;
        let py = a0.y + t * dy;
        let ang = (py - cy).atan2(px - cx);
        if angle_in_sweep(ang, start_angle, sweep) {
            return true;
        }
    }
    false
}

/// Whether angle `ang` lies within the arc traversal from `start` over `sweep`.
fn angle_in_sweep(ang: f64, start: f64, sweep: f64) -> bool {
    let (from, span) = if sweep >= 0.0 {
        (start, sweep)
    } else {
        (start + sweep, -sweep)
    };
    let mut d = (ang - from).rem_euclid(TAU);
    if d > TAU - TOLERANCE {
        d = 0.0;
    }
    d <= span + TOLERANCE
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn p(x: f64, y: f64) -> Point3 {
        Point3::new(x, y, 0.0)
    }

    #[test]
    fn crossing_segments_meet() {
        assert!(segment_segment_meet_2d(
            &p(-1.0, 0.0),
            &p(1.0, 0.0),
            &p(0.0, -1.0),
            &p(0.0, 1.0),
        ));
    }

    #[test]
    fn endpoint_touch_meets() {
        assert!(segment_segment_meet_2d(
            &p(0.0, 0.0),
            &p(1.0, 0.0),
            &p(1.0, 0.0),
            &p(1.0, 1.0),
        ));
    }

    #[test]
    fn disjoint_segments_do_not_meet() {
        assert!(!segment_segment_meet_2d(
            &p(0.0, 0.0),
            &p(1.0, 0.0),
            &p(0.0, 1.0),
            &p(1.0, 1.0),
        ));
    }

    #[test]
    fn collinear_overlap_meets() {
        assert!(segment_segment_meet_2d(
            &p(0.0, 0.0),
            &p(2.0, 0.0),
            &p(1.0, 0.0),
            &p(3.0, 0.0),
        ));
    }

    #[test]
    fn collinear_disjoint_does_not_meet() {
        assert!(!segment_segment_meet_2d(
            &p(0.0, 0.0),
            &p(1.0, 0.0),
            &p(2.0, 0.0),
            &p(3.0, 0.0),
        ));
    }

    #[test]
    fn collinear_point_touch_is_not_an_overlap() {
        // Parallel case shares exactly one point, not more.
        assert!(!segment_segment_meet_2d(
            &p(0.0, 0.0),
            &p(1.0, 0.0),
            &p(1.0, 0.0),
            &p(2.0, 0.0),
        ));
    }

    #[test]
    fn segment_through_arc_meets() {
        // Quarter arc from angle 0 to pi/2, radius 1, centered at origin.
        let hit = segment_arc_meet_2d(
            &p(0.0, 0.0),
            &p(2.0, 2.0),
            0.0,
            0.0,
            1.0,
            0.0,
            FRAC_PI_2,
        );
        assert!(hit);
    }

    #[test]
    fn segment_crossing_circle_outside_sweep_misses() {
        // Same chord but the arc only covers the opposite quadrant.
        let hit = segment_arc_meet_2d(
            &p(0.0, 0.0),
            &p(2.0, 2.0),
            0.0,
            0.0,
            1.0,
            PI,
            FRAC_PI_2,
        );
        assert!(!hit);
    }

    #[test]
    fn segment_missing_circle_misses() {
        let hit = segment_arc_meet_2d(&p(2.0, 2.0), &p(3.0, 2.0), 0.0, 0.0, 1.0, 0.0, TAU);
        assert!(!hit);
    }

    #[test]
    fn negative_sweep_is_symmetric() {
        // Sweep from pi/2 back to 0 covers the same quadrant.
        let hit = segment_arc_meet_2d(
            &p(0.0, 0.0),
            &p(2.0, 2.0),
            0.0,
            0.0,
            1.0,
            FRAC_PI_2,
            -FRAC_PI_2,
        );
        assert!(hit);
    }
}
