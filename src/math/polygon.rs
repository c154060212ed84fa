use super::Point3;

/// Signed area of a polygon given as 2D coordinate pairs (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_uv(verts: &[(f64, f64)]) -> f64 {
    let n = verts.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let (x0, y0) = verts[i];
        let (x1, y1) = verts[(i + 1) % n];
        sum += x0 * y1 - x1 * y0;
    }
    sum * 0.5
}

/// Signed area of the XY projection of a 3D polygon.
#[must_use]
pub fn signed_area_xy(points: &[Point3]) -> f64 {
    let uvs: Vec<(f64, f64)> = points.iter().map(|p| (p.x, p.y)).collect();
    signed_area_uv(&uvs)
}

/// Point-in-polygon test in the XY plane (Z ignored).
///
/// Uses the winding number algorithm. Returns `true` if the point is
/// inside or on the boundary.
#[must_use]
pub fn point_in_polygon_xy(px: f64, py: f64, polygon: &[Point3]) -> bool {
    if polygon.len() < 3 {
        return false;
    }
    let uvs: Vec<(f64, f64)> = polygon.iter().map(|p| (p.x, p.y)).collect();
    winding_number(px, py, &uvs) != 0
}

/// Winding number of point `(px, py)` with respect to polygon `verts`.
///
/// Non-zero => inside, zero => outside.
fn winding_number(px: f64, py: f64, verts: &[(f64, f64)]) -> i32 {
    let n = verts.len();
    let mut winding = 0i32;
    for i in 0..n {
        let (x0, y0) = verts[i];
        let (x1, y1) = verts[(i + 1) % n];

        if y0 <= py {
            if y1 > py && cross_2d(x1 - x0, y1 - y0, px - x0, py - y0) > 0.0 {
                winding += 1;
            }
        } else if y1 <= py && cross_2d(x1 - x0, y1 - y0, px - x0, py - y0) < 0.0 {
            winding -= 1;
        }
    }
    winding
}

/// 2D cross product: `(ax * by - ay * bx)`.
#[inline]
fn cross_2d(ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    ax * by - ay * bx
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn signed_area_ccw_square() {
        let pts = vec![
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(1.0, 1.0, 0.0),
            p(0.0, 1.0, 0.0),
        ];
        assert!((signed_area_xy(&pts) - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_cw_square() {
        let pts = vec![
            p(0.0, 0.0, 0.0),
            p(0.0, 1.0, 0.0),
            p(1.0, 1.0, 0.0),
            p(1.0, 0.0, 0.0),
        ];
        assert!((signed_area_xy(&pts) + 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_degenerate() {
        assert!(signed_area_xy(&[p(0.0, 0.0, 0.0)]).abs() < TOLERANCE);
        assert!(signed_area_xy(&[]).abs() < TOLERANCE);
    }

    #[test]
    fn area_ignores_z() {
        let pts = vec![
            p(0.0, 0.0, 3.0),
            p(2.0, 0.0, 5.0),
            p(2.0, 1.0, 7.0),
            p(0.0, 1.0, 3.0),
        ];
        assert!((signed_area_xy(&pts) - 2.0).abs() < TOLERANCE);
    }

    #[test]
    fn point_inside_square() {
        let sq = vec![
            p(0.0, 0.0, 0.0),
            p(2.0, 0.0, 0.0),
            p(2.0, 2.0, 0.0),
            p(0.0, 2.0, 0.0),
        ];
        assert!(point_in_polygon_xy(1.0, 1.0, &sq));
        assert!(!point_in_polygon_xy(3.0, 1.0, &sq));
        assert!(!point_in_polygon_xy(-0.5, 0.5, &sq));
    }

    #[test]
    fn point_inside_concave() {
        // L-shape with a notch at the top right
        let poly = vec![
            p(0.0, 0.0, 0.0),
            p(3.0, 0.0, 0.0),
            p(3.0, 1.0, 0.0),
            p(1.0, 1.0, 0.0),
            p(1.0, 3.0, 0.0),
            p(0.0, 3.0, 0.0),
        ];
        assert!(point_in_polygon_xy(0.5, 2.0, &poly));
        assert!(point_in_polygon_xy(2.0, 0.5, &poly));
        assert!(!point_in_polygon_xy(2.0, 2.0, &poly));
    }

    #[test]
    fn degenerate_polygon_contains_nothing() {
        assert!(!point_in_polygon_xy(0.0, 0.0, &[p(0.0, 0.0, 0.0)]));
    }
}
