use crate::error::Result;
use crate::geometry::Curve;
use crate::math::{almost_eq, TOLERANCE};
use crate::topology::{FaceId, GeometryStore};

/// Sums the boundary edge lengths that carry skirting trim.
///
/// Skirting follows the top contour of each wall-facing face plus the
/// riser-height vertical returns at each step nosing, rather than
/// tracing every boundary edge. Multiplying the total by the configured
/// skirting height yields the skirting area.
pub struct SkirtingLength<'a> {
    wall_faces: &'a [FaceId],
    riser_height: f64,
}

impl<'a> SkirtingLength<'a> {
    /// Creates the calculator over the wall-facing face group.
    #[must_use]
    pub fn new(wall_faces: &'a [FaceId], riser_height: f64) -> Self {
        Self {
            wall_faces,
            riser_height,
        }
    }

    /// Executes the calculation, returning the total trim length.
    ///
    /// Per face: every straight boundary edge that is purely vertical
    /// and one riser high counts, plus the single topmost horizontal
    /// boundary edge (first in supplied order on tied elevations).
    ///
    /// # Errors
    ///
    /// Returns an error if a face ID is not in the store.
    pub fn execute(&self, store: &GeometryStore) -> Result<f64> {
        let mut total = 0.0;
        for &face_id in self.wall_faces {
            let face = store.face(face_id)?;

            let mut top: Option<(&Curve, f64)> = None;
            for curve in face.loops().iter().flat_map(|lp| lp.curves()) {
                if let Curve::Line(line) = curve {
                    if almost_eq(line.direction().z.abs(), 1.0)
                        && almost_eq(line.length(), self.riser_height)
                    {
                        total += line.length();
                    }
                }

                let start_z = curve.start().z;
                if !almost_eq(start_z, curve.end().z) {
                    continue;
                }
                match top {
                    Some((_, best_z)) if start_z <= best_z + TOLERANCE => {}
                    _ => top = Some((curve, start_z)),
                }
            }
            if let Some((curve, _)) = top {
                total += curve.length();
            }
        }
        Ok(total)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{CurveLoop, Line, Plane};
    use crate::math::{Point3, Vector3};
    use crate::topology::FaceData;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn face_from_polyline(store: &mut GeometryStore, points: &[Point3]) -> FaceId {
        let plane =
            Plane::from_normal(points[0], Vector3::new(0.0, 1.0, 0.0)).unwrap();
        let mut curves = Vec::new();
        for i in 0..points.len() {
            curves.push(Curve::Line(
                Line::new(points[i], points[(i + 1) % points.len()]).unwrap(),
            ));
        }
        store.add_face(FaceData::planar(plane, vec![CurveLoop::new(curves)], true))
    }

    #[test]
    fn sawtooth_counts_riser_returns_and_top_edge() {
        let mut store = GeometryStore::new();
        // Two-step side face profile in the XZ plane: the stepped top
        // has two riser-height verticals (0.18) and two short treads,
        // with a tall back edge closing the loop.
        let face = face_from_polyline(
            &mut store,
            &[
                p(0.0, 0.0, 0.0),
                p(0.0, 0.0, 0.18),
                p(0.28, 0.0, 0.18),
                p(0.28, 0.0, 0.36),
                p(0.56, 0.0, 0.36),
                p(0.56, 0.0, 0.0),
            ],
        );

        let total = SkirtingLength::new(&[face], 0.18).execute(&store).unwrap();
        // Three verticals, but only the two 0.18 ones match the riser
        // height (the 0.36 back edge does not). Topmost horizontal is
        // the upper tread at z = 0.36, length 0.28.
        assert!((total - (0.18 + 0.18 + 0.28)).abs() < TOLERANCE);
    }

    #[test]
    fn rectangle_counts_only_top_edge() {
        let mut store = GeometryStore::new();
        let face = face_from_polyline(
            &mut store,
            &[
                p(0.0, 0.0, 0.0),
                p(2.8, 0.0, 0.0),
                p(2.8, 0.0, 1.8),
                p(0.0, 0.0, 1.8),
            ],
        );

        // Verticals are 1.8 long, not one riser (0.18).
        let total = SkirtingLength::new(&[face], 0.18).execute(&store).unwrap();
        assert!((total - 2.8).abs() < TOLERANCE);
    }

    #[test]
    fn tied_top_edges_pick_first_in_order() {
        let mut store = GeometryStore::new();
        // Flat-topped profile reaching z = 0.5 twice: a 1.0 plateau,
        // a dip, then a 0.6 plateau at the same elevation.
        let face = face_from_polyline(
            &mut store,
            &[
                p(0.0, 0.0, 0.0),
                p(0.0, 0.0, 0.5),
                p(1.0, 0.0, 0.5),
                p(1.0, 0.0, 0.3),
                p(1.4, 0.0, 0.3),
                p(1.4, 0.0, 0.5),
                p(2.0, 0.0, 0.5),
                p(2.0, 0.0, 0.0),
            ],
        );

        let total = SkirtingLength::new(&[face], 0.18).execute(&store).unwrap();
        // No riser-height verticals; the first z = 0.5 plateau (length
        // 1.0) wins the tie over the later 0.6 one.
        assert!((total - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn length_sum_is_order_independent() {
        let mut store = GeometryStore::new();
        let a = face_from_polyline(
            &mut store,
            &[
                p(0.0, 0.0, 0.0),
                p(1.0, 0.0, 0.0),
                p(1.0, 0.0, 0.5),
                p(0.0, 0.0, 0.5),
            ],
        );
        let b = face_from_polyline(
            &mut store,
            &[
                p(0.0, 1.0, 0.0),
                p(2.0, 1.0, 0.0),
                p(2.0, 1.0, 0.5),
                p(0.0, 1.0, 0.5),
            ],
        );

        let forward = SkirtingLength::new(&[a, b], 0.18).execute(&store).unwrap();
        let reverse = SkirtingLength::new(&[b, a], 0.18).execute(&store).unwrap();
        assert!((forward - reverse).abs() < TOLERANCE);
        assert!((forward - 3.0).abs() < TOLERANCE);
    }

    #[test]
    fn empty_group_yields_zero() {
        let store = GeometryStore::new();
        let total = SkirtingLength::new(&[], 0.18).execute(&store).unwrap();
        assert!(total.abs() < TOLERANCE);
    }
}
