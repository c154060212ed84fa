use std::collections::HashSet;

use crate::error::{GeometryError, Result};
use crate::geometry::Curve;
use crate::math::intersect_2d::{segment_arc_meet_2d, segment_segment_meet_2d};
use crate::math::{almost_eq, Point3};
use crate::topology::{EdgeId, FaceId, GeometryStore};

/// Removes faces crossed by the stair's nominal walking path.
///
/// Faces of the walking surface test as vertical at certain edges and
/// cannot be told apart from true side faces by normal direction alone.
/// Any edge whose plan projection meets a path curve marks both of its
/// adjacent faces for exclusion; the survivors are genuine side-face
/// candidates.
pub struct PathIntersectionFilter<'a> {
    path: &'a [Curve],
}

impl<'a> PathIntersectionFilter<'a> {
    /// Creates a filter over the full walking path (run curves followed
    /// by landing curves).
    #[must_use]
    pub fn new(path: &'a [Curve]) -> Self {
        Self { path }
    }

    /// Executes the filter, returning the faces not touched by the
    /// walking path, in supplied order.
    ///
    /// Pure vertical edges (endpoints sharing X and Y) carry no
    /// plan-intersection information and are skipped outright.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is empty or an ID is not in the
    /// store.
    pub fn execute(
        &self,
        faces: &[FaceId],
        edges: &[EdgeId],
        store: &GeometryStore,
    ) -> Result<Vec<FaceId>> {
        let Some(first) = self.path.first() else {
            return Err(GeometryError::Degenerate("walking path has no curves".into()).into());
        };
        let level_z = first.start().z;

        let mut excluded: HashSet<FaceId> = HashSet::new();
        for &edge_id in edges {
            let edge = store.edge(edge_id)?;
            let start = edge.curve().start();
            let end = edge.curve().end();

            if almost_eq(start.x, end.x) && almost_eq(start.y, end.y) {
                continue;
            }

            let a0 = Point3::new(start.x, start.y, level_z);
            let a1 = Point3::new(end.x, end.y, level_z);
            if self.path.iter().any(|curve| meets_in_plan(curve, &a0, &a1)) {
                let [side0, side1] = edge.faces();
                excluded.insert(side0);
                excluded.insert(side1);
            }
        }

        Ok(faces
            .iter()
            .copied()
            .filter(|face| !excluded.contains(face))
            .collect())
    }
}

/// Plan-view test of a horizontal segment against one path curve.
///
/// Path curves are assumed to lie in plan (horizontal lines and arcs
/// about a vertical axis), which holds for stair walking paths.
fn meets_in_plan(curve: &Curve, a0: &Point3, a1: &Point3) -> bool {
    match curve {
        Curve::Line(line) => segment_segment_meet_2d(a0, a1, line.start(), line.end()),
        Curve::Arc(arc) => {
            let turn = if arc.normal().z >= 0.0 { 1.0 } else { -1.0 };
            let ref_angle = arc.ref_dir().y.atan2(arc.ref_dir().x);
            segment_arc_meet_2d(
                a0,
                a1,
                arc.center().x,
                arc.center().y,
                arc.radius(),
                ref_angle + turn * arc.start_angle(),
                turn * arc.sweep(),
            )
        }
    }
}
