use crate::error::Result;
use crate::geometry::Curve;
use crate::math::{almost_zero, Point3, Vector3};
use crate::model::Room;
use crate::topology::{FaceData, FaceId, GeometryStore};

/// Outward offset applied to probe points, in model units (meters).
///
/// A few centimeters of slack absorbs modeling imprecision between the
/// stair envelope and the room boundary.
pub const PROBE_OFFSET: f64 = 0.05;

/// Side-face candidates split by room adjacency.
///
/// The partition is an explicit value so that the finish-area and
/// skirting computations are pure functions of it.
#[derive(Debug, Default)]
pub struct SidePartition {
    /// Faces whose probe point lies inside the associated room; their
    /// area counts as finished.
    pub room_facing: Vec<FaceId>,
    /// Faces whose probe point lies outside the room (against a wall);
    /// they feed the skirting computation.
    pub wall_facing: Vec<FaceId>,
}

/// Splits vertical side-face candidates into room-facing and
/// wall-facing groups using a point-in-room probe.
pub struct RoomAdjacencyPartition<'a> {
    room: Option<&'a dyn Room>,
}

impl<'a> RoomAdjacencyPartition<'a> {
    /// Creates the partitioner for the staircase's associated room,
    /// or `None` when no room contains it.
    #[must_use]
    pub fn new(room: Option<&'a dyn Room>) -> Self {
        Self { room }
    }

    /// Executes the partition over the candidates surviving the path
    /// filter, keeping only vertical faces.
    ///
    /// Without an associated room every candidate is conservatively
    /// room-facing. Faces whose normal cannot be evaluated or that have
    /// no boundary curves are excluded from both groups.
    ///
    /// # Errors
    ///
    /// Returns an error if a face ID is not in the store.
    pub fn execute(
        &self,
        candidates: &[FaceId],
        store: &GeometryStore,
    ) -> Result<SidePartition> {
        let mut partition = SidePartition::default();
        for &face_id in candidates {
            let face = store.face(face_id)?;
            let Ok(normal) = face.normal_at(0.5, 0.5) else {
                continue;
            };
            if !almost_zero(normal.z) {
                continue;
            }

            let room_facing = match self.room {
                None => true,
                Some(room) => match probe_point(face, &normal) {
                    Some(probe) => room.contains(&probe),
                    None => continue,
                },
            };
            if room_facing {
                partition.room_facing.push(face_id);
            } else {
                partition.wall_facing.push(face_id);
            }
        }
        Ok(partition)
    }
}

/// Probe point of a face: the midpoint of its highest boundary curve
/// (greatest combined endpoint elevation, first wins on ties), offset
/// outward along the face normal.
fn probe_point(face: &FaceData, normal: &Vector3) -> Option<Point3> {
    let mut best: Option<(&Curve, f64)> = None;
    for curve in face.loops().iter().flat_map(|lp| lp.curves()) {
        let combined = curve.start().z + curve.end().z;
        match best {
            Some((_, top)) if combined <= top => {}
            _ => best = Some((curve, combined)),
        }
    }
    best.map(|(curve, _)| curve.point_at(0.5) + normal * PROBE_OFFSET)
}
