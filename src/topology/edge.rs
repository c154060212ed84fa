use crate::geometry::Curve;

use super::face::FaceId;

slotmap::new_key_type! {
    /// Unique identifier for an edge in the geometry store.
    pub struct EdgeId;
}

/// Data associated with a solid's edge.
///
/// Under the manifold assumption every edge borders exactly two faces,
/// addressable as side 0 and side 1.
#[derive(Debug, Clone)]
pub struct EdgeData {
    curve: Curve,
    faces: [FaceId; 2],
}

impl EdgeData {
    /// Creates an edge from its curve and the two adjacent faces.
    #[must_use]
    pub fn new(curve: Curve, side0: FaceId, side1: FaceId) -> Self {
        Self {
            curve,
            faces: [side0, side1],
        }
    }

    /// Returns the underlying curve.
    #[must_use]
    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    /// Returns the two adjacent faces, side 0 first.
    #[must_use]
    pub fn faces(&self) -> [FaceId; 2] {
        self.faces
    }
}
