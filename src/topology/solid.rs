use crate::math::Point3;

slotmap::new_key_type! {
    /// Unique identifier for a solid in the geometry store.
    pub struct SolidId;
}

/// Data associated with a stair element's solid body.
#[derive(Debug, Clone)]
pub struct SolidData {
    centroid: Point3,
}

impl SolidData {
    /// Creates a solid from its precomputed centroid.
    #[must_use]
    pub fn new(centroid: Point3) -> Self {
        Self { centroid }
    }

    /// Returns the solid's centroid.
    #[must_use]
    pub fn centroid(&self) -> &Point3 {
        &self.centroid
    }
}
