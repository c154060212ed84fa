pub mod edge;
pub mod face;
pub mod solid;

pub use edge::{EdgeData, EdgeId};
pub use face::{FaceData, FaceId, FaceSurface};
pub use solid::{SolidData, SolidId};

use crate::error::TopologyError;
use slotmap::SlotMap;

/// Central arena that owns all B-rep entities of a computation pass.
///
/// Entities reference each other via typed IDs (generational indices),
/// avoiding self-referential structures. The store is the answer of the
/// geometry-access collaborator, captured once at a fixed level of
/// detail, and is read-only during a takeoff.
#[derive(Debug, Default)]
pub struct GeometryStore {
    faces: SlotMap<FaceId, FaceData>,
    edges: SlotMap<EdgeId, EdgeData>,
    solids: SlotMap<SolidId, SolidData>,
}

impl GeometryStore {
    /// Creates a new, empty geometry store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a face and returns its ID.
    pub fn add_face(&mut self, data: FaceData) -> FaceId {
        self.faces.insert(data)
    }

    /// Returns a reference to the face data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn face(&self, id: FaceId) -> Result<&FaceData, TopologyError> {
        self.faces
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("face".into()))
    }

    /// Inserts an edge and returns its ID.
    pub fn add_edge(&mut self, data: EdgeData) -> EdgeId {
        self.edges.insert(data)
    }

    /// Returns a reference to the edge data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn edge(&self, id: EdgeId) -> Result<&EdgeData, TopologyError> {
        self.edges
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("edge".into()))
    }

    /// Inserts a solid and returns its ID.
    pub fn add_solid(&mut self, data: SolidData) -> SolidId {
        self.solids.insert(data)
    }

    /// Returns a reference to the solid data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn solid(&self, id: SolidId) -> Result<&SolidData, TopologyError> {
        self.solids
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("solid".into()))
    }
}
