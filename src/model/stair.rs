use crate::geometry::{Curve, CurveLoop};
use crate::topology::{EdgeId, FaceId, SolidId};

/// Plan shape of a stair run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStyle {
    /// Straight flight.
    Straight,
    /// Winder flight (turning with tapered treads).
    Winder,
    /// Spiral flight around a central axis.
    Spiral,
}

/// A single flight of a staircase between landings.
///
/// Geometry (`solids`, `faces`, `edges`, `path`, `footprint`) is the
/// geometry-access collaborator's answer for this element, captured at
/// a fixed level of detail.
#[derive(Debug, Clone)]
pub struct Run {
    /// Element identifier, used in error reports.
    pub id: String,
    /// Plan shape of the run.
    pub style: RunStyle,
    /// Actual run width.
    pub width: f64,
    /// Total vertical rise of the run.
    pub height: f64,
    /// Solid bodies of the run.
    pub solids: Vec<SolidId>,
    /// Bounding faces of the run's solids.
    pub faces: Vec<FaceId>,
    /// Edges of the run's solids.
    pub edges: Vec<EdgeId>,
    /// Walking-path centerline curves.
    pub path: Vec<Curve>,
    /// Horizontal projection boundary of the run.
    pub footprint: CurveLoop,
}

/// A flat platform segment of a staircase connecting runs.
#[derive(Debug, Clone)]
pub struct Landing {
    /// Element identifier, used in error reports.
    pub id: String,
    /// Solid bodies of the landing.
    pub solids: Vec<SolidId>,
    /// Bounding faces of the landing's solids.
    pub faces: Vec<FaceId>,
    /// Edges of the landing's solids.
    pub edges: Vec<EdgeId>,
    /// Walking-path curves across the landing.
    pub path: Vec<Curve>,
}

/// A staircase built from ordered runs and landings.
///
/// Read-only geometric source for one computation pass; parameters are
/// read once and treated as immutable for its duration.
#[derive(Debug, Clone)]
pub struct Staircase {
    /// Staircase identifier, keys the finish result.
    pub id: String,
    /// Actual tread depth.
    pub tread_depth: f64,
    /// Actual riser height.
    pub riser_height: f64,
    /// Configured skirting (baseboard) height.
    pub skirting_height: f64,
    /// Runs in walking order.
    pub runs: Vec<Run>,
    /// Landings in walking order.
    pub landings: Vec<Landing>,
}

impl Staircase {
    /// All faces of all stair elements, runs first, in supplied order.
    #[must_use]
    pub fn all_faces(&self) -> Vec<FaceId> {
        let mut faces: Vec<FaceId> = self
            .runs
            .iter()
            .flat_map(|r| r.faces.iter().copied())
            .collect();
        faces.extend(self.landings.iter().flat_map(|l| l.faces.iter().copied()));
        faces
    }

    /// All edges of all stair elements, runs first, in supplied order.
    #[must_use]
    pub fn all_edges(&self) -> Vec<EdgeId> {
        let mut edges: Vec<EdgeId> = self
            .runs
            .iter()
            .flat_map(|r| r.edges.iter().copied())
            .collect();
        edges.extend(self.landings.iter().flat_map(|l| l.edges.iter().copied()));
        edges
    }

    /// The full walking path: each run's curves, then each landing's.
    #[must_use]
    pub fn walking_path(&self) -> Vec<Curve> {
        let mut path: Vec<Curve> = self
            .runs
            .iter()
            .flat_map(|r| r.path.iter().cloned())
            .collect();
        path.extend(self.landings.iter().flat_map(|l| l.path.iter().cloned()));
        path
    }
}
