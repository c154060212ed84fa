use crate::error::Result;
use crate::geometry::{CurveLoop, Plane, Ruled};
use crate::math::polygon::signed_area_uv;
use crate::math::Vector3;

slotmap::new_key_type! {
    /// Unique identifier for a face in the geometry store.
    pub struct FaceId;
}

/// The geometric surface carrying a face.
#[derive(Debug, Clone)]
pub enum FaceSurface {
    /// A planar surface.
    Plane(Plane),
    /// A ruled surface (e.g. a spiral stair soffit).
    Ruled(Ruled),
}

/// Data associated with a bounding face of a stair element's solid.
///
/// A face is a bounded region on a surface, delimited by one or more
/// boundary curve loops (the first being the outer boundary).
#[derive(Debug, Clone)]
pub struct FaceData {
    surface: FaceSurface,
    loops: Vec<CurveLoop>,
    area: f64,
    same_sense: bool,
}

impl FaceData {
    /// Creates a planar face; its area is computed from the boundary
    /// loops projected into the plane (holes subtract when wound
    /// opposite to the outer loop).
    #[must_use]
    pub fn planar(plane: Plane, loops: Vec<CurveLoop>, same_sense: bool) -> Self {
        let mut area = 0.0;
        for lp in &loops {
            let uvs: Vec<(f64, f64)> = lp
                .sample_points()
                .iter()
                .map(|p| plane.project_uv(p))
                .collect();
            area += signed_area_uv(&uvs);
        }
        Self {
            surface: FaceSurface::Plane(plane),
            loops,
            area: area.abs(),
            same_sense,
        }
    }

    /// Creates a ruled face with an externally computed area.
    #[must_use]
    pub fn ruled(patch: Ruled, loops: Vec<CurveLoop>, area: f64) -> Self {
        Self {
            surface: FaceSurface::Ruled(patch),
            loops,
            area,
            same_sense: true,
        }
    }

    /// Returns the underlying surface.
    #[must_use]
    pub fn surface(&self) -> &FaceSurface {
        &self.surface
    }

    /// Returns the boundary curve loops in supplied order.
    #[must_use]
    pub fn loops(&self) -> &[CurveLoop] {
        &self.loops
    }

    /// Returns the face area.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.area
    }

    /// Returns whether the face lies on a ruled surface.
    #[must_use]
    pub fn is_ruled(&self) -> bool {
        matches!(self.surface, FaceSurface::Ruled(_))
    }

    /// Computes the outward unit normal at parameters `(u, v)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface is degenerate at the given
    /// parameters.
    pub fn normal_at(&self, u: f64, v: f64) -> Result<Vector3> {
        let normal = match &self.surface {
            FaceSurface::Plane(plane) => *plane.normal(),
            FaceSurface::Ruled(patch) => patch.normal_at(u, v)?,
        };
        Ok(if self.same_sense { normal } else { -normal })
    }
}
