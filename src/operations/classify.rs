use crate::error::{GeometryError, Result};
use crate::math::{almost_eq, almost_zero, TOLERANCE};
use crate::topology::FaceData;

/// Semantic role of a bounding face, decided by its normal direction.
///
/// Classification is total and mutually exclusive within tolerance:
/// every face lands in exactly one class, and `Unclassified` faces are
/// simply excluded from all area sums instead of raising an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceClass {
    /// Normal points straight up: a landing top surface.
    Upward,
    /// Normal points straight down: a landing soffit.
    Downward,
    /// Underside of a run matching its slope (or any ruled face of a
    /// spiral run).
    Soffit,
    /// Normal is horizontal: a side-face candidate.
    Vertical,
    /// None of the above; not finish-relevant.
    Unclassified,
}

/// Classifies faces by the Z component of their outward normal.
#[derive(Debug, Clone, Copy)]
pub struct FaceClassifier {
    soffit_normal_z: f64,
    spiral: bool,
}

impl FaceClassifier {
    /// Builds the classifier for a run of the given style.
    ///
    /// The inclined underside of a straight or winder run has an
    /// outward normal with `z = -cos(atan(riser_height / tread_depth))`.
    /// Spiral soffits are not single-plane; their classifier flags any
    /// ruled face as soffit instead of slope-matching.
    ///
    /// # Errors
    ///
    /// Returns an error if the tread depth is not positive.
    pub fn for_run(tread_depth: f64, riser_height: f64, spiral: bool) -> Result<Self> {
        if tread_depth < TOLERANCE {
            return Err(GeometryError::Degenerate("tread depth must be positive".into()).into());
        }
        let slope = riser_height / tread_depth;
        Ok(Self {
            soffit_normal_z: -slope.atan().cos(),
            spiral,
        })
    }

    /// Builds the classifier for a landing.
    ///
    /// Landing soffits face straight down, so the downward test covers
    /// them and no slope matching applies.
    #[must_use]
    pub fn for_landing() -> Self {
        Self {
            soffit_normal_z: -1.0,
            spiral: false,
        }
    }

    /// The expected normal Z of a slope-matching soffit face.
    #[must_use]
    pub fn soffit_normal_z(&self) -> f64 {
        self.soffit_normal_z
    }

    /// Classifies a face.
    ///
    /// The normal is evaluated at the centroid parameter for planar
    /// faces and at the origin for ruled ones. A face whose normal
    /// cannot be evaluated is `Unclassified`.
    #[must_use]
    pub fn classify(&self, face: &FaceData) -> FaceClass {
        if self.spiral && face.is_ruled() {
            return FaceClass::Soffit;
        }

        let (u, v) = if face.is_ruled() { (0.0, 0.0) } else { (0.5, 0.5) };
        let Ok(normal) = face.normal_at(u, v) else {
            return FaceClass::Unclassified;
        };

        let nz = normal.z;
        if almost_eq(nz, 1.0) {
            FaceClass::Upward
        } else if almost_eq(nz, -1.0) {
            FaceClass::Downward
        } else if !self.spiral && almost_eq(nz, self.soffit_normal_z) {
            FaceClass::Soffit
        } else if almost_zero(nz) {
            FaceClass::Vertical
        } else {
            FaceClass::Unclassified
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{Curve, Line, Plane, Ruled};
    use crate::math::{Point3, Vector3};

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn planar_face(normal: Vector3) -> FaceData {
        let plane = Plane::from_normal(p(0.0, 0.0, 0.0), normal).unwrap();
        FaceData::planar(plane, Vec::new(), true)
    }

    fn ruled_face() -> FaceData {
        // Helical-ish strip: rails at different radii and elevations.
        let bottom = Curve::Line(Line::new(p(1.0, 0.0, 0.0), p(0.0, 1.0, 0.5)).unwrap());
        let top = Curve::Line(Line::new(p(2.0, 0.0, 0.5), p(0.0, 2.0, 1.0)).unwrap());
        FaceData::ruled(Ruled::new(bottom, top), Vec::new(), 1.0)
    }

    fn run_classifier() -> FaceClassifier {
        FaceClassifier::for_run(0.28, 0.18, false).unwrap()
    }

    #[test]
    fn horizontal_faces() {
        let c = FaceClassifier::for_landing();
        assert_eq!(
            c.classify(&planar_face(Vector3::new(0.0, 0.0, 1.0))),
            FaceClass::Upward
        );
        assert_eq!(
            c.classify(&planar_face(Vector3::new(0.0, 0.0, -1.0))),
            FaceClass::Downward
        );
    }

    #[test]
    fn vertical_face() {
        let c = run_classifier();
        assert_eq!(
            c.classify(&planar_face(Vector3::new(1.0, 0.0, 0.0))),
            FaceClass::Vertical
        );
    }

    #[test]
    fn run_soffit_slope_match() {
        let c = run_classifier();
        // For a 0.18 rise over 0.28 going, cos(atan(0.18/0.28)) = 0.28/sqrt(0.28^2+0.18^2)
        let expected = -0.28 / (0.28f64 * 0.28 + 0.18 * 0.18).sqrt();
        assert!((c.soffit_normal_z() - expected).abs() < TOLERANCE);

        let nz = c.soffit_normal_z();
        let ny = (1.0 - nz * nz).sqrt();
        assert_eq!(
            c.classify(&planar_face(Vector3::new(0.0, ny, nz))),
            FaceClass::Soffit
        );
    }

    #[test]
    fn mismatched_slope_is_unclassified() {
        let c = run_classifier();
        let sloped = Vector3::new(0.0, 1.0, -1.0).normalize();
        assert_eq!(c.classify(&planar_face(sloped)), FaceClass::Unclassified);
    }

    #[test]
    fn spiral_ruled_face_is_soffit_without_slope_test() {
        let c = FaceClassifier::for_run(0.28, 0.18, true).unwrap();
        assert_eq!(c.classify(&ruled_face()), FaceClass::Soffit);
    }

    #[test]
    fn spiral_planar_slope_face_is_not_soffit() {
        // Scenario: spiral soffit areas come from ruled faces only.
        let c = FaceClassifier::for_run(0.28, 0.18, true).unwrap();
        let nz = FaceClassifier::for_run(0.28, 0.18, false)
            .unwrap()
            .soffit_normal_z();
        let ny = (1.0 - nz * nz).sqrt();
        assert_eq!(
            c.classify(&planar_face(Vector3::new(0.0, ny, nz))),
            FaceClass::Unclassified
        );
    }

    #[test]
    fn landing_classifier_never_slope_matches() {
        let c = FaceClassifier::for_landing();
        let sloped = Vector3::new(0.0, 1.0, -1.0).normalize();
        assert_eq!(c.classify(&planar_face(sloped)), FaceClass::Unclassified);
    }

    #[test]
    fn classification_is_total_near_tolerance() {
        let c = run_classifier();
        let nearly_up = Vector3::new(0.0, 0.0, 1.0 - TOLERANCE / 2.0);
        assert_eq!(c.classify(&planar_face(nearly_up)), FaceClass::Upward);
    }

    #[test]
    fn zero_tread_depth_rejected() {
        assert!(FaceClassifier::for_run(0.0, 0.18, false).is_err());
    }
}
