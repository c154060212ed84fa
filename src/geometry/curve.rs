use std::f64::consts::TAU;

use crate::error::{GeometryError, Result};
use crate::math::polygon::signed_area_xy;
use crate::math::{Point3, Vector3, TOLERANCE};

/// Chord count used when sampling a full turn of an arc.
const SAMPLES_PER_TURN: f64 = 64.0;

/// A bounded straight segment between two points.
#[derive(Debug, Clone)]
pub struct Line {
    start: Point3,
    end: Point3,
    direction: Vector3,
    length: f64,
}

impl Line {
    /// Creates a new segment from a start and an end point.
    ///
    /// # Errors
    ///
    /// Returns an error if the two points coincide.
    pub fn new(start: Point3, end: Point3) -> Result<Self> {
        let d = end - start;
        let length = d.norm();
        if length < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(Self {
            start,
            end,
            direction: d / length,
            length,
        })
    }

    /// Returns the start point.
    #[must_use]
    pub fn start(&self) -> &Point3 {
        &self.start
    }

    /// Returns the end point.
    #[must_use]
    pub fn end(&self) -> &Point3 {
        &self.end
    }

    /// Returns the unit direction vector from start to end.
    #[must_use]
    pub fn direction(&self) -> &Vector3 {
        &self.direction
    }

    /// Returns the segment length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Evaluates the segment at normalized parameter `t` in `[0, 1]`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point3 {
        self.start + self.direction * (self.length * t)
    }
}

/// A bounded circular arc in 3D space.
///
/// Defined by a center, radius, normal axis and a reference direction
/// for angle zero. The arc sweeps from `start_angle` to `end_angle`
/// (radians) around the normal axis.
#[derive(Debug, Clone)]
pub struct Arc {
    center: Point3,
    radius: f64,
    normal: Vector3,
    ref_dir: Vector3,
    start_angle: f64,
    end_angle: f64,
}

impl Arc {
    /// Creates a new arc.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is non-positive, the sweep is
    /// empty, the normal is zero-length, or the reference direction is
    /// not perpendicular to the normal.
    pub fn new(
        center: Point3,
        radius: f64,
        normal: Vector3,
        ref_dir: Vector3,
        start_angle: f64,
        end_angle: f64,
    ) -> Result<Self> {
        if radius < TOLERANCE {
            return Err(GeometryError::Degenerate("arc radius must be positive".into()).into());
        }
        if (end_angle - start_angle).abs() < TOLERANCE {
            return Err(GeometryError::Degenerate("arc sweep is empty".into()).into());
        }

        let normal_len = normal.norm();
        if normal_len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        let normal = normal / normal_len;

        let ref_len = ref_dir.norm();
        if ref_len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        let ref_dir = ref_dir / ref_len;

        if normal.dot(&ref_dir).abs() > TOLERANCE {
            return Err(GeometryError::Degenerate(
                "reference direction must be perpendicular to normal".into(),
            )
            .into());
        }

        Ok(Self {
            center,
            radius,
            normal,
            ref_dir,
            start_angle,
            end_angle,
        })
    }

    /// Returns the center of the arc.
    #[must_use]
    pub fn center(&self) -> &Point3 {
        &self.center
    }

    /// Returns the radius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the unit normal axis.
    #[must_use]
    pub fn normal(&self) -> &Vector3 {
        &self.normal
    }

    /// Returns the unit reference direction for angle zero.
    #[must_use]
    pub fn ref_dir(&self) -> &Vector3 {
        &self.ref_dir
    }

    /// Returns the start angle in radians.
    #[must_use]
    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    /// Returns the signed sweep angle in radians.
    #[must_use]
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// Returns the arc length, `radius * |sweep|`.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.radius * self.sweep().abs()
    }

    fn point_at_angle(&self, theta: f64) -> Point3 {
        let side = self.normal.cross(&self.ref_dir);
        self.center + (self.ref_dir * theta.cos() + side * theta.sin()) * self.radius
    }

    /// Evaluates the arc at normalized parameter `t` in `[0, 1]`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point3 {
        self.point_at_angle(self.start_angle + self.sweep() * t)
    }
}

/// A bounded curve segment: either a straight line or a circular arc.
#[derive(Debug, Clone)]
pub enum Curve {
    /// A straight segment.
    Line(Line),
    /// A circular arc.
    Arc(Arc),
}

impl Curve {
    /// Returns the start point of the curve.
    #[must_use]
    pub fn start(&self) -> Point3 {
        match self {
            Self::Line(line) => *line.start(),
            Self::Arc(arc) => arc.point_at(0.0),
        }
    }

    /// Returns the end point of the curve.
    #[must_use]
    pub fn end(&self) -> Point3 {
        match self {
            Self::Line(line) => *line.end(),
            Self::Arc(arc) => arc.point_at(1.0),
        }
    }

    /// Returns the curve length.
    #[must_use]
    pub fn length(&self) -> f64 {
        match self {
            Self::Line(line) => line.length(),
            Self::Arc(arc) => arc.length(),
        }
    }

    /// Evaluates the curve at normalized parameter `t` in `[0, 1]`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point3 {
        match self {
            Self::Line(line) => line.point_at(t),
            Self::Arc(arc) => arc.point_at(t),
        }
    }

    /// First derivative with respect to the normalized parameter.
    #[must_use]
    pub fn derivative_at(&self, t: f64) -> Vector3 {
        match self {
            Self::Line(line) => line.end() - line.start(),
            Self::Arc(arc) => {
                let theta = arc.start_angle() + arc.sweep() * t;
                let side = arc.normal().cross(arc.ref_dir());
                (arc.ref_dir() * (-theta.sin()) + side * theta.cos())
                    * (arc.radius() * arc.sweep())
            }
        }
    }

    /// Returns the unit direction for straight segments, `None` for arcs.
    #[must_use]
    pub fn direction(&self) -> Option<&Vector3> {
        match self {
            Self::Line(line) => Some(line.direction()),
            Self::Arc(_) => None,
        }
    }
}

/// An ordered, closed chain of curve segments bounding a region.
#[derive(Debug, Clone, Default)]
pub struct CurveLoop {
    curves: Vec<Curve>,
}

impl CurveLoop {
    /// Creates a loop from an ordered set of curves.
    #[must_use]
    pub fn new(curves: Vec<Curve>) -> Self {
        Self { curves }
    }

    /// Returns the curves in supplied order.
    #[must_use]
    pub fn curves(&self) -> &[Curve] {
        &self.curves
    }

    /// Returns a polyline approximation of the loop.
    ///
    /// Straight segments contribute their start point; arcs are sampled
    /// at a fixed angular step. The closing point is not repeated.
    #[must_use]
    pub fn sample_points(&self) -> Vec<Point3> {
        let mut points = Vec::new();
        for curve in &self.curves {
            match curve {
                Curve::Line(line) => points.push(*line.start()),
                Curve::Arc(arc) => {
                    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                    let chords = (arc.sweep().abs() / TAU * SAMPLES_PER_TURN).ceil() as usize;
                    let chords = chords.max(1);
                    for i in 0..chords {
                        #[allow(clippy::cast_precision_loss)]
                        let t = i as f64 / chords as f64;
                        points.push(arc.point_at(t));
                    }
                }
            }
        }
        points
    }

    /// Area of the loop's horizontal (XY) projection.
    #[must_use]
    pub fn area_xy(&self) -> f64 {
        signed_area_xy(&self.sample_points()).abs()
    }
}
