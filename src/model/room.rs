use crate::error::{GeometryError, Result};
use crate::math::polygon::point_in_polygon_xy;
use crate::math::Point3;

/// An enclosed room volume supporting point containment.
///
/// Implemented by whatever room source the host supplies; the takeoff
/// only ever probes containment and reads the identity pair.
pub trait Room {
    /// Returns whether the point lies inside the room's volume.
    fn contains(&self, point: &Point3) -> bool;

    /// Returns the room number, if assigned.
    fn number(&self) -> Option<&str>;

    /// Returns the room name, if assigned.
    fn name(&self) -> Option<&str>;
}

/// Returns the first room containing the point, scanning in supplied order.
#[must_use]
pub fn first_containing<'a>(rooms: &[&'a dyn Room], point: &Point3) -> Option<&'a dyn Room> {
    rooms.iter().copied().find(|room| room.contains(point))
}

/// A prismatic room: an XY footprint polygon extruded over a Z range.
#[derive(Debug, Clone)]
pub struct PrismRoom {
    footprint: Vec<Point3>,
    z_min: f64,
    z_max: f64,
    number: Option<String>,
    name: Option<String>,
}

impl PrismRoom {
    /// Creates a prismatic room from a footprint polygon and a Z range.
    ///
    /// # Errors
    ///
    /// Returns an error if the footprint has fewer than three vertices
    /// or the Z range is empty.
    pub fn new(footprint: Vec<Point3>, z_min: f64, z_max: f64) -> Result<Self> {
        if footprint.len() < 3 {
            return Err(
                GeometryError::Degenerate("room footprint needs at least 3 vertices".into())
                    .into(),
            );
        }
        if z_max <= z_min {
            return Err(GeometryError::Degenerate("room has an empty Z range".into()).into());
        }
        Ok(Self {
            footprint,
            z_min,
            z_max,
            number: None,
            name: None,
        })
    }

    /// Sets the room's number and name.
    #[must_use]
    pub fn with_identity(mut self, number: impl Into<String>, name: impl Into<String>) -> Self {
        self.number = Some(number.into());
        self.name = Some(name.into());
        self
    }
}

impl Room for PrismRoom {
    fn contains(&self, point: &Point3) -> bool {
        point.z >= self.z_min
            && point.z <= self.z_max
            && point_in_polygon_xy(point.x, point.y, &self.footprint)
    }

    fn number(&self) -> Option<&str> {
        self.number.as_deref()
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}
