// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Curve geometry for line-like elements

use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// A 3D point in document units (simplified for serialization)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3D {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn to_nalgebra(&self) -> Point3<f64> {
        Point3::new(self.x, self.y, self.z)
    }

    pub fn from_nalgebra(p: &Point3<f64>) -> Self {
        Self {
            x: p.x,
            y: p.y,
            z: p.z,
        }
    }

    pub fn distance_to(&self, other: &Point3D) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let dz = other.z - self.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

/// Parametric curve carried by a curve element.
///
/// Bound curves have two well-defined endpoints. An unbound line is an
/// infinite construction line; it can be selected but never converted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum CurveGeometry {
    /// Straight segment between two points
    Line { start: Point3D, end: Point3D },
    /// Circular arc between two points around a center
    Arc {
        start: Point3D,
        end: Point3D,
        center: Point3D,
    },
    /// Infinite line through an origin (no endpoints)
    UnboundLine { origin: Point3D, direction: Point3D },
}

impl CurveGeometry {
    pub fn line(start: Point3D, end: Point3D) -> Self {
        CurveGeometry::Line { start, end }
    }

    pub fn arc(start: Point3D, end: Point3D, center: Point3D) -> Self {
        CurveGeometry::Arc { start, end, center }
    }

    pub fn unbound_line(origin: Point3D, direction: Point3D) -> Self {
        CurveGeometry::UnboundLine { origin, direction }
    }

    /// Whether both endpoints are defined
    pub fn is_bound(&self) -> bool {
        !matches!(self, CurveGeometry::UnboundLine { .. })
    }

    /// Endpoints of a bound curve, `None` for unbound geometry
    pub fn endpoints(&self) -> Option<(Point3D, Point3D)> {
        match self {
            CurveGeometry::Line { start, end } => Some((*start, *end)),
            CurveGeometry::Arc { start, end, .. } => Some((*start, *end)),
            CurveGeometry::UnboundLine { .. } => None,
        }
    }

    /// Straight-run length between the endpoints, `None` for unbound geometry.
    ///
    /// For arcs this is the chord, not the arc length; segment creation
    /// treats every curve as a straight run.
    pub fn chord_length(&self) -> Option<f64> {
        self.endpoints().map(|(s, e)| s.distance_to(&e))
    }
}
