use crate::query::ClipError;
use crate::shape::{Cone, ConvexPolygon, Cylinder, HalfSpace};
use alloc::string::ToString;
use core::fmt;
use core::str::FromStr;

/// Enum representing the type of a clipping shape.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ShapeType {
    /// A half-space built from a screen-space line and a side click.
    HalfSpace2D,
    /// A half-space built from three world points or from a 3D cursor.
    HalfSpace3D,
    /// A screen-space eraser cone.
    Cone,
    /// An infinite cylinder eraser.
    Cylinder,
    /// A convex polygon extruded through the view depth.
    ConvexPolygon,
}

impl ShapeType {
    /// Every clipping algorithm, in the order of their numeric identifiers.
    pub const ALL: [ShapeType; 5] = [
        ShapeType::Cone,
        ShapeType::HalfSpace2D,
        ShapeType::ConvexPolygon,
        ShapeType::Cylinder,
        ShapeType::HalfSpace3D,
    ];

    /// The numeric identifier meaning "no clipping tool".
    pub const NONE_ID: u32 = 5;

    /// Parses a numeric algorithm identifier.
    ///
    /// Returns `Ok(None)` for [`Self::NONE_ID`] and fails with [`ClipError::InvalidAlgorithm`]
    /// for unknown identifiers.
    pub fn from_id(id: u32) -> Result<Option<Self>, ClipError> {
        if id == Self::NONE_ID {
            return Ok(None);
        }

        Self::ALL
            .get(id as usize)
            .copied()
            .map(Some)
            .ok_or_else(|| ClipError::InvalidAlgorithm(id.to_string()))
    }

    /// The numeric identifier of this algorithm.
    pub fn id(self) -> u32 {
        match self {
            ShapeType::Cone => 0,
            ShapeType::HalfSpace2D => 1,
            ShapeType::ConvexPolygon => 2,
            ShapeType::Cylinder => 3,
            ShapeType::HalfSpace3D => 4,
        }
    }

    /// The textual name of this algorithm.
    pub fn name(self) -> &'static str {
        match self {
            ShapeType::HalfSpace2D => "half_space_2d",
            ShapeType::HalfSpace3D => "half_space_3d",
            ShapeType::Cone => "cone",
            ShapeType::Cylinder => "cylinder",
            ShapeType::ConvexPolygon => "convex_polygon",
        }
    }

    /// Whether this algorithm can be driven by a persistent 3D cursor (staged adjustment).
    pub fn is_cursor_driven(self) -> bool {
        matches!(self, ShapeType::Cylinder | ShapeType::HalfSpace3D)
    }
}

impl fmt::Display for ShapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for ShapeType {
    type Err = ClipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ClipError::InvalidAlgorithm(s.to_string()))
    }
}

/// A fully configured clipping shape.
///
/// Each variant answers the same question: should a given world-space point be hidden? See
/// [`PointQuery`](crate::query::PointQuery).
#[derive(Debug, Clone, PartialEq)]
pub enum ClippingShape {
    /// A half-space configured from a screen-space gesture.
    HalfSpace2D(HalfSpace),
    /// A half-space configured from world points or a 3D cursor.
    HalfSpace3D(HalfSpace),
    /// A cone following a screen-space cursor.
    Cone(Cone),
    /// An infinite cylinder.
    Cylinder(Cylinder),
    /// An extruded convex polygon.
    ConvexPolygon(ConvexPolygon),
}

impl ClippingShape {
    /// The type of this shape.
    pub fn shape_type(&self) -> ShapeType {
        match self {
            ClippingShape::HalfSpace2D(_) => ShapeType::HalfSpace2D,
            ClippingShape::HalfSpace3D(_) => ShapeType::HalfSpace3D,
            ClippingShape::Cone(_) => ShapeType::Cone,
            ClippingShape::Cylinder(_) => ShapeType::Cylinder,
            ClippingShape::ConvexPolygon(_) => ShapeType::ConvexPolygon,
        }
    }
}

impl From<Cone> for ClippingShape {
    fn from(cone: Cone) -> Self {
        ClippingShape::Cone(cone)
    }
}

impl From<Cylinder> for ClippingShape {
    fn from(cylinder: Cylinder) -> Self {
        ClippingShape::Cylinder(cylinder)
    }
}

impl From<ConvexPolygon> for ClippingShape {
    fn from(polygon: ConvexPolygon) -> Self {
        ClippingShape::ConvexPolygon(polygon)
    }
}
