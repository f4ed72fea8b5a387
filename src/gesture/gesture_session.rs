//! Per-algorithm collection of the world points configuring a clipping shape.

use super::staged_adjustment;
use crate::math::{Isometry, Point};
use crate::query::ClipError;
use crate::shape::{
    ClippingShape, Cone, ConvexPolygon, Cylinder, HalfSpace, Line, ShapeType, MIN_POLYGON_POINTS,
};
use crate::tool::{PointerClick, ToolSettings, ViewState};
use crate::utils;
use smallvec::SmallVec;

/// The number of points (including the side hint) of a half-space gesture.
const HALF_SPACE_POINTS: usize = 4;

/// The phase of a [`GestureSession`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum GesturePhase {
    /// Waiting for the first point of a plane.
    #[default]
    AwaitingP0,
    /// Waiting for the second point of a plane.
    AwaitingP1,
    /// Waiting for the third point of a plane.
    AwaitingP2,
    /// Waiting for a point on the side of the plane to erase.
    AwaitingSideHint,
    /// Accumulating the near/far pairs of a polygon, until a modified click finalizes it.
    CollectingVertices,
    /// Following the pointer or the 3D cursor until a commit.
    Tracking,
    /// Every parameter was captured; the shape can be built.
    Ready,
}

/// The points and events captured so far for one clipping gesture.
#[derive(Clone, Debug, PartialEq)]
pub struct GestureSession {
    shape_type: ShapeType,
    phase: GesturePhase,
    points: SmallVec<[Point; 8]>,
    side_hint: Option<Point>,
    ray: Option<(Point, Point)>,
}

impl GestureSession {
    /// A new session in the initial phase of `shape_type`.
    pub fn new(shape_type: ShapeType) -> Self {
        GestureSession {
            shape_type,
            phase: Self::initial_phase(shape_type),
            points: SmallVec::new(),
            side_hint: None,
            ray: None,
        }
    }

    fn initial_phase(shape_type: ShapeType) -> GesturePhase {
        match shape_type {
            ShapeType::HalfSpace2D | ShapeType::HalfSpace3D => GesturePhase::AwaitingP0,
            ShapeType::ConvexPolygon => GesturePhase::CollectingVertices,
            ShapeType::Cone | ShapeType::Cylinder => GesturePhase::Tracking,
        }
    }

    /// The algorithm this session configures.
    #[inline]
    pub fn shape_type(&self) -> ShapeType {
        self.shape_type
    }

    /// The current phase.
    #[inline]
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// The points captured so far, side hint excluded.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The captured side hint, if any.
    #[inline]
    pub fn side_hint(&self) -> Option<&Point> {
        self.side_hint.as_ref()
    }

    /// The last picking ray tracked by a cone gesture.
    #[inline]
    pub fn ray(&self) -> Option<&(Point, Point)> {
        self.ray.as_ref()
    }

    /// Whether the shape can be built from the captured points.
    #[inline]
    pub fn is_ready(&self) -> bool {
        self.phase == GesturePhase::Ready
    }

    /// The number of points captured so far, side hint included.
    pub fn num_captured(&self) -> usize {
        self.points.len() + self.side_hint.is_some() as usize
    }

    /// Discards the captured points and goes back to the initial phase.
    ///
    /// The ray tracked by a cone gesture is kept since it follows the pointer.
    pub fn reset(&mut self) {
        self.phase = Self::initial_phase(self.shape_type);
        self.points.clear();
        self.side_hint = None;
    }

    /// Feeds a pointer click, given as the world-space points under the pointer on the camera
    /// near and far planes.
    ///
    /// Returns the phase reached. A click that would make a plane degenerate is rejected with
    /// [`ClipError::DegeneratePlane`], and finalizing a polygon with less than three pairs is
    /// rejected with [`ClipError::InsufficientPoints`]; in both cases the session is unchanged.
    pub fn on_pointer(
        &mut self,
        near: Point,
        far: Point,
        click: PointerClick,
    ) -> Result<GesturePhase, ClipError> {
        match (self.shape_type, self.phase) {
            (ShapeType::HalfSpace2D | ShapeType::HalfSpace3D, GesturePhase::Ready)
            | (ShapeType::ConvexPolygon, GesturePhase::Ready) => {
                log::debug!("Ignoring click: the {} gesture is complete.", self.shape_type);
            }
            (ShapeType::HalfSpace2D | ShapeType::HalfSpace3D, GesturePhase::AwaitingP0) => {
                self.points.push(near);
                self.phase = GesturePhase::AwaitingP1;
            }
            (ShapeType::HalfSpace3D, GesturePhase::AwaitingP1) => {
                self.points.push(near);
                self.phase = GesturePhase::AwaitingP2;
            }
            (ShapeType::HalfSpace3D, GesturePhase::AwaitingP2) => {
                let _ = utils::plane_normal(&self.points[0], &self.points[1], &near)?;
                self.points.push(near);
                self.phase = GesturePhase::AwaitingSideHint;
            }
            (ShapeType::HalfSpace2D, GesturePhase::AwaitingP1) => {
                let _ = utils::plane_normal(&self.points[0], &near, &far)?;
                self.points.push(near);
                self.points.push(far);
                self.phase = GesturePhase::AwaitingSideHint;
            }
            (_, GesturePhase::AwaitingSideHint) => {
                self.side_hint = Some(near);
                self.phase = GesturePhase::Ready;
            }
            (ShapeType::ConvexPolygon, _) => match click {
                PointerClick::Plain => self.points.extend([near, far]),
                PointerClick::WithModifier => self.finalize_polygon(near)?,
            },
            (ShapeType::Cone, _) => {
                self.track_pointer(near, far)?;
                self.phase = GesturePhase::Ready;
            }
            (ShapeType::Cylinder, _) => self.phase = GesturePhase::Ready,
            (_, phase) => {
                log::debug!("Ignoring click in phase {:?}.", phase);
            }
        }

        log::debug!(
            "{} gesture: {} point(s) captured, now {:?}.",
            self.shape_type,
            self.num_captured(),
            self.phase
        );
        Ok(self.phase)
    }

    fn finalize_polygon(&mut self, side_hint: Point) -> Result<(), ClipError> {
        match ConvexPolygon::new(self.points.to_vec(), &side_hint) {
            Ok(_) => {
                self.side_hint = Some(side_hint);
                self.phase = GesturePhase::Ready;
                Ok(())
            }
            Err(err @ ClipError::InsufficientPoints { .. }) => Err(err),
            Err(err) => {
                log::warn!("Discarding the polygon gesture: {}.", err);
                self.reset();
                Err(err)
            }
        }
    }

    /// Follows the picking ray under the pointer. Only cone gestures track the pointer.
    ///
    /// Fails with [`ClipError::DegenerateLine`] if `near` and `far` coincide.
    pub fn track_pointer(&mut self, near: Point, far: Point) -> Result<(), ClipError> {
        if self.shape_type == ShapeType::Cone {
            let _ = Line::new(near, far)?;
            self.ray = Some((near, far));
        }

        Ok(())
    }

    /// Builds the clipping shape configured by this session.
    ///
    /// Point-based gestures fail with [`ClipError::InsufficientPoints`] until they are
    /// [`Self::is_ready`]. A cone fails with [`ClipError::NotConfigured`] before the pointer was
    /// tracked. A cylinder is always built around the `+Y` axis of `cursor`.
    pub fn build(
        &self,
        settings: &ToolSettings,
        view: &ViewState,
        cursor: &Isometry,
    ) -> Result<ClippingShape, ClipError> {
        match self.shape_type {
            ShapeType::HalfSpace2D | ShapeType::HalfSpace3D => {
                let (Some(hint), [p0, p1, p2]) = (self.side_hint, &self.points[..]) else {
                    return Err(ClipError::InsufficientPoints {
                        required: HALF_SPACE_POINTS,
                        captured: self.num_captured(),
                    });
                };

                if self.shape_type == ShapeType::HalfSpace2D {
                    Ok(ClippingShape::HalfSpace2D(HalfSpace::from_points(
                        p0, p1, p2, &hint,
                    )?))
                } else {
                    let normal = utils::plane_normal(p0, p1, p2)?;
                    Ok(ClippingShape::HalfSpace3D(HalfSpace::oriented_toward(
                        normal.into_inner(),
                        *p0,
                        &hint,
                    )?))
                }
            }
            ShapeType::ConvexPolygon => {
                let Some(hint) = self.side_hint else {
                    return Err(if self.points.len() < MIN_POLYGON_POINTS {
                        ClipError::InsufficientPoints {
                            required: MIN_POLYGON_POINTS,
                            captured: self.points.len(),
                        }
                    } else {
                        ClipError::NotFinalized
                    });
                };
                Ok(ConvexPolygon::new(self.points.to_vec(), &hint)?.into())
            }
            ShapeType::Cone => {
                let (near, far) = self.ray.ok_or(ClipError::NotConfigured)?;
                Ok(Cone::from_screen_ray(
                    near,
                    far,
                    view.near_clip_distance,
                    settings.cone_cursor_size,
                )?
                .into())
            }
            ShapeType::Cylinder => {
                let axis = staged_adjustment::cursor_axis(cursor)?;
                Ok(Cylinder::new(axis, settings.cylinder_radius)?.into())
            }
        }
    }
}
