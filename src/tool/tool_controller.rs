use crate::gesture::{
    AdjustmentAxis, ControllerDelta, GesturePhase, GestureSession, StageStep, StagedAdjustment,
};
use crate::math::{Isometry, Point, Real};
use crate::query::ClipError;
use crate::shape::{ClippingShape, Cone, ShapeType};
use crate::tool::{
    ButtonKind, Buttons, ContinuousInput, CursorParameters, PointerClick, TickInput,
    ToolListener, ToolSettings, ViewState,
};
use crate::volume::{self, SweepReport, VolumeAccessor};
use alloc::boxed::Box;
use alloc::vec::Vec;
use core::ops::ControlFlow;

/// Owns the selected clipping algorithm and routes input events to it.
///
/// The controller is driven by its host, once per input tick, through [`Self::tick`] or
/// through the individual `on_*` event methods. Whenever a gesture completes, the configured
/// shape is swept over the bound volume and the gesture restarts, the algorithm staying
/// selected.
///
/// Every failure is reported as a [`ClipError`] and leaves both the volume and the gesture
/// untouched.
pub struct ToolController<V> {
    settings: ToolSettings,
    view: ViewState,
    volume: Option<V>,
    session: Option<GestureSession>,
    adjustment: StagedAdjustment,
    held: Buttons,
    listeners: Vec<Box<dyn ToolListener>>,
}

impl<V: VolumeAccessor> Default for ToolController<V> {
    fn default() -> Self {
        Self::new(ToolSettings::default())
    }
}

impl<V: VolumeAccessor> ToolController<V> {
    /// A controller with no volume bound and no algorithm selected.
    pub fn new(settings: ToolSettings) -> Self {
        ToolController {
            settings,
            view: ViewState::default(),
            volume: None,
            session: None,
            adjustment: StagedAdjustment::default(),
            held: Buttons::empty(),
            listeners: Vec::new(),
        }
    }

    /// The tool settings.
    #[inline]
    pub fn settings(&self) -> &ToolSettings {
        &self.settings
    }

    /// Mutable access to the tool settings.
    #[inline]
    pub fn settings_mut(&mut self) -> &mut ToolSettings {
        &mut self.settings
    }

    /// Sets both eraser sizes to `percent` percents of their defaults.
    pub fn set_cursor_size_percent(&mut self, percent: Real) -> Result<(), ClipError> {
        self.settings = self.settings.with_cursor_size_percent(percent)?;
        Ok(())
    }

    /// The camera parameters.
    #[inline]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Updates the camera parameters.
    pub fn set_view(&mut self, view: ViewState) {
        self.view = view;
    }

    /// Binds the volume to clip, returning the previously bound one.
    pub fn bind_volume(&mut self, volume: V) -> Option<V> {
        self.volume.replace(volume)
    }

    /// Unbinds the volume, returning it.
    pub fn unbind_volume(&mut self) -> Option<V> {
        self.volume.take()
    }

    /// The bound volume.
    #[inline]
    pub fn volume(&self) -> Option<&V> {
        self.volume.as_ref()
    }

    /// Registers a listener notified of tool changes and sweeps.
    pub fn add_listener(&mut self, listener: Box<dyn ToolListener>) {
        self.listeners.push(listener);
    }

    /// The selected clipping algorithm.
    #[inline]
    pub fn current_algorithm(&self) -> Option<ShapeType> {
        self.session.as_ref().map(|s| s.shape_type())
    }

    /// The gesture in progress.
    #[inline]
    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    /// The staged adjustment of the 3D cursor.
    #[inline]
    pub fn adjustment(&self) -> &StagedAdjustment {
        &self.adjustment
    }

    /// Selects a clipping algorithm, or none.
    ///
    /// Any gesture in progress is discarded, the 3D cursor is moved back to the center of the
    /// bound volume, and the listeners are notified.
    pub fn select_algorithm(&mut self, algorithm: Option<ShapeType>) {
        self.session = algorithm.map(GestureSession::new);
        self.adjustment.restart();

        let center = self
            .volume
            .as_ref()
            .map(|v| v.world_bounds().center())
            .unwrap_or_else(Point::origin);
        self.adjustment
            .set_cursor(Isometry::translation(center.x, center.y, center.z));

        match algorithm {
            Some(algorithm) => log::info!("Clipping algorithm set to {}.", algorithm),
            None => log::info!("Clipping disabled."),
        }

        for listener in &mut self.listeners {
            listener.algorithm_changed(algorithm);
        }
    }

    /// Selects a clipping algorithm from its numeric identifier.
    ///
    /// See [`ShapeType::from_id`]. Fails with [`ClipError::InvalidAlgorithm`], keeping the
    /// current selection, if `id` is unknown.
    pub fn select_algorithm_id(&mut self, id: u32) -> Result<(), ClipError> {
        let algorithm = ShapeType::from_id(id)?;
        self.select_algorithm(algorithm);
        Ok(())
    }

    /// Selects a clipping algorithm from its name, `"none"` disabling clipping.
    pub fn select_algorithm_named(&mut self, name: &str) -> Result<(), ClipError> {
        let algorithm = if name.eq_ignore_ascii_case("none") {
            None
        } else {
            Some(name.parse()?)
        };
        self.select_algorithm(algorithm);
        Ok(())
    }

    /// Handles a pointer click given by the world-space points under the pointer on the camera
    /// near and far planes.
    ///
    /// Returns the sweep report if the click completed the gesture.
    pub fn on_pointer_event(
        &mut self,
        near: Point,
        far: Point,
        click: PointerClick,
    ) -> Result<Option<SweepReport>, ClipError> {
        let Some(session) = self.session.as_mut() else {
            return Ok(None);
        };

        if session.on_pointer(near, far, click)? != GesturePhase::Ready {
            Ok(None)
        } else if session.shape_type() == ShapeType::Cylinder {
            self.apply_cursor().map(Some)
        } else {
            self.apply_and_reset().map(Some)
        }
    }

    /// Updates the cursor of the selected algorithm without completing its gesture.
    pub fn on_continuous_update(&mut self, input: ContinuousInput) -> Result<(), ClipError> {
        let Some(session) = self.session.as_mut() else {
            return Ok(());
        };

        match input {
            ContinuousInput::Pointer { near, far } => session.track_pointer(near, far),
            ContinuousInput::Controller(delta) => {
                if session.shape_type().is_cursor_driven() {
                    let _ = self.adjustment.apply_delta(
                        &delta,
                        &self.view.orientation,
                        &self.settings,
                    );
                }
                Ok(())
            }
        }
    }

    /// Handles a controller button being pressed or released.
    ///
    /// `Advance`, `Back` and `Confirm` act when pressed; `Hold` enables controller deltas for as
    /// long as it is pressed. Returns the sweep report if the button applied a shape.
    pub fn on_discrete_button(
        &mut self,
        kind: ButtonKind,
        pressed: bool,
    ) -> Result<Option<SweepReport>, ClipError> {
        if kind == ButtonKind::Hold {
            self.adjustment.set_hold(pressed);
            return Ok(None);
        }

        let Some(algorithm) = self.current_algorithm() else {
            return Ok(None);
        };

        if !pressed {
            return Ok(None);
        }

        match kind {
            ButtonKind::Advance if algorithm.is_cursor_driven() => match self.adjustment.advance() {
                StageStep::Stage(stage) => {
                    log::debug!("Cursor adjustment stage: {:?}.", stage);
                    for listener in &mut self.listeners {
                        listener.stage_changed(stage);
                    }
                    Ok(None)
                }
                StageStep::Fire => self.apply_cursor().map(Some),
            },
            ButtonKind::Back if algorithm.is_cursor_driven() => {
                let stage = self.adjustment.back();
                for listener in &mut self.listeners {
                    listener.stage_changed(stage);
                }
                Ok(None)
            }
            ButtonKind::Confirm if algorithm.is_cursor_driven() => self.apply_cursor().map(Some),
            ButtonKind::Confirm if algorithm == ShapeType::Cone => self.apply_and_reset().map(Some),
            _ => Ok(None),
        }
    }

    /// Rotates or translates the 3D cursor by one discrete step, depending on the adjustment
    /// stage.
    pub fn nudge_cursor(&mut self, axis: AdjustmentAxis, increase: bool) {
        self.adjustment
            .nudge(axis, increase, &self.view.orientation, &self.settings);
    }

    /// Processes everything an input source reported during one tick.
    ///
    /// Buttons are edge-triggered: a button fires once when it becomes pressed and must be
    /// released before firing again. `Advance` wins over `Back` when both become pressed
    /// together. A tick that applied a shape ignores its pointer and controller deltas.
    ///
    /// A cone without a picking ray tracks the pointer before the buttons are handled, so that
    /// `Confirm` can apply it on the same tick. If a button fails, the pointer and controller
    /// deltas are still applied before the error is returned.
    pub fn tick(&mut self, input: &TickInput) -> Result<Option<SweepReport>, ClipError> {
        let pressed = input.buttons.difference(self.held);
        let released = self.held.difference(input.buttons);
        self.held = input.buttons;

        if pressed.contains(Buttons::HOLD) || released.contains(Buttons::HOLD) {
            self.adjustment.set_hold(pressed.contains(Buttons::HOLD));
        }

        let mut pointer = input.pointer;
        let needs_ray = self
            .session
            .as_ref()
            .is_some_and(|s| s.shape_type() == ShapeType::Cone && s.ray().is_none());
        if needs_ray {
            if let Some((near, far)) = pointer.take() {
                self.on_continuous_update(ContinuousInput::Pointer { near, far })?;
            }
        }

        let fired = self.fire_buttons(pressed);
        if let Ok(Some(report)) = fired {
            return Ok(Some(report));
        }

        let updated = self.apply_continuous(pointer, input.delta);
        let report = fired?;
        updated?;
        Ok(report)
    }

    fn fire_buttons(&mut self, pressed: Buttons) -> Result<Option<SweepReport>, ClipError> {
        let mut report = None;

        if pressed.contains(Buttons::ADVANCE) {
            report = self.on_discrete_button(ButtonKind::Advance, true)?;
        } else if pressed.contains(Buttons::BACK) {
            report = self.on_discrete_button(ButtonKind::Back, true)?;
        }

        if report.is_none() && pressed.contains(Buttons::CONFIRM) {
            report = self.on_discrete_button(ButtonKind::Confirm, true)?;
        }

        Ok(report)
    }

    fn apply_continuous(
        &mut self,
        pointer: Option<(Point, Point)>,
        delta: Option<ControllerDelta>,
    ) -> Result<(), ClipError> {
        let tracked = match pointer {
            Some((near, far)) => self.on_continuous_update(ContinuousInput::Pointer { near, far }),
            None => Ok(()),
        };

        if let Some(delta) = delta {
            self.on_continuous_update(ContinuousInput::Controller(delta))?;
        }

        tracked
    }

    /// Builds the shape configured by the gesture in progress, without applying it.
    pub fn current_shape(&self) -> Result<ClippingShape, ClipError> {
        let session = self.session.as_ref().ok_or(ClipError::NotConfigured)?;
        session.build(&self.settings, &self.view, self.adjustment.cursor())
    }

    /// Sweeps the shape configured by the gesture in progress over the bound volume, then
    /// restarts the gesture.
    ///
    /// Fails with [`ClipError::InsufficientPoints`] if the gesture is incomplete, and
    /// [`ClipError::NoVolumeBound`] if no volume is bound. If a listener cancels the sweep, the
    /// gesture is kept so that the same shape can be applied again.
    pub fn apply_and_reset(&mut self) -> Result<SweepReport, ClipError> {
        let shape = self.current_shape()?;
        let report = self.sweep(&shape)?;

        if !report.cancelled {
            if let Some(session) = &mut self.session {
                session.reset();
            }
        }

        Ok(report)
    }

    fn apply_cursor(&mut self) -> Result<SweepReport, ClipError> {
        let algorithm = self.current_algorithm().ok_or(ClipError::NotConfigured)?;
        let shape = self.adjustment.cursor_shape(algorithm, &self.settings)?;
        let report = self.sweep(&shape)?;

        if !report.cancelled {
            self.adjustment.restart();
            if let Some(session) = &mut self.session {
                session.reset();
            }
            for listener in &mut self.listeners {
                listener.stage_changed(self.adjustment.stage());
            }
        }

        Ok(report)
    }

    fn sweep(&mut self, shape: &ClippingShape) -> Result<SweepReport, ClipError> {
        let target = self.volume.as_mut().ok_or(ClipError::NoVolumeBound)?;
        let listeners = &mut self.listeners;

        log::info!("Applying the {} clipping shape.", shape.shape_type());
        let report = volume::sweep_cancellable(target, shape, |progress| {
            let mut flow = ControlFlow::Continue(());
            for listener in listeners.iter_mut() {
                if listener.sweep_progress(&progress).is_break() {
                    flow = ControlFlow::Break(());
                }
            }
            flow
        });

        for listener in &mut self.listeners {
            listener.sweep_finished(&report);
        }

        Ok(report)
    }

    /// The geometric parameters of the shape being configured, for cursor visualization.
    ///
    /// Returns `None` if no algorithm is selected or if the shape cannot be displayed yet.
    pub fn current_predicate_parameters(&self) -> Option<CursorParameters> {
        let session = self.session.as_ref()?;

        match session.shape_type() {
            ShapeType::Cone => {
                let (near, far) = *session.ray()?;
                let cone = Cone::from_screen_ray(
                    near,
                    far,
                    self.view.near_clip_distance,
                    self.settings.cone_cursor_size,
                )
                .ok()?;
                Some(CursorParameters::Cone {
                    axis: [cone.axis().a(), cone.axis().b()],
                    apex: *cone.apex(),
                    radius_factor_sq: cone.radius_factor_sq(),
                })
            }
            ShapeType::Cylinder => {
                let axis = self.adjustment.cursor_axis().ok()?;
                Some(CursorParameters::Cylinder {
                    axis: [axis.a(), axis.b()],
                    radius: self.settings.cylinder_radius,
                })
            }
            ShapeType::HalfSpace3D if session.num_captured() == 0 => {
                let plane = self.adjustment.cursor_plane().ok()?;
                Some(CursorParameters::Plane {
                    point: *plane.point(),
                    normal: *plane.normal(),
                })
            }
            _ => Some(CursorParameters::Points(
                session
                    .points()
                    .iter()
                    .chain(session.side_hint())
                    .copied()
                    .collect(),
            )),
        }
    }
}
