use crate::filled_cube;
use core::f64::consts::FRAC_PI_2;
use core::ops::ControlFlow;
use na::{Point3, Vector3};
use std::cell::RefCell;
use std::rc::Rc;
use volclip3d::gesture::{AdjustmentAxis, AdjustmentStage, ControllerDelta, GesturePhase};
use volclip3d::query::ClipError;
use volclip3d::shape::ShapeType;
use volclip3d::tool::{
    ButtonKind, Buttons, ContinuousInput, CursorParameters, PointerClick, TickInput,
    ToolController, ToolListener, ToolSettings, ViewState,
};
use volclip3d::volume::{DenseVolume, SweepProgress, SweepReport, VolumeAccessor};

#[derive(Debug, PartialEq)]
enum Event {
    Algorithm(Option<ShapeType>),
    Stage(AdjustmentStage),
    Progress(usize),
    Finished(usize),
}

#[derive(Default)]
struct Recorder {
    events: Rc<RefCell<Vec<Event>>>,
    // Cancels the first sweep reaching this slice.
    cancel_at: Option<usize>,
}

impl ToolListener for Recorder {
    fn algorithm_changed(&mut self, algorithm: Option<ShapeType>) {
        self.events.borrow_mut().push(Event::Algorithm(algorithm));
    }

    fn stage_changed(&mut self, stage: AdjustmentStage) {
        self.events.borrow_mut().push(Event::Stage(stage));
    }

    fn sweep_progress(&mut self, progress: &SweepProgress) -> ControlFlow<()> {
        self.events.borrow_mut().push(Event::Progress(progress.slice));
        if self.cancel_at == Some(progress.slice) {
            self.cancel_at = None;
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }

    fn sweep_finished(&mut self, report: &SweepReport) {
        self.events.borrow_mut().push(Event::Finished(report.hidden));
    }
}

fn recorded_tool(cancel_at: Option<usize>) -> (ToolController<DenseVolume<u16>>, Rc<RefCell<Vec<Event>>>) {
    let events = Rc::new(RefCell::new(Vec::new()));
    let mut tool = ToolController::default();
    tool.add_listener(Box::new(Recorder {
        events: events.clone(),
        cancel_at,
    }));
    (tool, events)
}

#[test]
fn selection_notifies_listeners() {
    let (mut tool, events) = recorded_tool(None);
    tool.select_algorithm(Some(ShapeType::Cone));
    tool.select_algorithm_id(ShapeType::NONE_ID).unwrap();
    tool.select_algorithm_named("convex_polygon").unwrap();

    assert_eq!(
        *events.borrow(),
        [
            Event::Algorithm(Some(ShapeType::Cone)),
            Event::Algorithm(None),
            Event::Algorithm(Some(ShapeType::ConvexPolygon)),
        ]
    );
    assert_eq!(tool.current_algorithm(), Some(ShapeType::ConvexPolygon));
}

#[test]
fn unknown_algorithm_keeps_selection() {
    let mut tool = ToolController::<DenseVolume<u16>>::default();
    tool.select_algorithm(Some(ShapeType::Cylinder));

    assert_eq!(
        tool.select_algorithm_id(17),
        Err(ClipError::InvalidAlgorithm("17".to_string()))
    );
    assert!(matches!(
        tool.select_algorithm_named("lasso"),
        Err(ClipError::InvalidAlgorithm(_))
    ));
    assert_eq!(tool.current_algorithm(), Some(ShapeType::Cylinder));
}

#[test]
fn missing_volume_keeps_gesture() {
    let mut tool = ToolController::<DenseVolume<u16>>::default();
    tool.select_algorithm(Some(ShapeType::HalfSpace3D));

    let clicks = [
        Point3::new(0.0, 0.0, 2.0),
        Point3::new(1.0, 0.0, 2.0),
        Point3::new(0.0, 1.0, 2.0),
    ];
    for p in clicks {
        let _ = tool.on_pointer_event(p, p, PointerClick::Plain).unwrap();
    }

    let hint = Point3::new(0.0, 0.0, 4.0);
    assert_eq!(
        tool.on_pointer_event(hint, hint, PointerClick::Plain),
        Err(ClipError::NoVolumeBound)
    );
    assert_eq!(tool.session().unwrap().phase(), GesturePhase::Ready);

    let _ = tool.bind_volume(filled_cube(4));
    assert_eq!(tool.apply_and_reset().unwrap().hidden, 32);
    assert_eq!(tool.session().unwrap().phase(), GesturePhase::AwaitingP0);
}

#[test]
fn polygon_gesture_through_controller() {
    let (mut tool, events) = recorded_tool(None);
    let _ = tool.bind_volume(filled_cube(4));
    tool.select_algorithm(Some(ShapeType::ConvexPolygon));

    // A square around the central 2x2 column, looking down -Z.
    let ray = |x: f64, y: f64| (Point3::new(x, y, 10.0), Point3::new(x, y, -10.0));
    for (x, y) in [(1.0, 1.0), (3.0, 1.0)] {
        let (near, far) = ray(x, y);
        let _ = tool.on_pointer_event(near, far, PointerClick::Plain).unwrap();
    }

    let (near, far) = ray(2.0, 2.0);
    assert_eq!(
        tool.on_pointer_event(near, far, PointerClick::WithModifier),
        Err(ClipError::InsufficientPoints {
            required: 6,
            captured: 4
        })
    );

    for (x, y) in [(3.0, 3.0), (1.0, 3.0)] {
        let (near, far) = ray(x, y);
        let _ = tool.on_pointer_event(near, far, PointerClick::Plain).unwrap();
    }

    match tool.current_predicate_parameters() {
        Some(CursorParameters::Points(points)) => assert_eq!(points.len(), 8),
        other => panic!("unexpected parameters {other:?}"),
    }

    let report = tool
        .on_pointer_event(near, far, PointerClick::WithModifier)
        .unwrap()
        .unwrap();
    assert_eq!(report.hidden, 16);
    assert_eq!(tool.volume().unwrap().scalar_at(1, 1, 0), 0);
    assert_eq!(tool.volume().unwrap().scalar_at(0, 1, 0), 1);
    assert!(tool.session().unwrap().points().is_empty());

    let events = events.borrow();
    assert_eq!(events.last(), Some(&Event::Finished(16)));
    assert_eq!(
        events.iter().filter(|e| matches!(e, Event::Progress(_))).count(),
        4
    );
}

#[test]
fn cone_follows_pointer_and_fires_on_confirm() {
    let mut tool = ToolController::default();
    let _ = tool.bind_volume(filled_cube(4));
    tool.select_algorithm(Some(ShapeType::Cone));

    assert_eq!(
        tool.on_discrete_button(ButtonKind::Confirm, true),
        Err(ClipError::NotConfigured)
    );
    assert_eq!(tool.current_predicate_parameters(), None);

    // Near clip distance of 0.1 and cursor size of 0.06: the cone radius grows by 0.6 per unit
    // of depth, covering the whole volume more than 10 units away from the eye.
    let near = Point3::new(2.0, 2.0, 14.0);
    let far = Point3::new(2.0, 2.0, -100.0);
    tool.on_continuous_update(ContinuousInput::Pointer { near, far })
        .unwrap();
    assert!(matches!(
        tool.current_predicate_parameters(),
        Some(CursorParameters::Cone { .. })
    ));

    let report = tool
        .on_discrete_button(ButtonKind::Confirm, true)
        .unwrap()
        .unwrap();
    assert_eq!(report.hidden, 64);
}

#[test]
fn controller_deltas_need_hold() {
    let settings = ToolSettings {
        translation_sensitivity: 1.0,
        ..ToolSettings::default()
    };
    let mut tool = ToolController::<DenseVolume<u16>>::new(settings);
    let _ = tool.bind_volume(filled_cube(4));
    tool.select_algorithm(Some(ShapeType::HalfSpace3D));

    match tool.current_predicate_parameters() {
        Some(CursorParameters::Plane { point, normal }) => {
            assert_eq!(point, Point3::new(2.0, 2.0, 2.0));
            assert_eq!(normal.into_inner(), Vector3::z());
        }
        other => panic!("unexpected parameters {other:?}"),
    }

    let delta = ControllerDelta {
        rotation: Vector3::zeros(),
        translation: Vector3::new(0.0, 0.0, 1.0),
    };
    let input = |buttons| TickInput {
        buttons,
        pointer: None,
        delta: Some(delta),
    };

    let _ = tool.tick(&input(Buttons::ADVANCE)).unwrap();
    assert_eq!(tool.adjustment().stage(), AdjustmentStage::Translating);
    assert_eq!(tool.adjustment().cursor().translation.vector.z, 2.0);

    let _ = tool.tick(&input(Buttons::HOLD)).unwrap();
    let _ = tool.tick(&input(Buttons::HOLD)).unwrap();
    assert_eq!(tool.adjustment().cursor().translation.vector.z, 4.0);

    let _ = tool.tick(&input(Buttons::empty())).unwrap();
    assert!(!tool.adjustment().is_holding());
    assert_eq!(tool.adjustment().cursor().translation.vector.z, 4.0);

    // The plane now sits at z = 4: nothing left to erase above it.
    let report = tool
        .on_discrete_button(ButtonKind::Confirm, true)
        .unwrap()
        .unwrap();
    assert_eq!(report.hidden, 0);
}

#[test]
fn back_is_clamped_and_advance_wins() {
    let (mut tool, events) = recorded_tool(None);
    tool.select_algorithm(Some(ShapeType::Cylinder));

    let _ = tool.tick(&TickInput {
        buttons: Buttons::BACK,
        ..TickInput::default()
    });
    assert_eq!(tool.adjustment().stage(), AdjustmentStage::Rotating);

    let _ = tool.tick(&TickInput::default());
    let _ = tool.tick(&TickInput {
        buttons: Buttons::BACK | Buttons::ADVANCE,
        ..TickInput::default()
    });
    assert_eq!(tool.adjustment().stage(), AdjustmentStage::Translating);

    assert_eq!(
        events.borrow()[1..],
        [
            Event::Stage(AdjustmentStage::Rotating),
            Event::Stage(AdjustmentStage::Translating),
        ]
    );
}

#[test]
fn cancelled_sweep_keeps_gesture() {
    let (mut tool, _events) = recorded_tool(Some(1));
    let _ = tool.bind_volume(filled_cube(4));
    tool.select_algorithm(Some(ShapeType::Cylinder));
    tool.settings_mut().cylinder_radius = 1.0;

    let _ = tool.on_discrete_button(ButtonKind::Advance, true).unwrap();
    let report = tool
        .on_discrete_button(ButtonKind::Advance, true)
        .unwrap()
        .unwrap();
    assert!(report.cancelled);
    assert_eq!(report.slices, 2);
    assert_eq!(tool.adjustment().stage(), AdjustmentStage::Translating);

    assert_eq!(tool.volume().unwrap().count_zeros(), 8);

    // Applying again finishes the job.
    let report = tool.apply_and_reset().unwrap();
    assert!(!report.cancelled);
    assert_eq!(report.hidden, 16);
    assert_eq!(report.cleared, 8);
    assert_eq!(tool.volume().unwrap().count_zeros(), 16);
}

#[test]
fn confirm_on_first_pointer_tick_applies_cone() {
    let mut tool = ToolController::default();
    let _ = tool.bind_volume(filled_cube(4));
    tool.select_algorithm(Some(ShapeType::Cone));

    let report = tool
        .tick(&TickInput {
            buttons: Buttons::CONFIRM,
            pointer: Some((Point3::new(2.0, 2.0, 14.0), Point3::new(2.0, 2.0, -100.0))),
            delta: None,
        })
        .unwrap()
        .unwrap();
    assert_eq!(report.hidden, 64);
}

#[test]
fn failed_button_still_tracks_pointer() {
    let mut tool = ToolController::<DenseVolume<u16>>::default();
    tool.select_algorithm(Some(ShapeType::Cone));

    let first = (Point3::new(2.0, 2.0, 14.0), Point3::new(2.0, 2.0, -100.0));
    let second = (Point3::new(0.0, 0.0, 14.0), Point3::new(0.0, 0.0, -100.0));
    let _ = tool
        .tick(&TickInput {
            pointer: Some(first),
            ..TickInput::default()
        })
        .unwrap();

    assert_eq!(
        tool.tick(&TickInput {
            buttons: Buttons::CONFIRM,
            pointer: Some(second),
            delta: None,
        }),
        Err(ClipError::NoVolumeBound)
    );
    assert_eq!(tool.session().unwrap().ray(), Some(&second));

    let _ = tool.bind_volume(filled_cube(4));
    assert_eq!(tool.tick(&TickInput::default()), Ok(None));
    let report = tool
        .tick(&TickInput {
            buttons: Buttons::CONFIRM,
            ..TickInput::default()
        })
        .unwrap()
        .unwrap();
    assert_eq!(report.hidden, 64);
    assert!(tool.unbind_volume().is_some());
}

#[test]
fn firing_tick_ignores_its_deltas() {
    let settings = ToolSettings {
        translation_sensitivity: 1.0,
        ..ToolSettings::default()
    };
    let mut tool = ToolController::<DenseVolume<u16>>::new(settings);
    let _ = tool.bind_volume(filled_cube(4));
    tool.select_algorithm(Some(ShapeType::HalfSpace3D));

    let input = |buttons| TickInput {
        buttons,
        pointer: None,
        delta: Some(ControllerDelta {
            rotation: Vector3::zeros(),
            translation: Vector3::new(0.0, 0.0, 1.0),
        }),
    };

    let _ = tool.tick(&TickInput {
        buttons: Buttons::ADVANCE,
        ..TickInput::default()
    });
    assert_eq!(tool.tick(&input(Buttons::HOLD)), Ok(None));
    assert_eq!(tool.adjustment().cursor().translation.vector.z, 3.0);

    // The plane sits at z = 3 when Confirm fires: only the top slice is erased.
    let report = tool
        .tick(&input(Buttons::HOLD | Buttons::CONFIRM))
        .unwrap()
        .unwrap();
    assert_eq!(report.hidden, 16);
    assert_eq!(tool.adjustment().cursor().translation.vector.z, 3.0);
    assert_eq!(tool.adjustment().stage(), AdjustmentStage::Rotating);
}

#[test]
fn cylinder_click_commits_through_cursor() {
    let (mut tool, events) = recorded_tool(None);
    let _ = tool.bind_volume(filled_cube(4));
    tool.select_algorithm(Some(ShapeType::Cylinder));
    tool.settings_mut().cylinder_radius = 1.0;

    let _ = tool.on_discrete_button(ButtonKind::Advance, true).unwrap();
    assert_eq!(tool.adjustment().stage(), AdjustmentStage::Translating);

    let near = Point3::new(0.0, 0.0, 10.0);
    let report = tool
        .on_pointer_event(near, Point3::new(0.0, 0.0, -10.0), PointerClick::Plain)
        .unwrap()
        .unwrap();

    // The cursor sits at the volume center, its axis along +Y.
    assert_eq!(report.hidden, 16);
    assert_eq!(tool.volume().unwrap().scalar_at(1, 3, 2), 0);
    assert_eq!(tool.volume().unwrap().scalar_at(0, 3, 2), 1);
    assert_eq!(tool.adjustment().stage(), AdjustmentStage::Rotating);
    assert_eq!(tool.session().unwrap().phase(), GesturePhase::Tracking);

    let events = events.borrow();
    assert_eq!(events.last(), Some(&Event::Stage(AdjustmentStage::Rotating)));
    assert_eq!(events[events.len() - 2], Event::Finished(16));
}

#[test]
fn nudged_cylinder() {
    let settings = ToolSettings {
        cylinder_radius: 1.0,
        rotation_step: FRAC_PI_2,
        translation_step: 1.0,
        ..ToolSettings::default()
    };
    let mut tool = ToolController::new(settings);
    let _ = tool.bind_volume(filled_cube(4));
    tool.select_algorithm(Some(ShapeType::Cylinder));

    // Turn the axis from +Y to -X, then move it up by one voxel.
    tool.nudge_cursor(AdjustmentAxis::Z, true);
    let _ = tool.on_discrete_button(ButtonKind::Advance, true).unwrap();
    tool.nudge_cursor(AdjustmentAxis::Y, true);
    assert_eq!(tool.adjustment().cursor().translation.vector, Vector3::new(2.0, 3.0, 2.0));

    let report = tool
        .on_discrete_button(ButtonKind::Advance, true)
        .unwrap()
        .unwrap();
    assert_eq!(report.hidden, 16);

    let volume = tool.volume().unwrap();
    for x in 0..4 {
        assert_eq!(volume.scalar_at(x, 3, 1), 0);
        assert_eq!(volume.scalar_at(x, 2, 2), 0);
        assert_eq!(volume.scalar_at(x, 1, 1), 1);
    }
}

#[test]
fn cursor_size_percent_scales_erasers() {
    let mut tool = ToolController::default();
    let _ = tool.bind_volume(filled_cube(4));
    tool.select_algorithm(Some(ShapeType::Cylinder));

    assert_eq!(
        tool.set_cursor_size_percent(-1.0),
        Err(ClipError::InvalidParameter {
            name: "percent",
            value: -1.0
        })
    );
    assert_eq!(tool.settings(), &ToolSettings::default());

    // Radius 0.36: no voxel center is that close to the axis.
    tool.set_cursor_size_percent(1.0).unwrap();
    let report = tool
        .on_discrete_button(ButtonKind::Confirm, true)
        .unwrap()
        .unwrap();
    assert_eq!(report.hidden, 0);

    // Radius 0.9: the central column.
    tool.set_cursor_size_percent(2.5).unwrap();
    let report = tool
        .on_discrete_button(ButtonKind::Confirm, true)
        .unwrap()
        .unwrap();
    assert_eq!(report.hidden, 16);

    // The cone widens by 0.018 / 0.2 = 0.09 per unit of depth, reaching only the central
    // column between depths 10.7 and 13.7.
    let _ = tool.bind_volume(filled_cube(4));
    tool.select_algorithm(Some(ShapeType::Cone));
    tool.set_cursor_size_percent(30.0).unwrap();
    tool.set_view(ViewState {
        near_clip_distance: 0.2,
        ..ViewState::default()
    });

    let report = tool
        .on_pointer_event(
            Point3::new(2.0, 2.0, 14.0),
            Point3::new(2.0, 2.0, -100.0),
            PointerClick::Plain,
        )
        .unwrap()
        .unwrap();
    assert_eq!(report.hidden, 16);
    assert_eq!(tool.volume().unwrap().scalar_at(1, 2, 0), 0);
    assert_eq!(tool.volume().unwrap().scalar_at(0, 2, 0), 1);
}
