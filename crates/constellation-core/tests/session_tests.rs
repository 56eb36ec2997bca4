// Host-side tests for the session tick, resize, pointer easing and
// scheduler, using a recording surface in place of the GPU.

use constellation_core::{
    run, Error, FieldConfig, FixedSteps, FrameView, LoopControl, RenderSurface, Result,
    Scales, Scheduler, Session, POINTER_EASE_FACTOR,
};
use glam::{Vec2, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Default)]
struct RecordingSurface {
    presents: usize,
    sizes: Vec<(u32, u32)>,
    last_points: usize,
    last_segments: usize,
    fail_fatally: bool,
}

impl RenderSurface for RecordingSurface {
    fn resize(&mut self, width: u32, height: u32) {
        self.sizes.push((width, height));
    }

    fn present(&mut self, frame: &FrameView<'_>) -> Result<()> {
        self.presents += 1;
        self.last_points = frame.points.len();
        self.last_segments = frame.segments.len();
        if self.fail_fatally {
            return Err(Error::RenderingUnavailable("device lost".into()));
        }
        Ok(())
    }
}

fn session(config: FieldConfig) -> Session<RecordingSurface> {
    Session::new(
        config,
        RecordingSurface::default(),
        1600,
        900,
        &mut StdRng::seed_from_u64(9),
    )
}

fn positions(s: &Session<RecordingSurface>) -> Vec<Vec3> {
    s.field().points().iter().map(|p| p.position).collect()
}

#[test]
fn new_session_sizes_surface_and_camera() {
    let s = session(FieldConfig::hero());
    assert_eq!(s.surface().sizes, vec![(1600, 900)]);
    assert!((s.camera().aspect - 16.0 / 9.0).abs() < 1e-6);
    assert!((s.camera().fovy_radians - 75f32.to_radians()).abs() < 1e-6);
    assert_eq!(s.camera().eye, Vec3::new(0.0, 0.0, 100.0));
}

#[test]
fn tick_presents_points_and_segments() {
    let mut s = session(FieldConfig::hero());
    s.tick().unwrap();
    let surface = s.surface();
    assert_eq!(surface.presents, 1);
    assert_eq!(surface.last_points, 150);
    assert_eq!(surface.last_segments, s.edges().len() * 2);
    assert_eq!(s.segments().len(), s.edges().len() * 2);
    assert_eq!(s.ticks(), 1);
}

#[test]
fn tick_moves_points_by_their_velocity() {
    let mut s = session(FieldConfig::hero());
    let before: Vec<_> = s.field().points().to_vec();
    s.advance();
    for (old, new) in before.iter().zip(s.field().points()) {
        let expected = old.position + old.velocity;
        assert!((new.position - expected).length() < 1e-4);
    }
}

#[test]
fn rotation_accumulates_fixed_increment() {
    let config = FieldConfig::site(Scales::default(), 1280.0);
    let step = config.rotation_step;
    let mut s = session(config);
    for _ in 0..10 {
        s.tick().unwrap();
    }
    let r = s.transform().rotation;
    assert!((r - step * 10.0).length() < 1e-6, "rotation {r:?}");
    assert_eq!(s.transform().translation, Vec2::ZERO);
}

#[test]
fn resize_updates_aspect_and_leaves_points_alone() {
    let mut s = session(FieldConfig::hero());
    s.tick().unwrap();
    let before = positions(&s);
    s.resize(800, 800);
    assert!((s.camera().aspect - 1.0).abs() < 1e-6);
    assert_eq!(s.surface().sizes.last(), Some(&(800, 800)));
    assert_eq!(positions(&s), before);
}

#[test]
fn resize_to_zero_height_keeps_aspect_and_clamps_surface() {
    let mut s = session(FieldConfig::hero());
    let aspect = s.camera().aspect;
    s.resize(1024, 0);
    assert_eq!(s.camera().aspect, aspect);
    assert_eq!(s.surface().sizes.last(), Some(&(1024, 1)));
}

#[test]
fn pointer_eases_translation_toward_target() {
    let mut s = session(FieldConfig::hero_interactive());
    s.pointer_moved(Vec2::new(1.0, 0.0));
    let target = s.pointer_target();
    assert!(target.x > 0.0);

    s.tick().unwrap();
    let t1 = s.transform().translation;
    assert!((t1.x - target.x * POINTER_EASE_FACTOR).abs() < 1e-5);

    s.tick().unwrap();
    let t2 = s.transform().translation;
    let expected = t1.x + (target.x - t1.x) * POINTER_EASE_FACTOR;
    assert!((t2.x - expected).abs() < 1e-5);

    for _ in 0..500 {
        s.tick().unwrap();
    }
    assert!((s.transform().translation - target).length() < 1e-2);
}

#[test]
fn pointer_outside_container_is_clamped() {
    let mut s = session(FieldConfig::hero_interactive());
    s.pointer_moved(Vec2::new(1.0, -1.0));
    let edge = s.pointer_target();
    s.pointer_moved(Vec2::new(5.0, -7.0));
    assert_eq!(s.pointer_target(), edge);
}

#[test]
fn pointer_is_ignored_without_tracking() {
    let mut s = session(FieldConfig::hero());
    s.pointer_moved(Vec2::new(0.5, 0.5));
    assert_eq!(s.pointer_target(), Vec2::ZERO);
    for _ in 0..20 {
        s.tick().unwrap();
    }
    assert_eq!(s.transform().translation, Vec2::ZERO);
}

#[test]
fn empty_field_still_presents() {
    let config = FieldConfig::site(
        Scales {
            speed: 0.5,
            density: 0.001,
        },
        1280.0,
    );
    assert_eq!(config.point_count, 0);
    let mut s = session(config);
    s.tick().unwrap();
    assert_eq!(s.surface().presents, 1);
    assert_eq!(s.surface().last_points, 0);
    assert!(s.edges().is_empty());
}

#[test]
fn fixed_steps_drives_exact_tick_count() {
    let s = Rc::new(RefCell::new(session(FieldConfig::hero())));
    run(s.clone(), FixedSteps(30));
    let s = s.borrow();
    assert_eq!(s.ticks(), 30);
    assert_eq!(s.surface().presents, 30);
}

#[test]
fn fatal_surface_error_stops_the_loop() {
    let s = Rc::new(RefCell::new(session(FieldConfig::hero())));
    s.borrow_mut().surface_mut().fail_fatally = true;
    run(s.clone(), FixedSteps(10));
    assert_eq!(s.borrow().surface().presents, 1);
}

#[test]
fn frame_reports_loop_control() {
    let mut s = session(FieldConfig::hero());
    assert_eq!(s.frame(), LoopControl::Continue);
    s.surface_mut().fail_fatally = true;
    assert_eq!(s.frame(), LoopControl::Stop);
}

#[test]
fn custom_scheduler_receives_frames() {
    struct Twice;
    impl Scheduler for Twice {
        fn start(self, mut frame: Box<dyn FnMut() -> LoopControl>) {
            frame();
            frame();
        }
    }
    let s = Rc::new(RefCell::new(session(FieldConfig::hero())));
    run(s.clone(), Twice);
    assert_eq!(s.borrow().ticks(), 2);
}
