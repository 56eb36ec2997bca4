use crate::camera::Camera;
use crate::config::{FieldConfig, Style};
use crate::error::Result;
use crate::field::{ParticleField, Point};
use crate::proximity::{self, Edge};
use crate::scheduler::LoopControl;
use glam::{EulerRot, Mat4, Vec2, Vec3};
use rand::Rng;

/// Everything a surface needs to draw one frame.
pub struct FrameView<'a> {
    pub points: &'a [Point],
    /// Line-list vertices, two per proximity edge.
    pub segments: &'a [Vec3],
    pub model: Mat4,
    pub camera: &'a Camera,
    pub style: &'a Style,
}

/// Drawable output target composited into the host.
pub trait RenderSurface {
    fn resize(&mut self, width: u32, height: u32);
    fn present(&mut self, frame: &FrameView<'_>) -> Result<()>;
}

/// Rotation and translation applied to the whole field.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FieldTransform {
    /// Euler angles around X and Y, radians.
    pub rotation: Vec2,
    /// Offset in the XY plane, world units.
    pub translation: Vec2,
}

impl FieldTransform {
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.translation.extend(0.0))
            * Mat4::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, 0.0)
    }
}

/// One animated background: points, camera and the surface they draw to.
pub struct Session<S> {
    config: FieldConfig,
    field: ParticleField,
    edges: Vec<Edge>,
    segments: Vec<Vec3>,
    transform: FieldTransform,
    pointer_target: Vec2,
    camera: Camera,
    surface: S,
    ticks: u64,
}

impl<S: RenderSurface> Session<S> {
    pub fn new(
        config: FieldConfig,
        mut surface: S,
        width: u32,
        height: u32,
        rng: &mut impl Rng,
    ) -> Self {
        let field = ParticleField::generate(&config, rng);
        let camera = Camera::new(&config.camera, width, height);
        surface.resize(width.max(1), height.max(1));
        log::info!(
            "[session] variant={} points={} connect={:.2} policy={:?}",
            config.variant,
            field.len(),
            config.connect_distance,
            config.boundary
        );
        Self::with_field(config, field, camera, surface)
    }

    /// Assemble a session around an existing field.
    pub fn with_field(config: FieldConfig, field: ParticleField, camera: Camera, surface: S) -> Self {
        Self {
            config,
            field,
            edges: Vec::new(),
            segments: Vec::new(),
            transform: FieldTransform::default(),
            pointer_target: Vec2::ZERO,
            camera,
            surface,
            ticks: 0,
        }
    }

    /// Advance the simulation by one frame and submit it to the surface.
    pub fn tick(&mut self) -> Result<()> {
        self.advance();
        let frame = FrameView {
            points: self.field.points(),
            segments: &self.segments,
            model: self.transform.model_matrix(),
            camera: &self.camera,
            style: &self.config.style,
        };
        self.surface.present(&frame)
    }

    /// Simulation half of [`Session::tick`]: drift, bounds, proximity graph,
    /// line buffer and field transform.
    pub fn advance(&mut self) {
        self.field.step();
        proximity::connect(
            self.field.points(),
            self.config.connect_distance,
            &mut self.edges,
        );
        proximity::fill_segments(self.field.points(), &self.edges, &mut self.segments);

        self.transform.rotation += self.config.rotation_step;
        if let Some(p) = self.config.pointer {
            self.transform.translation = self
                .transform
                .translation
                .lerp(self.pointer_target, p.ease);
        }
        self.ticks += 1;
    }

    /// Tick and translate the outcome into loop control for a scheduler.
    pub fn frame(&mut self) -> LoopControl {
        match self.tick() {
            Ok(()) => LoopControl::Continue,
            Err(e) if e.is_fatal() => {
                log::error!("[session] stopping after {} ticks: {}", self.ticks, e);
                LoopControl::Stop
            }
            Err(e) => {
                log::warn!("[session] frame skipped: {}", e);
                LoopControl::Continue
            }
        }
    }

    /// Host viewport changed: update aspect and surface size only.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.set_viewport(width, height);
        self.surface.resize(width.max(1), height.max(1));
    }

    /// Pointer position in normalized device coordinates (`[-1, 1]`, y up).
    /// Ignored unless the preset tracks the pointer.
    pub fn pointer_moved(&mut self, ndc: Vec2) {
        if let Some(p) = self.config.pointer {
            let ndc = ndc.clamp(Vec2::splat(-1.0), Vec2::splat(1.0));
            self.pointer_target = ndc * p.offset_scale;
        }
    }
}

impl<S> Session<S> {
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn segments(&self) -> &[Vec3] {
        &self.segments
    }

    pub fn transform(&self) -> FieldTransform {
        self.transform
    }

    pub fn pointer_target(&self) -> Vec2 {
        self.pointer_target
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
