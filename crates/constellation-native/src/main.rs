use std::sync::Arc;

use constellation_core::{prepare, GpuSurface, HostEnvironment, LoopControl, Session};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use winit::{dpi::PhysicalSize, event::*, event_loop::EventLoop, window::WindowBuilder};

const ENV_VARIANT: &str = "CONSTELLATION_VARIANT";
const ENV_SPEED: &str = "CONSTELLATION_SPEED";
const ENV_DENSITY: &str = "CONSTELLATION_DENSITY";
const ENV_REDUCED_MOTION: &str = "CONSTELLATION_REDUCED_MOTION";

/// Environment variables stand in for the page's body attributes.
struct EnvHost {
    width: f32,
}

impl HostEnvironment for EnvHost {
    fn prefers_reduced_motion(&self) -> bool {
        std::env::var(ENV_REDUCED_MOTION)
            .map(|v| matches!(v.trim(), "1" | "true" | "yes"))
            .unwrap_or(false)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        let key = match name {
            constellation_core::launch::ATTR_SPEED => ENV_SPEED,
            constellation_core::launch::ATTR_DENSITY => ENV_DENSITY,
            constellation_core::launch::ATTR_VARIANT => ENV_VARIANT,
            _ => return None,
        };
        std::env::var(key).ok()
    }

    fn viewport_width(&self) -> f32 {
        self.width
    }

    // A window has no page-provided container; the variant comes from env.
    fn has_named_container(&self) -> bool {
        false
    }
}

fn cursor_ndc(pos: winit::dpi::PhysicalPosition<f64>, size: PhysicalSize<u32>) -> Vec2 {
    if size.width == 0 || size.height == 0 {
        return Vec2::ZERO;
    }
    let u = pos.x as f32 / size.width as f32;
    let v = pos.y as f32 / size.height as f32;
    Vec2::new(u * 2.0 - 1.0, 1.0 - v * 2.0)
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("Constellation (native preview)")
            .with_inner_size(PhysicalSize::new(1280, 800))
            .build(&event_loop)?,
    );
    let size = window.inner_size();
    let scale = window.scale_factor();

    let host = EnvHost {
        width: (size.width as f64 / scale) as f32,
    };
    let Some(config) = prepare(&host) else {
        return Ok(());
    };

    let surface = match pollster::block_on(GpuSurface::new(
        Arc::clone(&window),
        size.width,
        size.height,
    )) {
        Ok(s) => s,
        Err(e) => {
            log::error!("[native] {}", e);
            return Ok(());
        }
    };
    let mut session = Session::new(
        config,
        surface,
        size.width,
        size.height,
        &mut StdRng::from_entropy(),
    );

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent {
            event: WindowEvent::Resized(size),
            ..
        } => session.resize(size.width, size.height),
        Event::WindowEvent {
            event: WindowEvent::CursorMoved { position, .. },
            ..
        } => session.pointer_moved(cursor_ndc(position, window.inner_size())),
        Event::WindowEvent {
            event: WindowEvent::CloseRequested,
            ..
        } => elwt.exit(),
        Event::AboutToWait => match session.frame() {
            LoopControl::Continue => window.request_redraw(),
            LoopControl::Stop => elwt.exit(),
        },
        _ => {}
    })?;
    Ok(())
}
