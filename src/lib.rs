#![cfg(target_arch = "wasm32")]
use constellation_core::{prepare, run, GpuSurface, Session};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod constants;
mod dom;
mod events;
mod frame;
mod stats;
mod viewport;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("constellation-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let (window, document) =
        dom::window_document().ok_or_else(|| anyhow::anyhow!("no window/document"))?;

    let Some(config) = prepare(&dom::DomHost::new(&window, &document)) else {
        return Ok(());
    };

    let mount = dom::mount(&document)?;
    let (width, height) = dom::sync_canvas_backing_size(&window, &mount.canvas);

    let target = wgpu::SurfaceTarget::Canvas(mount.canvas.clone());
    let surface = match GpuSurface::new(target, width, height).await {
        Ok(s) => s,
        Err(e) => {
            log::error!("[init] {}; background skipped", e);
            mount.unmount();
            return Ok(());
        }
    };

    let interactive = config.pointer.is_some();
    let session = Rc::new(RefCell::new(Session::new(
        config,
        surface,
        width,
        height,
        &mut StdRng::from_entropy(),
    )));

    events::wire_resize(&window, &mount.canvas, session.clone());
    if interactive {
        events::wire_pointer_tracking(&window, &mount.container, session.clone());
    }
    run(session, frame::RafScheduler::new());
    Ok(())
}
