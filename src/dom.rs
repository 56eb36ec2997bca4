use crate::constants::{CONTAINER_ID, FALLBACK_Z_INDEX, PIXEL_RATIO_MAX, REDUCED_MOTION_QUERY};
use crate::viewport;
use constellation_core::HostEnvironment;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn js_err(e: wasm_bindgen::JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

#[inline]
pub fn window_document() -> Option<(web::Window, web::Document)> {
    let window = web::window()?;
    let document = window.document()?;
    Some((window, document))
}

pub fn prefers_reduced_motion(window: &web::Window) -> bool {
    window
        .match_media(REDUCED_MOTION_QUERY)
        .ok()
        .flatten()
        .map(|m| m.matches())
        .unwrap_or(false)
}

/// The live page as seen by the launch decisions.
pub struct DomHost<'a> {
    window: &'a web::Window,
    document: &'a web::Document,
}

impl<'a> DomHost<'a> {
    pub fn new(window: &'a web::Window, document: &'a web::Document) -> Self {
        Self { window, document }
    }
}

impl HostEnvironment for DomHost<'_> {
    fn prefers_reduced_motion(&self) -> bool {
        prefers_reduced_motion(self.window)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.document.body()?.get_attribute(name)
    }

    fn viewport_width(&self) -> f32 {
        self.window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0) as f32
    }

    fn has_named_container(&self) -> bool {
        self.document.get_element_by_id(CONTAINER_ID).is_some()
    }
}

pub struct Mount {
    pub container: web::HtmlElement,
    pub canvas: web::HtmlCanvasElement,
    /// The container was created by us rather than provided by the page.
    pub owns_container: bool,
}

impl Mount {
    /// Take everything we added back out of the document.
    pub fn unmount(&self) {
        self.canvas.remove();
        if self.owns_container {
            self.container.remove();
        }
    }
}

/// Use the page's `#canvas-container` or prepend a fixed full-viewport one
/// to `<body>`, then append a canvas filling it.
pub fn mount(document: &web::Document) -> anyhow::Result<Mount> {
    let (container, owns_container) = match document.get_element_by_id(CONTAINER_ID) {
        Some(el) => (el.dyn_into::<web::HtmlElement>().map_err(|e| js_err(e.into()))?, false),
        None => (create_fallback_container(document)?, true),
    };

    let canvas = document
        .create_element("canvas")
        .map_err(js_err)?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| js_err(e.into()))?;
    let style = canvas.style();
    for (k, v) in [("display", "block"), ("width", "100%"), ("height", "100%")] {
        style.set_property(k, v).map_err(js_err)?;
    }
    container.append_child(&canvas).map_err(js_err)?;

    Ok(Mount {
        container,
        canvas,
        owns_container,
    })
}

fn create_fallback_container(document: &web::Document) -> anyhow::Result<web::HtmlElement> {
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("document has no <body>"))?;
    let el = document
        .create_element("div")
        .map_err(js_err)?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| js_err(e.into()))?;
    el.set_id(CONTAINER_ID);
    let style = el.style();
    for (k, v) in [
        ("position", "fixed"),
        ("top", "0"),
        ("left", "0"),
        ("width", "100%"),
        ("height", "100%"),
        ("z-index", FALLBACK_Z_INDEX),
        ("pointer-events", "none"),
    ] {
        style.set_property(k, v).map_err(js_err)?;
    }
    body.prepend_with_node_1(&el).map_err(js_err)?;
    log::info!("[dom] created fallback #{}", CONTAINER_ID);
    Ok(el)
}

/// Match the canvas backing store to its CSS box times the capped pixel
/// ratio and return the new size.
pub fn sync_canvas_backing_size(window: &web::Window, canvas: &web::HtmlCanvasElement) -> (u32, u32) {
    let rect = canvas.get_bounding_client_rect();
    let (w, h) = viewport::backing_size(
        rect.width(),
        rect.height(),
        window.device_pixel_ratio(),
        PIXEL_RATIO_MAX,
    );
    canvas.set_width(w);
    canvas.set_height(h);
    (w, h)
}
