use crate::dom;
use constellation_core::{RenderSurface, Session};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keep the canvas backing store, camera aspect and surface in step with
/// the window. Points are left where they are.
pub fn wire_resize<S: RenderSurface + 'static>(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    session: Rc<RefCell<Session<S>>>,
) {
    let window_c = window.clone();
    let canvas_c = canvas.clone();
    let closure = Closure::wrap(Box::new(move || {
        let (w, h) = dom::sync_canvas_backing_size(&window_c, &canvas_c);
        session.borrow_mut().resize(w, h);
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}
