use crate::viewport::pointer_ndc;
use constellation_core::{RenderSurface, Session};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Feed pointer movement, relative to `container`, into the session.
///
/// Listens on the window so the container can stay `pointer-events: none`.
pub fn wire_pointer_tracking<S: RenderSurface + 'static>(
    window: &web::Window,
    container: &web::HtmlElement,
    session: Rc<RefCell<Session<S>>>,
) {
    let container = container.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let rect = container.get_bounding_client_rect();
        let ndc = pointer_ndc(
            Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
            Vec2::new(rect.left() as f32, rect.top() as f32),
            Vec2::new(rect.width() as f32, rect.height() as f32),
        );
        session.borrow_mut().pointer_moved(ndc);
    }) as Box<dyn FnMut(web::PointerEvent)>);
    _ = window.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}
