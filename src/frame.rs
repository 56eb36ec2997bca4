use crate::constants::FRAME_REPORT_INTERVAL_SECS;
use crate::stats::FrameStats;
use constellation_core::{LoopControl, Scheduler};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Drives frames from `requestAnimationFrame`, one tick per callback.
pub struct RafScheduler {
    stats: FrameStats,
}

impl RafScheduler {
    pub fn new() -> Self {
        Self {
            stats: FrameStats::new(Duration::from_secs(FRAME_REPORT_INTERVAL_SECS)),
        }
    }
}

impl Scheduler for RafScheduler {
    fn start(self, mut frame: Box<dyn FnMut() -> LoopControl>) {
        let Some(window) = web::window() else {
            log::error!("[frame] no window; animation not started");
            return;
        };
        let mut stats = self.stats;
        let mut last = Instant::now();

        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let tick_clone = tick.clone();
        let window_tick = window.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let now = Instant::now();
            if let Some(r) = stats.record(now - last) {
                log::debug!("[frame] {:.2} ms avg over {} frames", r.avg_ms, r.frames);
            }
            last = now;

            if frame() == LoopControl::Stop {
                log::warn!("[frame] loop stopped");
                return;
            }
            if let Some(cb) = tick_clone.borrow().as_ref() {
                _ = window_tick.request_animation_frame(cb.as_ref().unchecked_ref());
            }
        }) as Box<dyn FnMut()>));
        if let Some(cb) = tick.borrow().as_ref() {
            _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }
}
