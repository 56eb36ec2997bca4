//! Frame scheduling seam.
//!
//! The browser drives frames through `requestAnimationFrame`; tests drive a
//! fixed number of frames synchronously. Both go through [`Scheduler`].

use crate::session::{RenderSurface, Session};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

pub trait Scheduler {
    /// Invoke `frame` once per display refresh until it returns
    /// [`LoopControl::Stop`] or the host ends the session.
    fn start(self, frame: Box<dyn FnMut() -> LoopControl>);
}

/// Runs a fixed number of frames back to back.
#[derive(Clone, Copy, Debug)]
pub struct FixedSteps(pub usize);

impl Scheduler for FixedSteps {
    fn start(self, mut frame: Box<dyn FnMut() -> LoopControl>) {
        for _ in 0..self.0 {
            if frame() == LoopControl::Stop {
                break;
            }
        }
    }
}

/// Hand a shared session to a scheduler.
pub fn run<S, Sch>(session: Rc<RefCell<Session<S>>>, scheduler: Sch)
where
    S: RenderSurface + 'static,
    Sch: Scheduler,
{
    scheduler.start(Box::new(move || session.borrow_mut().frame()));
}
