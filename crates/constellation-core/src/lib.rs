pub mod camera;
pub mod config;
pub mod constants;
pub mod error;
pub mod field;
#[cfg(feature = "gpu")]
pub mod gpu;
pub mod launch;
pub mod proximity;
pub mod scheduler;
pub mod session;

pub use camera::*;
pub use config::*;
pub use constants::*;
pub use error::{Error, Result};
pub use field::*;
#[cfg(feature = "gpu")]
pub use gpu::GpuSurface;
pub use launch::{prepare, HostEnvironment};
pub use proximity::Edge;
pub use scheduler::*;
pub use session::*;
