use thiserror::Error;

/// Failures surfaced by a session or its rendering surface.
#[derive(Debug, Error)]
pub enum Error {
    /// The GPU adapter, device or surface could not be acquired.
    #[error("rendering capability unavailable: {0}")]
    RenderingUnavailable(String),

    #[cfg(feature = "gpu")]
    #[error("surface error: {0}")]
    Surface(#[from] wgpu::SurfaceError),
}

impl Error {
    /// Whether the frame loop should stop after this error.
    ///
    /// Transient surface states (lost, outdated, timeout) are recovered by
    /// reconfiguring on the next frame.
    pub fn is_fatal(&self) -> bool {
        match self {
            Error::RenderingUnavailable(_) => true,
            #[cfg(feature = "gpu")]
            Error::Surface(e) => matches!(e, wgpu::SurfaceError::OutOfMemory),
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
