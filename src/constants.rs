/// Page-level constants for the browser front-end.
///
/// Field presets and tuning live in `constellation-core`; these only cover
/// how the background is mounted into a document.
// Element id of the container the canvas is mounted into
pub const CONTAINER_ID: &str = "canvas-container";

// Media query signalling the user asked for less motion
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// Upper bound on devicePixelRatio used for the canvas backing store
pub const PIXEL_RATIO_MAX: f64 = 2.0;

// Fallback container stacking: behind page content, never hit-tested
pub const FALLBACK_Z_INDEX: &str = "-1";

// Seconds between frame-time reports at debug level
pub const FRAME_REPORT_INTERVAL_SECS: u64 = 5;
