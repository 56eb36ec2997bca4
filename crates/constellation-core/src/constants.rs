// Tuning constants shared by the web and native front-ends.

// Host attribute defaults
pub const DEFAULT_SPEED_SCALE: f32 = 0.5;
pub const DEFAULT_DENSITY_SCALE: f32 = 1.0;

// Hard cap on the point count; the proximity pass is O(N^2)
pub const MAX_POINT_COUNT: usize = 2000;

// Camera
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

// Pointer easing: fraction of the remaining distance covered per tick
pub const POINTER_EASE_FACTOR: f32 = 0.05;

// Site-wide background (cube, wrap)
pub const SITE_POINTS_DESKTOP: usize = 80;
pub const SITE_POINTS_MOBILE: usize = 30;
pub const SITE_MOBILE_BREAKPOINT_PX: f32 = 768.0; // viewport widths below this count as mobile
pub const SITE_HALF_EXTENT: f32 = 10.0;
pub const SITE_VELOCITY_RANGE: f32 = 0.02; // components in +-range/2, times speed scale
pub const SITE_CONNECT_DISTANCE: f32 = 3.5;
pub const SITE_ROTATION_X: f32 = 0.0005; // radians per tick, times speed scale
pub const SITE_ROTATION_Y: f32 = 0.001;
pub const SITE_CAMERA_Z: f32 = 5.0;
pub const SITE_POINT_SIZE: f32 = 0.15;
pub const SITE_POINT_OPACITY: f32 = 0.6;
pub const SITE_LINE_OPACITY: f32 = 0.15;

// Hero section (sphere, bounce)
pub const HERO_POINT_COUNT: usize = 150;
pub const HERO_RADIUS: f32 = 200.0;
pub const HERO_VELOCITY_RANGE: f32 = 0.2;
pub const HERO_CONNECT_DISTANCE: f32 = 40.0;
pub const HERO_ROTATION_X: f32 = 0.0005;
pub const HERO_ROTATION_Y: f32 = 0.001;
pub const HERO_CAMERA_Z: f32 = 100.0;
pub const HERO_POINT_SIZE: f32 = 3.0;
pub const HERO_POINT_OPACITY: f32 = 0.8;
pub const HERO_LINE_OPACITY: f32 = 0.15;
pub const HERO_FOG_DENSITY: f32 = 0.002;
pub const HERO_POINTER_OFFSET: f32 = 20.0; // world units of translation at the container edge

// Palette (sRGB hex)
pub const COLOR_ORANGE: u32 = 0xFF8C00;
pub const COLOR_CREAM: u32 = 0xFFF5E6;
pub const COLOR_FOG_TEAL: u32 = 0x155D74;

/// Convert a `0xRRGGBB` literal into normalized RGB components.
///
/// Components stay in sRGB space; the renderer prefers a non-sRGB surface
/// format so they reach the page unchanged.
#[inline]
pub fn rgb_from_hex(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xFF) as f32 / 255.0,
        ((hex >> 8) & 0xFF) as f32 / 255.0,
        (hex & 0xFF) as f32 / 255.0,
    ]
}
