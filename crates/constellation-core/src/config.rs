//! Session configuration and the three built-in presets.
//!
//! A configuration is fixed for the lifetime of one page load. Only the
//! camera aspect and surface size change afterwards, on resize.

use crate::constants::*;
use glam::Vec2;
use std::fmt;
use std::str::FromStr;

/// Region the points are spawned in and kept inside.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SpatialBound {
    Sphere { radius: f32 },
    Cube { half_extent: f32 },
}

impl SpatialBound {
    /// Per-coordinate limit checked by the boundary policy.
    #[inline]
    pub fn extent(&self) -> f32 {
        match *self {
            SpatialBound::Sphere { radius } => radius,
            SpatialBound::Cube { half_extent } => half_extent,
        }
    }
}

/// What happens when a coordinate leaves the bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundaryPolicy {
    /// Negate the offending velocity component; position is not clamped.
    Bounce,
    /// Re-enter from the opposite face (toroidal topology).
    Wrap,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    Site,
    Hero,
    HeroInteractive,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Site => "site",
            Variant::Hero => "hero",
            Variant::HeroInteractive => "hero-interactive",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown animation variant '{0}'")]
pub struct UnknownVariant(pub String);

impl FromStr for Variant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "site" => Ok(Variant::Site),
            "hero" => Ok(Variant::Hero),
            "hero-interactive" | "interactive" => Ok(Variant::HeroInteractive),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fog {
    pub color: [f32; 3],
    /// Exponential-squared density per world unit.
    pub density: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Style {
    pub point_color: [f32; 3],
    /// World-space sprite size (attenuated by distance).
    pub point_size: f32,
    pub point_opacity: f32,
    pub line_color: [f32; 3],
    pub line_opacity: f32,
    pub fog: Option<Fog>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraSettings {
    pub fov_deg: f32,
    /// Eye distance along +Z; the camera looks at the origin.
    pub distance: f32,
    pub znear: f32,
    pub zfar: f32,
}

/// Pointer-driven translation of the whole field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerTracking {
    pub ease: f32,
    /// Translation target at the edge of the container (NDC = +-1).
    pub offset_scale: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub variant: Variant,
    pub point_count: usize,
    pub bound: SpatialBound,
    pub boundary: BoundaryPolicy,
    pub speed_scale: f32,
    /// Width of the symmetric velocity range before speed scaling.
    pub velocity_range: f32,
    pub connect_distance: f32,
    /// Euler increment per tick (x, y), radians.
    pub rotation_step: Vec2,
    pub pointer: Option<PointerTracking>,
    pub camera: CameraSettings,
    pub style: Style,
}

/// Scale values read from the host, already sanitized.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scales {
    pub speed: f32,
    pub density: f32,
}

impl Default for Scales {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED_SCALE,
            density: DEFAULT_DENSITY_SCALE,
        }
    }
}

impl Scales {
    pub fn from_raw(speed: Option<&str>, density: Option<&str>) -> Self {
        Self {
            speed: parse_scale(speed, DEFAULT_SPEED_SCALE),
            density: parse_scale(density, DEFAULT_DENSITY_SCALE),
        }
    }
}

/// Parse a host-provided scale value.
///
/// Absent, unparsable, non-finite, zero and negative values all yield
/// `default`.
pub fn parse_scale(raw: Option<&str>, default: f32) -> f32 {
    raw.and_then(|s| s.trim().parse::<f32>().ok())
        .filter(|v| v.is_finite() && *v > 0.0)
        .unwrap_or(default)
}

impl FieldConfig {
    pub fn for_variant(variant: Variant, scales: Scales, viewport_width: f32) -> Self {
        match variant {
            Variant::Site => Self::site(scales, viewport_width),
            Variant::Hero => Self::hero(),
            Variant::HeroInteractive => Self::hero_interactive(),
        }
    }

    /// Full-page background: cube with toroidal wrap, sized by viewport.
    pub fn site(scales: Scales, viewport_width: f32) -> Self {
        let base = if viewport_width < SITE_MOBILE_BREAKPOINT_PX {
            SITE_POINTS_MOBILE
        } else {
            SITE_POINTS_DESKTOP
        };
        let point_count = ((base as f32 * scales.density).floor().max(0.0) as usize)
            .min(MAX_POINT_COUNT);
        let orange = rgb_from_hex(COLOR_ORANGE);
        Self {
            variant: Variant::Site,
            point_count,
            bound: SpatialBound::Cube {
                half_extent: SITE_HALF_EXTENT,
            },
            boundary: BoundaryPolicy::Wrap,
            speed_scale: scales.speed,
            velocity_range: SITE_VELOCITY_RANGE,
            connect_distance: SITE_CONNECT_DISTANCE,
            rotation_step: Vec2::new(SITE_ROTATION_X, SITE_ROTATION_Y) * scales.speed,
            pointer: None,
            camera: CameraSettings {
                fov_deg: CAMERA_FOV_DEG,
                distance: SITE_CAMERA_Z,
                znear: CAMERA_ZNEAR,
                zfar: CAMERA_ZFAR,
            },
            style: Style {
                point_color: orange,
                point_size: SITE_POINT_SIZE,
                point_opacity: SITE_POINT_OPACITY,
                line_color: orange,
                line_opacity: SITE_LINE_OPACITY,
                fog: None,
            },
        }
    }

    /// Hero section: sphere with soft bounce and teal fog. Host scales do
    /// not apply.
    pub fn hero() -> Self {
        Self {
            variant: Variant::Hero,
            point_count: HERO_POINT_COUNT,
            bound: SpatialBound::Sphere {
                radius: HERO_RADIUS,
            },
            boundary: BoundaryPolicy::Bounce,
            speed_scale: 1.0,
            velocity_range: HERO_VELOCITY_RANGE,
            connect_distance: HERO_CONNECT_DISTANCE,
            rotation_step: Vec2::new(HERO_ROTATION_X, HERO_ROTATION_Y),
            pointer: None,
            camera: CameraSettings {
                fov_deg: CAMERA_FOV_DEG,
                distance: HERO_CAMERA_Z,
                znear: CAMERA_ZNEAR,
                zfar: CAMERA_ZFAR,
            },
            style: Style {
                point_color: rgb_from_hex(COLOR_ORANGE),
                point_size: HERO_POINT_SIZE,
                point_opacity: HERO_POINT_OPACITY,
                line_color: rgb_from_hex(COLOR_CREAM),
                line_opacity: HERO_LINE_OPACITY,
                fog: Some(Fog {
                    color: rgb_from_hex(COLOR_FOG_TEAL),
                    density: HERO_FOG_DENSITY,
                }),
            },
        }
    }

    /// Hero preset whose translation follows the pointer.
    pub fn hero_interactive() -> Self {
        Self {
            variant: Variant::HeroInteractive,
            pointer: Some(PointerTracking {
                ease: POINTER_EASE_FACTOR,
                offset_scale: HERO_POINTER_OFFSET,
            }),
            ..Self::hero()
        }
    }

    /// Half-width of the uniform velocity distribution after speed scaling.
    #[inline]
    pub fn max_speed_component(&self) -> f32 {
        0.5 * self.velocity_range * self.speed_scale
    }
}
