//! Host-facing startup decisions, made before anything is mounted.

use crate::config::{FieldConfig, Scales, Variant};

pub const ATTR_SPEED: &str = "data-animation-speed";
pub const ATTR_DENSITY: &str = "data-animation-density";
pub const ATTR_VARIANT: &str = "data-animation-variant";

/// What the embedding environment tells us before a session starts.
pub trait HostEnvironment {
    /// User asked for reduced motion; nothing may be mounted.
    fn prefers_reduced_motion(&self) -> bool;
    /// Raw value of a declarative configuration attribute.
    fn attribute(&self, name: &str) -> Option<String>;
    /// Current viewport width in CSS pixels.
    fn viewport_width(&self) -> f32;
    /// Whether the page already provides a named container.
    fn has_named_container(&self) -> bool;
}

/// Explicit variant attribute wins; otherwise a page that ships its own
/// container gets the hero effect and every other page the site background.
pub fn choose_variant(host: &impl HostEnvironment) -> Variant {
    if let Some(raw) = host.attribute(ATTR_VARIANT) {
        match raw.parse::<Variant>() {
            Ok(v) => return v,
            Err(e) => log::warn!("[launch] {}; using default", e),
        }
    }
    if host.has_named_container() {
        Variant::Hero
    } else {
        Variant::Site
    }
}

/// Resolve the session configuration, or `None` when the background must
/// not start at all.
pub fn prepare(host: &impl HostEnvironment) -> Option<FieldConfig> {
    if host.prefers_reduced_motion() {
        log::info!("[launch] reduced motion requested; background disabled");
        return None;
    }
    let variant = choose_variant(host);
    let speed = host.attribute(ATTR_SPEED);
    let density = host.attribute(ATTR_DENSITY);
    let scales = Scales::from_raw(speed.as_deref(), density.as_deref());
    Some(FieldConfig::for_variant(
        variant,
        scales,
        host.viewport_width(),
    ))
}
