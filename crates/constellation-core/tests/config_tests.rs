// Host-side tests for presets, host attribute parsing and launch decisions.

use constellation_core::launch::{choose_variant, ATTR_DENSITY, ATTR_SPEED, ATTR_VARIANT};
use constellation_core::{
    parse_scale, prepare, rgb_from_hex, BoundaryPolicy, FieldConfig, HostEnvironment, Scales,
    SpatialBound, Variant, DEFAULT_DENSITY_SCALE, DEFAULT_SPEED_SCALE, MAX_POINT_COUNT,
};
use std::cell::Cell;
use std::collections::HashMap;

#[derive(Default)]
struct MockHost {
    reduced_motion: bool,
    attrs: HashMap<&'static str, &'static str>,
    width: f32,
    named_container: bool,
    lookups: Cell<usize>,
}

impl MockHost {
    fn desktop() -> Self {
        Self {
            width: 1440.0,
            ..Default::default()
        }
    }

    fn with_attr(mut self, name: &'static str, value: &'static str) -> Self {
        self.attrs.insert(name, value);
        self
    }
}

impl HostEnvironment for MockHost {
    fn prefers_reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.lookups.set(self.lookups.get() + 1);
        self.attrs.get(name).map(|v| v.to_string())
    }

    fn viewport_width(&self) -> f32 {
        self.width
    }

    fn has_named_container(&self) -> bool {
        self.named_container
    }
}

#[test]
fn parse_scale_falls_back_on_bad_input() {
    assert_eq!(parse_scale(None, 0.5), 0.5);
    assert_eq!(parse_scale(Some(""), 0.5), 0.5);
    assert_eq!(parse_scale(Some("fast"), 0.5), 0.5);
    assert_eq!(parse_scale(Some("0"), 0.5), 0.5);
    assert_eq!(parse_scale(Some("-2"), 0.5), 0.5);
    assert_eq!(parse_scale(Some("NaN"), 0.5), 0.5);
    assert_eq!(parse_scale(Some("inf"), 0.5), 0.5);
}

#[test]
fn parse_scale_accepts_positive_numbers() {
    assert_eq!(parse_scale(Some("1.5"), 0.5), 1.5);
    assert_eq!(parse_scale(Some("  2 "), 0.5), 2.0);
    assert_eq!(parse_scale(Some("0.25"), 1.0), 0.25);
}

#[test]
fn site_point_count_follows_viewport_and_density() {
    let defaults = Scales::default();
    assert_eq!(FieldConfig::site(defaults, 1280.0).point_count, 80);
    assert_eq!(FieldConfig::site(defaults, 767.0).point_count, 30);
    assert_eq!(FieldConfig::site(defaults, 768.0).point_count, 80);

    let half = Scales {
        density: 0.5,
        ..defaults
    };
    assert_eq!(FieldConfig::site(half, 1280.0).point_count, 40);

    let odd = Scales {
        density: 1.5,
        ..defaults
    };
    // floor(30 * 1.5) = 45
    assert_eq!(FieldConfig::site(odd, 400.0).point_count, 45);
}

#[test]
fn point_count_is_capped() {
    let huge = Scales {
        density: 1_000.0,
        ..Scales::default()
    };
    assert_eq!(FieldConfig::site(huge, 1280.0).point_count, MAX_POINT_COUNT);
}

#[test]
fn site_speed_scales_rotation_and_velocity() {
    let slow = FieldConfig::site(Scales::default(), 1280.0);
    let fast = FieldConfig::site(
        Scales {
            speed: 1.0,
            ..Scales::default()
        },
        1280.0,
    );
    assert!((fast.rotation_step - slow.rotation_step * 2.0).length() < 1e-7);
    assert!((fast.max_speed_component() - 2.0 * slow.max_speed_component()).abs() < 1e-7);
}

#[test]
fn presets_use_expected_bounds_and_policies() {
    let site = FieldConfig::site(Scales::default(), 1280.0);
    assert_eq!(site.bound, SpatialBound::Cube { half_extent: 10.0 });
    assert_eq!(site.boundary, BoundaryPolicy::Wrap);
    assert!(site.pointer.is_none());
    assert!(site.style.fog.is_none());

    let hero = FieldConfig::hero();
    assert_eq!(hero.bound, SpatialBound::Sphere { radius: 200.0 });
    assert_eq!(hero.boundary, BoundaryPolicy::Bounce);
    assert_eq!(hero.point_count, 150);
    assert!(hero.pointer.is_none());
    assert!(hero.style.fog.is_some());

    let interactive = FieldConfig::hero_interactive();
    assert_eq!(interactive.variant, Variant::HeroInteractive);
    assert_eq!(interactive.bound, hero.bound);
    let tracking = interactive.pointer.expect("interactive preset tracks the pointer");
    assert!((tracking.ease - 0.05).abs() < 1e-7);
}

#[test]
fn variant_names_round_trip() {
    for v in [Variant::Site, Variant::Hero, Variant::HeroInteractive] {
        assert_eq!(v.as_str().parse::<Variant>(), Ok(v));
    }
    assert_eq!(" HERO ".parse::<Variant>(), Ok(Variant::Hero));
    assert!("galaxy".parse::<Variant>().is_err());
}

#[test]
fn hex_colors_normalize() {
    assert_eq!(rgb_from_hex(0xFF0000), [1.0, 0.0, 0.0]);
    let orange = rgb_from_hex(0xFF8C00);
    assert!((orange[1] - 140.0 / 255.0).abs() < 1e-6);
}

#[test]
fn reduced_motion_prepares_nothing() {
    let host = MockHost {
        reduced_motion: true,
        ..MockHost::desktop()
    };
    let mut mounted = 0;
    if prepare(&host).is_some() {
        mounted += 1;
    }
    assert_eq!(mounted, 0);
    assert_eq!(host.lookups.get(), 0, "no attributes read once motion is reduced");
}

#[test]
fn prepare_defaults_to_site_background() {
    let config = prepare(&MockHost::desktop()).unwrap();
    assert_eq!(config.variant, Variant::Site);
    assert_eq!(config.speed_scale, DEFAULT_SPEED_SCALE);
    assert_eq!(config.point_count, (80.0 * DEFAULT_DENSITY_SCALE) as usize);
}

#[test]
fn prepare_reads_speed_and_density_attributes() {
    let host = MockHost::desktop()
        .with_attr(ATTR_SPEED, "2")
        .with_attr(ATTR_DENSITY, "0.5");
    let config = prepare(&host).unwrap();
    assert_eq!(config.speed_scale, 2.0);
    assert_eq!(config.point_count, 40);
}

#[test]
fn invalid_attributes_fall_back_to_defaults() {
    let host = MockHost::desktop()
        .with_attr(ATTR_SPEED, "warp")
        .with_attr(ATTR_DENSITY, "-1");
    let config = prepare(&host).unwrap();
    assert_eq!(config.speed_scale, DEFAULT_SPEED_SCALE);
    assert_eq!(config.point_count, 80);
}

#[test]
fn named_container_selects_hero() {
    let host = MockHost {
        named_container: true,
        ..MockHost::desktop()
    };
    assert_eq!(choose_variant(&host), Variant::Hero);
}

#[test]
fn variant_attribute_overrides_container_default() {
    let host = MockHost {
        named_container: true,
        ..MockHost::desktop()
    }
    .with_attr(ATTR_VARIANT, "site");
    assert_eq!(choose_variant(&host), Variant::Site);

    let host = MockHost::desktop().with_attr(ATTR_VARIANT, "hero-interactive");
    let config = prepare(&host).unwrap();
    assert!(config.pointer.is_some());
}

#[test]
fn unknown_variant_attribute_uses_default() {
    let host = MockHost::desktop().with_attr(ATTR_VARIANT, "nebula");
    assert_eq!(choose_variant(&host), Variant::Site);
}

#[test]
fn hero_ignores_host_scales() {
    let host = MockHost::desktop()
        .with_attr(ATTR_VARIANT, "hero")
        .with_attr(ATTR_SPEED, "4")
        .with_attr(ATTR_DENSITY, "3");
    let config = prepare(&host).unwrap();
    assert_eq!(config, FieldConfig::hero());
}
