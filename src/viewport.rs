use glam::Vec2;

/// Clamp the device pixel ratio to `(0, max]`; unusable values count as 1.
#[inline]
pub fn effective_pixel_ratio(dpr: f64, max: f64) -> f64 {
    if dpr.is_finite() && dpr > 0.0 {
        dpr.min(max)
    } else {
        1.0
    }
}

/// Canvas backing-store size for a CSS box, never smaller than 1x1.
pub fn backing_size(css_width: f64, css_height: f64, dpr: f64, max_ratio: f64) -> (u32, u32) {
    let ratio = effective_pixel_ratio(dpr, max_ratio);
    let px = |css: f64| ((css.max(0.0) * ratio).round() as u32).max(1);
    (px(css_width), px(css_height))
}

/// Map a client-space position into normalized device coordinates of the
/// box at `origin` with `size`: corners land on +-1, y points up.
///
/// Positions outside the box map outside `[-1, 1]`; clamping is left to the
/// session. An empty box maps everything to the center.
#[inline]
pub fn pointer_ndc(client: Vec2, origin: Vec2, size: Vec2) -> Vec2 {
    if !(size.x > 0.0 && size.y > 0.0) {
        return Vec2::ZERO;
    }
    let uv = (client - origin) / size;
    Vec2::new(uv.x * 2.0 - 1.0, 1.0 - uv.y * 2.0)
}
