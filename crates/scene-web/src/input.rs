use glam::Vec2;
use scene_core::SceneVariant;

/// Where the environment map is fetched from when the page asks for the
/// environment variant without naming a file.
pub const DEFAULT_ENV_URL: &str = "assets/environment.hdr";

// DOM WheelEvent.deltaMode values
const DOM_DELTA_LINE: u32 = 1;
const DOM_DELTA_PAGE: u32 = 2;
const LINE_HEIGHT_PX: f32 = 16.0;

// ---------------- Pointer helpers ----------------

/// Client coordinates to CSS pixels relative to the canvas' top-left corner.
/// Positions outside the canvas pass through unclamped.
#[inline]
pub fn client_to_canvas_css(client_x: f32, client_y: f32, rect_left: f32, rect_top: f32) -> Vec2 {
    Vec2::new(client_x - rect_left, client_y - rect_top)
}

/// Normalize a wheel delta to pixels whatever the event's delta mode.
#[inline]
pub fn wheel_delta_px(delta_y: f64, delta_mode: u32, page_height: f32) -> f32 {
    let d = delta_y as f32;
    match delta_mode {
        DOM_DELTA_LINE => d * LINE_HEIGHT_PX,
        DOM_DELTA_PAGE => d * page_height.max(1.0),
        _ => d,
    }
}

// ---------------- Page configuration ----------------

/// Read the scene variant from the canvas' `data-variant` / `data-env-url`.
///
/// Anything other than `env` / `environment` selects the plain scene.
pub fn variant_from_attrs(variant: Option<&str>, env_url: Option<&str>) -> SceneVariant {
    match variant.map(str::trim) {
        Some(v) if v.eq_ignore_ascii_case("env") || v.eq_ignore_ascii_case("environment") => {
            let source = env_url
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .unwrap_or(DEFAULT_ENV_URL);
            SceneVariant::EnvironmentMapped {
                source: source.to_string(),
            }
        }
        _ => SceneVariant::Plain,
    }
}

/// Parse a `data-seed` attribute.
#[inline]
pub fn seed_from_attr(seed: Option<&str>) -> Option<u64> {
    seed.and_then(|s| s.trim().parse().ok())
}

/// Parse a `data-damping` attribute: a per-frame fraction in (0, 1].
/// Missing, zero or malformed values leave orbiting undamped.
#[inline]
pub fn damping_from_attr(damping: Option<&str>) -> Option<f32> {
    damping
        .and_then(|s| s.trim().parse::<f32>().ok())
        .filter(|f| f.is_finite() && *f > 0.0)
        .map(|f| f.min(1.0))
}

// ---------------- Panel values ----------------

/// Slider text to a size value; rejects anything non-finite.
#[inline]
pub fn parse_slider_value(value: &str) -> Option<f32> {
    value.trim().parse::<f32>().ok().filter(|v| v.is_finite())
}
