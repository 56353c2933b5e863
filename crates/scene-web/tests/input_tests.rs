// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use input::*;
use scene_core::SceneVariant;

#[test]
fn client_position_is_relative_to_canvas() {
    let p = client_to_canvas_css(130.0, 95.0, 30.0, 15.0);
    assert_eq!(p, glam::Vec2::new(100.0, 80.0));
}

#[test]
fn positions_outside_canvas_are_not_clamped() {
    let p = client_to_canvas_css(5.0, 2000.0, 30.0, 15.0);
    assert_eq!(p, glam::Vec2::new(-25.0, 1985.0));
}

#[test]
fn wheel_delta_modes_normalize_to_pixels() {
    assert_eq!(wheel_delta_px(-100.0, 0, 600.0), -100.0);
    assert_eq!(wheel_delta_px(3.0, 1, 600.0), 48.0);
    assert_eq!(wheel_delta_px(-1.0, 2, 600.0), -600.0);
}

#[test]
fn plain_variant_is_the_default() {
    assert_eq!(variant_from_attrs(None, None), SceneVariant::Plain);
    assert_eq!(variant_from_attrs(Some("plain"), Some("x.hdr")), SceneVariant::Plain);
    assert_eq!(variant_from_attrs(Some("bogus"), None), SceneVariant::Plain);
}

#[test]
fn environment_variant_reads_the_url() {
    assert_eq!(
        variant_from_attrs(Some("env"), Some(" maps/studio.hdr ")),
        SceneVariant::EnvironmentMapped {
            source: "maps/studio.hdr".into()
        }
    );
    assert_eq!(
        variant_from_attrs(Some("Environment"), Some("")),
        SceneVariant::EnvironmentMapped {
            source: DEFAULT_ENV_URL.into()
        }
    );
}

#[test]
fn seed_attribute_parsing() {
    assert_eq!(seed_from_attr(Some("42")), Some(42));
    assert_eq!(seed_from_attr(Some(" 7 ")), Some(7));
    assert_eq!(seed_from_attr(Some("-1")), None);
    assert_eq!(seed_from_attr(None), None);
}

#[test]
fn slider_values_must_be_finite_numbers() {
    assert_eq!(parse_slider_value("0.75"), Some(0.75));
    assert_eq!(parse_slider_value(" 2 "), Some(2.0));
    assert_eq!(parse_slider_value("NaN"), None);
    assert_eq!(parse_slider_value("inf"), None);
    assert_eq!(parse_slider_value(""), None);
}

#[test]
fn damping_attribute_parsing() {
    assert_eq!(damping_from_attr(Some("0.1")), Some(0.1));
    assert_eq!(damping_from_attr(Some(" 3 ")), Some(1.0));
    assert_eq!(damping_from_attr(Some("0")), None);
    assert_eq!(damping_from_attr(Some("-0.5")), None);
    assert_eq!(damping_from_attr(Some("soft")), None);
    assert_eq!(damping_from_attr(None), None);
}
