//! DOM control panel: sphere size slider, colour picker and reset button.
//!
//! Built at startup and appended to `<body>`; each control writes straight
//! into the shared scene controller.

use crate::input;
use crate::overlay::PANEL_ID;
use scene_core::constants::{SPHERE_SIZE_MAX, SPHERE_SIZE_MIN};
use scene_core::{format_hex_color, parse_hex_color, SceneController};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn js_err(e: wasm_bindgen::JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

fn labelled_row(document: &web::Document, label: &str, control: &web::Element) -> anyhow::Result<web::Element> {
    let row = document.create_element("label").map_err(js_err)?;
    row.set_class_name("panel-row");
    let text = document.create_element("span").map_err(js_err)?;
    text.set_text_content(Some(label));
    row.append_child(&text).map_err(js_err)?;
    row.append_child(control).map_err(js_err)?;
    Ok(row)
}

fn on_input(el: &web::HtmlInputElement, mut handler: impl FnMut(String) + 'static) {
    let target = el.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
        handler(target.value());
    }) as Box<dyn FnMut(_)>);
    let _ = el.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn build(document: &web::Document, scene: Rc<RefCell<SceneController>>) -> anyhow::Result<()> {
    let body = document.body().ok_or_else(|| anyhow::anyhow!("no body"))?;
    let panel = document.create_element("div").map_err(js_err)?;
    panel.set_id(PANEL_ID);
    panel.set_class_name("panel");

    let params = scene.borrow().params();

    // size slider
    let size: web::HtmlInputElement = document
        .create_element("input")
        .map_err(js_err)?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    size.set_type("range");
    size.set_min(&SPHERE_SIZE_MIN.to_string());
    size.set_max(&SPHERE_SIZE_MAX.to_string());
    size.set_step("0.01");
    size.set_value(&params.sphere_size.to_string());
    {
        let scene = scene.clone();
        on_input(&size, move |value| {
            if let Some(v) = input::parse_slider_value(&value) {
                let applied = scene.borrow_mut().set_sphere_size(v);
                log::debug!("[panel] sphere size {:.2}", applied);
            }
        });
    }
    panel
        .append_child(&labelled_row(document, "Sphere Size", &size)?)
        .map_err(js_err)?;

    // colour picker
    let color: web::HtmlInputElement = document
        .create_element("input")
        .map_err(js_err)?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    color.set_type("color");
    color.set_value(&format_hex_color(params.sphere_color));
    {
        let scene = scene.clone();
        on_input(&color, move |value| match parse_hex_color(&value) {
            Some(hex) => {
                scene.borrow_mut().set_sphere_color(hex);
                log::debug!("[panel] sphere color {}", value);
            }
            None => log::warn!("[panel] ignoring colour value {:?}", value),
        });
    }
    panel
        .append_child(&labelled_row(document, "Sphere Color", &color)?)
        .map_err(js_err)?;

    // reset
    let reset = document.create_element("button").map_err(js_err)?;
    reset.set_id("reset-scene");
    reset.set_text_content(Some("Reset Scene"));
    panel.append_child(&reset).map_err(js_err)?;
    body.append_child(&panel).map_err(js_err)?;

    crate::dom::add_click_listener(document, "reset-scene", move || scene.borrow_mut().reset());
    Ok(())
}
