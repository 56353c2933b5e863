use crate::dom;
use crate::input;
use glam::Vec2;
use scene_core::{PointerButton, SceneController};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<SceneController>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_mousedown(&w);
    wire_mousemove(&w);
    wire_mouseup(&w);
    wire_wheel(&w);
    wire_contextmenu(&w);
    wire_resize(&w);
}

#[inline]
fn mouse_canvas_css(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    input::client_to_canvas_css(
        ev.client_x() as f32,
        ev.client_y() as f32,
        rect.left() as f32,
        rect.top() as f32,
    )
}

fn wire_mousedown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let pos = mouse_canvas_css(&ev, &w.canvas);
        let button = PointerButton::from_dom(ev.button());
        let consumed = w.scene.borrow_mut().pointer_down(button, pos.x, pos.y);
        // middle-click autoscroll and text selection would fight the gesture
        if consumed && button != PointerButton::Primary {
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
    closure.forget();
}

// move/up listen on the window so a drag keeps working past the canvas edge
fn wire_mousemove(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let pos = mouse_canvas_css(&ev, &w.canvas);
        w.scene.borrow_mut().pointer_move(pos.x, pos.y);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_mouseup(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let button = PointerButton::from_dom(ev.button());
        w.scene.borrow_mut().pointer_up(button);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_wheel(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        let page_height = w.scene.borrow().viewport().height;
        let dy = input::wheel_delta_px(ev.delta_y(), ev.delta_mode(), page_height);
        w.scene.borrow_mut().wheel(dy);
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener.add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    closure.forget();
}

// secondary button orbits, so the browser menu stays out of the way
fn wire_contextmenu(w: &InputWiring) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::Event| {
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = w
        .canvas
        .add_event_listener_with_callback("contextmenu", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_resize(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        let viewport = dom::sync_canvas_backing_size(&w.canvas);
        w.scene.borrow_mut().resize(viewport);
    }) as Box<dyn FnMut()>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
