use crate::overlay;
use scene_core::{key_action, KeyAction, SceneController};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    scene: &Rc<RefCell<SceneController>>,
    document: &web::Document,
) {
    if ev.repeat() || ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
        return;
    }
    match key_action(&ev.key()) {
        Some(KeyAction::ResetScene) => scene.borrow_mut().reset(),
        Some(KeyAction::TogglePanel) => overlay::toggle_panel(document),
        Some(KeyAction::ToggleWalls) => {
            let shown = scene.borrow_mut().toggle_walls();
            log::info!("[walls] {}", if shown { "revealed" } else { "hidden" });
        }
        None => {}
    }
}

pub fn wire_global_keydown(scene: Rc<RefCell<SceneController>>, document: web::Document) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, &scene, &document);
    }) as Box<dyn FnMut(_)>);
    if let Some(w) = web::window() {
        let _ = w.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
