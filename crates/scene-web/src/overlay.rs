use crate::dom;
use web_sys as web;

pub const PANEL_ID: &str = "scene-panel";

/// Either popup button dismisses the `.popup` element for the session.
pub fn wire_popup_buttons(document: &web::Document) {
    for id in ["hideButton", "user2Button"] {
        let doc = document.clone();
        dom::add_click_listener(document, id, move || hide_popup(&doc));
    }
}

#[inline]
pub fn hide_popup(document: &web::Document) {
    if let Ok(Some(el)) = document.query_selector(".popup") {
        dom::set_display(&el, false);
    }
}

#[inline]
pub fn toggle_panel(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(PANEL_ID) {
        let hidden = dom::is_hidden(&el);
        dom::set_display(&el, hidden);
    }
}
