#![cfg(target_arch = "wasm32")]
mod dom;
mod environment;
mod events;
mod frame;
mod input;
mod overlay;
mod panel;

use scene_core::{SceneConfig, SceneController};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("scene-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?;
    let canvas: web_sys::HtmlCanvasElement = canvas_el
        .clone()
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let config = SceneConfig {
        variant: input::variant_from_attrs(
            dom::data_attr(&canvas_el, "variant").as_deref(),
            dom::data_attr(&canvas_el, "env-url").as_deref(),
        ),
        seed: input::seed_from_attr(dom::data_attr(&canvas_el, "seed").as_deref()),
        orbit_damping: input::damping_from_attr(dom::data_attr(&canvas_el, "damping").as_deref()),
        ..SceneConfig::default()
    };
    let viewport = dom::sync_canvas_backing_size(&canvas);
    let scene = Rc::new(RefCell::new(SceneController::new(config, viewport)));

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        scene: scene.clone(),
    });
    events::wire_global_keydown(scene.clone(), document.clone());
    overlay::wire_popup_buttons(&document);
    if let Err(e) = panel::build(&document, scene.clone()) {
        log::warn!("[panel] unavailable: {:?}", e);
    }

    let env_url = scene.borrow().environment_source().map(str::to_owned);
    if let Some(url) = env_url {
        environment::spawn_load(url, scene.clone());
    }

    let gpu = frame::init_gpu(&canvas).await;
    if gpu.is_none() {
        log::warn!("[gpu] no renderer; input still updates the scene");
    }
    frame::start_loop(Rc::new(RefCell::new(frame::FrameContext { scene, gpu })));
    Ok(())
}
