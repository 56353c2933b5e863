use scene_core::{EnvironmentEvent, EnvironmentLight, SceneController};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

async fn fetch_bytes(url: &str) -> anyhow::Result<Vec<u8>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow::anyhow!("fetch {url}: {:?}", e))?;
    let resp: web::Response = resp_value
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    if !resp.ok() {
        anyhow::bail!("fetch {url}: HTTP {}", resp.status());
    }
    let buf = JsFuture::from(resp.array_buffer().map_err(|e| anyhow::anyhow!("{:?}", e))?)
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(js_sys::Uint8Array::new(&buf).to_vec())
}

async fn load(url: &str) -> anyhow::Result<EnvironmentLight> {
    let bytes = fetch_bytes(url).await?;
    log::info!("[env] fetched {} bytes from {}", bytes.len(), url);
    Ok(EnvironmentLight::decode_hdr(&bytes)?)
}

/// Fetch and decode the environment map in the background, then hand the
/// outcome to the scene. The scene stays interactive meanwhile.
pub fn spawn_load(url: String, scene: Rc<RefCell<SceneController>>) {
    spawn_local(async move {
        let event = match load(&url).await {
            Ok(env) => EnvironmentEvent::Loaded(env),
            Err(e) => EnvironmentEvent::Failed(format!("{e:#}")),
        };
        scene.borrow_mut().handle_environment(event);
    });
}
