use island_core::{AssetError, AssetKind, SceneController};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Fetch every scene asset in the background and record the outcome on the
/// controller's registry. A failure is recorded, never propagated.
pub fn spawn_asset_loads(ctl: Rc<RefCell<SceneController>>, base_url: &str) {
    for kind in AssetKind::ALL {
        let ctl = ctl.clone();
        let url = format!("{}{}", base_url, kind.path());
        spawn_local(async move {
            let path = kind.path();
            let outcome = fetch_len(&url, path).await;
            let mut ctl = ctl.borrow_mut();
            let recorded = match outcome {
                Ok(bytes) => ctl.assets_mut().mark_ready(path, bytes),
                Err(e) => ctl.assets_mut().mark_failed(path, e),
            };
            if let Err(e) = recorded {
                log::error!("[assets] {}", e);
            }
        });
    }
}

async fn fetch_len(url: &str, path: &str) -> Result<usize, AssetError> {
    let window = web::window().ok_or_else(|| network(path, "no window"))?;
    let resp = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| network(path, &js_message(&e)))?;
    let resp: web::Response = resp
        .dyn_into()
        .map_err(|e| network(path, &js_message(&e)))?;
    if !resp.ok() {
        return Err(AssetError::Http {
            path: path.to_string(),
            status: resp.status(),
        });
    }
    let body = resp.array_buffer().map_err(|e| network(path, &js_message(&e)))?;
    let body = JsFuture::from(body)
        .await
        .map_err(|e| network(path, &js_message(&e)))?;
    Ok(js_sys::ArrayBuffer::from(body).byte_length() as usize)
}

fn network(path: &str, message: &str) -> AssetError {
    AssetError::Network {
        path: path.to_string(),
        message: message.to_string(),
    }
}

fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
