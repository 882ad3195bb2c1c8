use room_core::{AssetError, AssetSource};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Packaged assets fetched relative to the page URL.
pub struct FetchSource;

fn fetch_err(path: &str, e: wasm_bindgen::JsValue) -> AssetError {
    AssetError::Fetch {
        path: path.to_string(),
        reason: format!("{:?}", e),
    }
}

impl AssetSource for FetchSource {
    async fn fetch(&self, path: &str) -> Result<Vec<u8>, AssetError> {
        let win = web::window().ok_or_else(|| AssetError::Fetch {
            path: path.to_string(),
            reason: "no window".into(),
        })?;
        let resp_val = JsFuture::from(win.fetch_with_str(path))
            .await
            .map_err(|e| fetch_err(path, e))?;
        let resp: web::Response = resp_val.dyn_into().map_err(|e| fetch_err(path, e))?;

        if !resp.ok() {
            return Err(AssetError::Status {
                path: path.to_string(),
                status: resp.status(),
            });
        }

        let buf_promise = resp.array_buffer().map_err(|e| fetch_err(path, e))?;
        let buf_val = JsFuture::from(buf_promise)
            .await
            .map_err(|e| fetch_err(path, e))?;
        let u8 = js_sys::Uint8Array::new(&buf_val);
        let mut out = vec![0u8; u8.length() as usize];
        u8.copy_to(&mut out);
        Ok(out)
    }
}
