use anyhow::{anyhow, Context};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

fn read_global_string(global: &str, keys: &[&str]) -> Option<String> {
    let window = web_sys::window()?;
    let any = js_sys::Reflect::get(&window, &global.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    keys.iter()
        .filter_map(|key| js_sys::Reflect::get(&obj, &(*key).into()).ok())
        .find(|value| !value.is_undefined() && !value.is_null())
        .and_then(|value| value.as_string())
}

// window.__HRMS_ENV = { API_BASE_URL: "..." } (env.js) wins over
// window.__HRMS_CONFIG = { api_base_url: "..." }.
fn snapshot_from_globals() -> Option<String> {
    read_global_string("__HRMS_ENV", &["API_BASE_URL", "api_base_url"])
        .or_else(|| read_global_string("__HRMS_CONFIG", &["api_base_url", "API_BASE_URL"]))
}

fn cache_base_url(value: &str) -> String {
    let value = normalize_base_url(value);
    let _ = API_BASE_URL.set(value.clone());
    API_BASE_URL.get().cloned().unwrap_or(value)
}

pub fn normalize_base_url(value: &str) -> String {
    value.trim().trim_end_matches('/').to_string()
}

async fn fetch_runtime_config() -> anyhow::Result<RuntimeConfig> {
    let resp = reqwest::get("./config.json")
        .await
        .context("config.json request failed")?;
    if !resp.status().is_success() {
        return Err(anyhow!("config.json returned {}", resp.status()));
    }
    resp.json::<RuntimeConfig>()
        .await
        .context("config.json is not valid runtime config")
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = snapshot_from_globals() {
        return cache_base_url(&existing);
    }
    match fetch_runtime_config().await {
        Ok(RuntimeConfig {
            api_base_url: Some(url),
        }) if !url.trim().is_empty() => return cache_base_url(&url),
        Ok(_) => log::debug!("config.json has no api_base_url; using default"),
        Err(err) => log::debug!("runtime config unavailable: {:#}", err),
    }
    cache_base_url(DEFAULT_API_BASE_URL)
}

pub async fn init() {
    let base = await_api_base_url().await;
    log::info!("API base URL: {}", base);
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen::JsValue;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn set_global(name: &str, key: &str, value: &str) {
        let window = web_sys::window().unwrap();
        let obj = js_sys::Object::new();
        js_sys::Reflect::set(&obj, &key.into(), &value.into()).unwrap();
        js_sys::Reflect::set(&window, &name.into(), &obj).unwrap();
    }

    fn clear_global(name: &str) {
        let window = web_sys::window().unwrap();
        js_sys::Reflect::set(&window, &name.into(), &JsValue::UNDEFINED).unwrap();
    }

    #[wasm_bindgen_test]
    fn env_global_wins_over_config_global() {
        set_global("__HRMS_CONFIG", "api_base_url", "https://config.example.com/api");
        set_global("__HRMS_ENV", "API_BASE_URL", "https://env.example.com/api");
        assert_eq!(
            snapshot_from_globals().as_deref(),
            Some("https://env.example.com/api")
        );

        clear_global("__HRMS_ENV");
        assert_eq!(
            snapshot_from_globals().as_deref(),
            Some("https://config.example.com/api")
        );
        clear_global("__HRMS_CONFIG");
        assert!(snapshot_from_globals().is_none());
    }
}
