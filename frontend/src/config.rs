use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::access::UnknownRoleMenu;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default, alias = "API_BASE_URL")]
    pub api_base_url: Option<String>,
    #[serde(default, alias = "UNKNOWN_ROLE_MENU")]
    pub unknown_role_menu: Option<UnknownRoleMenu>,
}

impl RuntimeConfig {
    /// Fields set in `self` win; gaps are filled from `other`.
    fn or(self, other: RuntimeConfig) -> RuntimeConfig {
        RuntimeConfig {
            api_base_url: self.api_base_url.or(other.api_base_url),
            unknown_role_menu: self.unknown_role_menu.or(other.unknown_role_menu),
        }
    }

    fn is_complete(&self) -> bool {
        self.api_base_url.is_some() && self.unknown_role_menu.is_some()
    }
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();
static UNKNOWN_ROLE_MENU: OnceLock<UnknownRoleMenu> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
fn read_global(name: &str) -> Option<RuntimeConfig> {
    // Optional globals: window.__ESTATE_ENV (env.js) or window.__ESTATE_CONFIG.
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &name.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let text = js_sys::JSON::stringify(&any).ok()?.as_string()?;
    serde_json::from_str(&text)
        .map_err(|err| log::warn!("ignoring malformed {}: {}", name, err))
        .ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn read_global(_name: &str) -> Option<RuntimeConfig> {
    None
}

fn snapshot_from_globals() -> RuntimeConfig {
    let env = read_global("__ESTATE_ENV").unwrap_or_default();
    let window_config = read_global("__ESTATE_CONFIG").unwrap_or_default();
    env.or(window_config)
}

#[cfg(target_arch = "wasm32")]
async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let origin = web_sys::window()?.location().origin().ok()?;
    let resp = reqwest::get(format!("{}/config.json", origin)).await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    None
}

fn apply(cfg: RuntimeConfig) -> String {
    let base = cfg
        .api_base_url
        .map(|url| url.trim_end_matches('/').to_string())
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
    let _ = UNKNOWN_ROLE_MENU.set(cfg.unknown_role_menu.unwrap_or_default());
    let base = API_BASE_URL.get_or_init(|| base).clone();
    log::debug!("runtime config resolved: api_base_url={}", base);
    base
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    let globals = snapshot_from_globals();
    if globals.is_complete() {
        return apply(globals);
    }
    let fetched = fetch_runtime_config().await.unwrap_or_default();
    apply(globals.or(fetched))
}

/// Menu policy for unmapped role codes; `Full` until config says otherwise.
pub fn unknown_role_menu() -> UnknownRoleMenu {
    UNKNOWN_ROLE_MENU.get().copied().unwrap_or_default()
}

pub async fn init() {
    let _ = await_api_base_url().await;
}
