use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_LOGIN_URL: &str = "/login";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
    pub login_url: Option<String>,
}

impl RuntimeConfig {
    /// Fills missing fields from `fallback`.
    pub fn or(self, fallback: RuntimeConfig) -> RuntimeConfig {
        RuntimeConfig {
            api_base_url: self.api_base_url.or(fallback.api_base_url),
            login_url: self.login_url.or(fallback.login_url),
        }
    }

    fn is_complete(&self) -> bool {
        self.api_base_url.is_some() && self.login_url.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub api_base_url: String,
    pub login_url: String,
}

impl From<RuntimeConfig> for ResolvedConfig {
    fn from(cfg: RuntimeConfig) -> Self {
        Self {
            api_base_url: cfg
                .api_base_url
                .map(|url| url.trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty())
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            login_url: cfg
                .login_url
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOGIN_URL.to_string()),
        }
    }
}

static RESOLVED: OnceLock<ResolvedConfig> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
fn read_global(global: &str, keys: &[&str]) -> Option<String> {
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &global.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    keys.iter().find_map(|key| {
        js_sys::Reflect::get(&obj, &(*key).into())
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
            .and_then(|v| v.as_string())
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn read_global(_global: &str, _keys: &[&str]) -> Option<String> {
    None
}

fn snapshot_from(global: &str) -> RuntimeConfig {
    RuntimeConfig {
        api_base_url: read_global(global, &["API_BASE_URL", "api_base_url"]),
        login_url: read_global(global, &["LOGIN_URL", "login_url"]),
    }
}

fn snapshot_from_globals() -> RuntimeConfig {
    // window.__ASSETVERSE_ENV (env.js) takes precedence over window.__ASSETVERSE_CONFIG
    snapshot_from("__ASSETVERSE_ENV").or(snapshot_from("__ASSETVERSE_CONFIG"))
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

pub async fn resolve() -> ResolvedConfig {
    if let Some(cached) = RESOLVED.get() {
        return cached.clone();
    }
    let mut cfg = snapshot_from_globals();
    if !cfg.is_complete() {
        if let Some(fetched) = fetch_runtime_config().await {
            cfg = cfg.or(fetched);
        }
    }
    let resolved = ResolvedConfig::from(cfg);
    log::debug!("runtime config resolved: api_base_url={}", resolved.api_base_url);
    RESOLVED.get_or_init(|| resolved).clone()
}

pub async fn await_api_base_url() -> String {
    resolve().await.api_base_url
}

/// Login target known without awaiting; defaults until `init` has run.
pub fn login_url() -> String {
    RESOLVED
        .get()
        .map(|cfg| cfg.login_url.clone())
        .unwrap_or_else(|| DEFAULT_LOGIN_URL.to_string())
}

pub async fn init() {
    let _ = resolve().await;
}
