use web_sys::{Storage, Window};

#[cfg(target_arch = "wasm32")]
pub fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| "No window object".to_string())
}

// Host builds (SSR and tests) never have a browser window.
#[cfg(not(target_arch = "wasm32"))]
pub fn window() -> Result<Window, String> {
    Err("No window object".to_string())
}

pub fn local_storage() -> Result<Storage, String> {
    window()?
        .local_storage()
        .map_err(|_| "No localStorage".to_string())?
        .ok_or_else(|| "No localStorage".to_string())
}

pub fn read_item(key: &str) -> Option<String> {
    local_storage().ok()?.get_item(key).ok().flatten()
}

pub fn remove_items(keys: &[&str]) {
    if let Ok(storage) = local_storage() {
        for key in keys {
            let _ = storage.remove_item(key);
        }
    }
}

pub fn current_path() -> Option<String> {
    window().ok()?.location().pathname().ok()
}

pub fn redirect_to(path: &str) {
    if current_path().as_deref() == Some(path) {
        return;
    }
    if let Ok(win) = window() {
        let _ = win.location().set_href(path);
    }
}
