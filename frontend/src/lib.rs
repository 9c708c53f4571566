use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod state;
#[cfg(test)]
mod test_support;
pub mod utils;

use components::{
    guard::{RequireRole, RequireSession},
    layout::DashboardLayout,
    prompt::{PromptHost, PromptOutlet, Prompts},
};
use pages::{
    AssetListPage, DashboardHome, HomePage, LoginPage, ManageEmployeesPage, ManageRequestsPage,
    MyAssetsPage,
};
use state::session::{Role, SessionProvider};

fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log_level()).is_err() {
        web_sys::console::warn_1(&"logger already initialised".into());
    }
    log::info!("starting AssetVerse frontend");

    // window.__ASSETVERSE_ENV wins over ./config.json; the fetch runs in the background.
    spawn_local(async move {
        config::init().await;
        log::debug!("runtime config initialised");
    });

    mount_to_body(App);
}

#[component]
fn App() -> impl IntoView {
    provide_meta_context();
    let host = PromptHost::new();
    provide_context(Prompts::new(host.clone()));

    view! {
        <Title text="AssetVerse"/>
        <SessionProvider>
            <PromptOutlet host=host/>
            <Router>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/dashboard" view=DashboardIndex/>
                    <Route path="/dashboard/manage-requests" view=HrManageRequests/>
                    <Route path="/dashboard/manage-employees" view=HrManageEmployees/>
                    <Route path="/dashboard/all-asset" view=SignedInAssetList/>
                    <Route path="/dashboard/my-inventory" view=EmployeeInventory/>
                </Routes>
            </Router>
        </SessionProvider>
    }
}

#[component]
fn DashboardIndex() -> impl IntoView {
    view! { <RequireSession><DashboardLayout><DashboardHome/></DashboardLayout></RequireSession> }
}

#[component]
fn HrManageRequests() -> impl IntoView {
    view! { <RequireRole role=Role::Hr><DashboardLayout><ManageRequestsPage/></DashboardLayout></RequireRole> }
}

#[component]
fn HrManageEmployees() -> impl IntoView {
    view! { <RequireRole role=Role::Hr><DashboardLayout><ManageEmployeesPage/></DashboardLayout></RequireRole> }
}

#[component]
fn SignedInAssetList() -> impl IntoView {
    view! { <RequireSession><DashboardLayout><AssetListPage/></DashboardLayout></RequireSession> }
}

#[component]
fn EmployeeInventory() -> impl IntoView {
    view! { <RequireRole role=Role::Employee><DashboardLayout><MyAssetsPage/></DashboardLayout></RequireRole> }
}
