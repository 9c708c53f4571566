use crate::components::layout::{menu_for, MenuItem};
use crate::state::session::use_session_state;
use leptos::*;

#[component]
pub fn HomePage() -> impl IntoView {
    let state = use_session_state();
    let target = move || {
        if state.with(|state| state.is_authenticated()) {
            "/dashboard"
        } else {
            "/login"
        }
    };
    view! {
        <div class="min-h-screen bg-gray-50">
            <div class="max-w-7xl mx-auto py-12 px-4 sm:px-6 lg:px-8 text-center">
                <h1 class="text-4xl font-extrabold text-gray-900 sm:text-5xl">"AssetVerse"</h1>
                <p class="mt-3 max-w-md mx-auto text-base text-gray-500 sm:text-lg">
                    "Track company assets, review requests and assign inventory to your team."
                </p>
                <div class="mt-6">
                    <a
                        href=target
                        class="inline-flex items-center justify-center px-8 py-3 rounded-md text-white bg-indigo-600 hover:bg-indigo-700"
                    >
                        "Get started"
                    </a>
                </div>
            </div>
        </div>
    }
}

/// Landing view of `/dashboard`: a greeting and the role's shortcuts.
#[component]
pub fn DashboardHome() -> impl IntoView {
    let state = use_session_state();
    view! {
        <div class="space-y-6">
            <h2 class="text-2xl font-semibold text-gray-900">
                {move || {
                    state.with(|state| {
                        state
                            .user
                            .as_ref()
                            .map(|user| format!("Welcome, {}", user.display_name()))
                            .unwrap_or_else(|| "Welcome".to_string())
                    })
                }}
            </h2>
            <div class="grid gap-4 sm:grid-cols-2 lg:grid-cols-3">
                {move || {
                    state
                        .with(|state| state.role())
                        .map(|role| {
                            menu_for(role)
                                .iter()
                                .map(|entry| view! {
                                    <div class="bg-white rounded-xl shadow"><MenuItem entry=*entry /></div>
                                })
                                .collect_view()
                        })
                }}
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::session::Session;
    use crate::test_support::helpers::employee_user;
    use crate::test_support::ssr::render_with_session;

    #[test]
    fn home_links_signed_out_visitors_to_login() {
        let html = render_with_session(Session::signed_out(), || view! { <HomePage /> });
        assert!(html.contains("href=\"/login\""));
    }

    #[test]
    fn dashboard_home_greets_user_with_role_shortcuts() {
        let html = render_with_session(Session::authenticated("t", employee_user()), || {
            view! { <DashboardHome /> }
        });
        assert!(html.contains("Welcome, Bob"));
        assert!(html.contains("Request an asset"));
    }
}
