use crate::config;
use crate::state::session::use_session_state;
use leptos::*;

/// Signed-out landing for the `/login` route. Sign-in itself happens at the
/// identity provider, which leaves the session in `localStorage`.
#[component]
pub fn LoginPage() -> impl IntoView {
    let state = use_session_state();
    let provider_url = config::login_url();
    let external = provider_url != crate::state::session::LOGIN_PATH;

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50">
            <div class="max-w-md w-full bg-white shadow rounded-xl p-8 space-y-6 text-center">
                <h1 class="text-2xl font-semibold text-gray-900">"AssetVerse"</h1>
                <Show
                    when=move || state.with(|state| state.is_authenticated())
                    fallback=move || {
                        let provider_url = provider_url.clone();
                        view! {
                            <p class="text-sm text-gray-500">"You are signed out."</p>
                            <Show
                                when=move || external
                                fallback=|| view! {
                                    <p class="text-sm text-gray-500">"No sign-in provider is configured."</p>
                                }
                            >
                                <a
                                    href=provider_url.clone()
                                    class="inline-block w-full px-4 py-2 rounded-md text-white bg-indigo-600 hover:bg-indigo-700"
                                >
                                    "Sign in"
                                </a>
                            </Show>
                        }
                    }
                >
                    <a href="/dashboard" class="text-indigo-600 hover:underline">"Go to dashboard"</a>
                </Show>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::session::Session;
    use crate::test_support::helpers::hr_user;
    use crate::test_support::ssr::render_with_session;

    #[test]
    fn signed_out_visitor_sees_sign_out_notice() {
        let html = render_with_session(Session::signed_out(), || view! { <LoginPage /> });
        assert!(html.contains("You are signed out."));
        assert!(!html.contains("Go to dashboard"));
    }

    #[test]
    fn signed_in_user_is_pointed_to_dashboard() {
        let html = render_with_session(Session::authenticated("t", hr_user()), || {
            view! { <LoginPage /> }
        });
        assert!(html.contains("Go to dashboard"));
    }
}
