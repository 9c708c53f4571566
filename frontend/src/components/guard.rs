use crate::state::session::{use_session_state, Role, SessionState, LOGIN_PATH};
use crate::utils::storage as storage_utils;
use leptos::*;

fn should_render_children(state: &SessionState) -> bool {
    state.is_authenticated()
}

fn should_render_role_children(state: &SessionState, role: Role) -> bool {
    state.is_authenticated() && state.role() == Some(role)
}

/// Where a signed-in user without `required` is sent instead.
fn fallback_target(state: &SessionState, required: Role) -> Option<&'static str> {
    if !state.is_authenticated() {
        Some(LOGIN_PATH)
    } else if state.role() != Some(required) {
        Some("/dashboard")
    } else {
        None
    }
}

#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let state = use_session_state();
    create_effect(move |_| {
        if !state.with(SessionState::is_authenticated) {
            storage_utils::redirect_to(LOGIN_PATH);
        }
    });
    view! {
        <Show when=move || state.with(should_render_children)>
            {children()}
        </Show>
    }
}

#[component]
pub fn RequireRole(role: Role, children: ChildrenFn) -> impl IntoView {
    let state = use_session_state();
    create_effect(move |_| {
        if let Some(target) = state.with(|state| fallback_target(state, role)) {
            log::debug!("route requires {}; redirecting to {}", role.label(), target);
            storage_utils::redirect_to(target);
        }
    });
    view! {
        <Show when=move || state.with(|state| should_render_role_children(state, role))>
            {children()}
        </Show>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::{RequireRole, RequireSession};
    use crate::state::session::{Role, Session, SessionProvider};
    use crate::test_support::helpers::{employee_user, hr_user};
    use crate::test_support::ssr::render_to_string;
    use leptos::*;

    #[test]
    fn require_session_renders_children_when_authenticated() {
        let html = render_to_string(move || {
            view! {
                <SessionProvider session=Session::authenticated("t", employee_user())>
                    <RequireSession>
                        {|| view! { <div>"protected-content"</div> }}
                    </RequireSession>
                </SessionProvider>
            }
        });
        assert!(html.contains("protected-content"));
    }

    #[test]
    fn require_session_hides_children_when_signed_out() {
        let html = render_to_string(move || {
            view! {
                <SessionProvider session=Session::signed_out()>
                    <RequireSession>
                        {|| view! { <div>"protected-content"</div> }}
                    </RequireSession>
                </SessionProvider>
            }
        });
        assert!(!html.contains("protected-content"));
    }

    #[test]
    fn require_role_hides_children_for_other_role() {
        let html = render_to_string(move || {
            view! {
                <SessionProvider session=Session::authenticated("t", employee_user())>
                    <RequireRole role=Role::Hr>
                        {|| view! { <div>"hr-only"</div> }}
                    </RequireRole>
                </SessionProvider>
            }
        });
        assert!(!html.contains("hr-only"));
    }

    #[test]
    fn require_role_renders_children_for_matching_role() {
        let html = render_to_string(move || {
            view! {
                <SessionProvider session=Session::authenticated("t", hr_user())>
                    <RequireRole role=Role::Hr>
                        {|| view! { <div>"hr-only"</div> }}
                    </RequireRole>
                </SessionProvider>
            }
        });
        assert!(html.contains("hr-only"));
    }
}
