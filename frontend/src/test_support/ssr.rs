use crate::state::session::{Session, SessionProvider};
use leptos::*;

/// Runs `f` inside a fresh reactive runtime, disposed afterwards.
pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = create_runtime();
    let output = f();
    runtime.dispose();
    output
}

/// Server-renders `view` with resource loading suppressed, so resources stay
/// empty unless the test sets them.
pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| view().into_view().render_to_string().to_string());
    leptos_reactive::suppress_resource_load(false);
    html
}

pub fn render_with_session<F, N>(session: Session, view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    render_to_string(move || {
        view! { <SessionProvider session=session>{view()}</SessionProvider> }
    })
}
