use crate::api::ApiError;
use leptos::*;

#[component]
pub fn InlineErrorMessage(error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.with(Option::is_some) fallback=|| ()>
            <div class="bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded space-y-1 my-2">
                <div class="font-bold">{move || error.get().map(|e| e.message).unwrap_or_default()}</div>
                {move || error.get().map(|e| {
                    let detail = match (e.code.as_str(), e.status) {
                        ("UNKNOWN", _) | ("", _) => None,
                        (code, Some(status)) => Some(format!("Code: {} ({})", code, status)),
                        (code, None) => Some(format!("Code: {}", code)),
                    };
                    detail.map(|detail| view! { <div class="text-xs opacity-75">{detail}</div> })
                })}
            </div>
        </Show>
    }
}
