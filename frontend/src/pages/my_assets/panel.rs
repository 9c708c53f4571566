use super::utils::{filter_assigned, type_label};
use crate::api::{ApiError, AssignedAsset};
use crate::components::{
    empty_state::EmptyState, error::InlineErrorMessage, layout::LoadingSpinner,
};
use crate::state::session::{use_api_client, use_session_state};
use crate::utils::time::display_date;
use leptos::*;

pub type AssignedResource = Resource<Option<String>, Result<Vec<AssignedAsset>, ApiError>>;

#[component]
fn AssignedRow(asset: AssignedAsset) -> impl IntoView {
    let kind = type_label(&asset);
    let assigned_on = display_date(asset.assignment_date.as_deref());
    view! {
        <tr class="hover:bg-gray-50">
            <td class="px-6 py-4 text-sm font-medium text-gray-900">{asset.asset_name.clone()}</td>
            <td class="px-6 py-4 text-sm text-gray-600">{kind}</td>
            <td class="px-6 py-4 text-sm text-gray-600">
                {asset.company_name.clone().unwrap_or_else(|| "N/A".to_string())}
            </td>
            <td class="px-6 py-4 text-sm text-gray-600">{assigned_on}</td>
            <td class="px-6 py-4 text-sm text-gray-600 capitalize">{asset.status.clone()}</td>
        </tr>
    }
}

#[component]
pub fn AssignedAssetsTable(resource: AssignedResource) -> impl IntoView {
    let search = create_rw_signal(String::new());
    let type_filter = create_rw_signal(String::new());
    let error = Signal::derive(move || resource.get().and_then(|result| result.err()));
    let rows = create_memo(move |_| {
        let assets = resource
            .get()
            .and_then(|result| result.ok())
            .unwrap_or_default();
        type_filter.with(|kind| search.with(|needle| filter_assigned(&assets, needle, kind)))
    });
    let total = move || {
        resource
            .get()
            .and_then(|result| result.ok())
            .map(|assets| assets.len())
            .unwrap_or(0)
    };

    view! {
        <div class="space-y-6">
            <div class="flex flex-col md:flex-row md:items-center gap-4">
                <input
                    type="text"
                    placeholder="Search assets..."
                    class="flex-1 px-4 py-3 border border-gray-300 rounded-lg"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <select
                    class="bg-white border border-gray-300 rounded-lg px-4 py-3"
                    on:change=move |ev| type_filter.set(event_target_value(&ev))
                >
                    <option value="">"All Types"</option>
                    <option value="Returnable">"Returnable"</option>
                    <option value="Non-returnable">"Non-returnable"</option>
                </select>
                <span class="text-sm text-gray-500">{move || format!("Total Assets: {}", total())}</span>
            </div>
            <InlineErrorMessage error=error />
            <Show
                when=move || resource.get().is_some()
                fallback=|| view! { <LoadingSpinner /> }
            >
                <Show
                    when=move || rows.with(|rows| !rows.is_empty())
                    fallback=|| view! { <EmptyState title="No assets found" description="Assets assigned to you will appear here." /> }
                >
                    <div class="overflow-x-auto bg-white rounded-lg shadow">
                        <table class="min-w-full divide-y divide-gray-200">
                            <thead class="bg-gray-50">
                                <tr>
                                    <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">"Asset"</th>
                                    <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">"Type"</th>
                                    <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">"Company"</th>
                                    <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">"Assigned"</th>
                                    <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">"Status"</th>
                                </tr>
                            </thead>
                            <tbody class="divide-y divide-gray-200">
                                <For
                                    each=move || rows.get()
                                    key=|asset| asset.id.clone()
                                    children=move |asset| view! { <AssignedRow asset=asset /> }
                                />
                            </tbody>
                        </table>
                    </div>
                </Show>
            </Show>
        </div>
    }
}

#[component]
pub fn MyAssetsPage() -> impl IntoView {
    let api = use_api_client();
    let state = use_session_state();
    let resource: AssignedResource = create_resource(
        move || state.with(|state| state.user.as_ref().map(|user| user.email.clone())),
        move |email| {
            let api = api.clone();
            async move {
                match email {
                    Some(email) => api.list_assigned_assets(&email).await,
                    None => Ok(Vec::new()),
                }
            }
        },
    );

    view! {
        <div class="container mx-auto px-4 sm:px-8 py-8 space-y-4">
            <h2 class="text-2xl font-semibold text-gray-900">"My Assets"</h2>
            <AssignedAssetsTable resource=resource />
        </div>
    }
}
