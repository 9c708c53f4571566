use super::{
    repository::AssetsRepository,
    utils::{AssetQueryState, QuantityOrder},
    view_model::AssetRequestModel,
};
use crate::api::{ApiError, Asset, AssetListResponse};
use crate::components::{
    error::InlineErrorMessage, layout::LoadingSpinner, prompt::use_prompter,
};
use crate::state::{
    lifetime::Lifetime,
    session::{use_api_client, use_session_state, Role},
};
use leptos::*;

pub type AssetsResource = Resource<(), Result<AssetListResponse, ApiError>>;

#[component]
fn RequestButton(asset: Asset, repository: AssetsRepository) -> impl IntoView {
    let available = asset.is_assignable();
    let model = AssetRequestModel::new(asset, repository, use_prompter(), Lifetime::bind_to_scope());
    let in_flight = model.in_flight();
    let on_request = move |_| {
        let model = model.clone();
        let lifetime = model.lifetime().clone();
        lifetime.spawn(async move {
            model.request().await;
        });
    };
    view! {
        <button
            class="w-full bg-indigo-500 text-white px-3 py-1 rounded disabled:opacity-30 disabled:cursor-not-allowed"
            disabled=move || !available || in_flight.get()
            on:click=on_request
        >
            {move || if in_flight.get() { "Requesting..." } else { "Request Item" }}
        </button>
    }
}

#[component]
fn AssetCard(asset: Asset, repository: AssetsRepository) -> impl IntoView {
    let state = use_session_state();
    let type_label = asset
        .asset_type
        .as_ref()
        .map(|kind| kind.label().to_string())
        .unwrap_or_default();
    let requestable = asset.clone();
    view! {
        <div class="bg-white rounded-xl shadow p-4 space-y-2">
            <h3 class="font-semibold text-gray-900">{asset.name.clone()}</h3>
            <p class="text-xs uppercase tracking-wide text-gray-500">{type_label}</p>
            <p class="text-sm text-gray-700">{format!("Quantity: {}", asset.quantity)}</p>
            <Show when=move || state.with(|state| state.role() == Some(Role::Employee))>
                <RequestButton asset=requestable.clone() repository=repository.clone() />
            </Show>
        </div>
    }
}

#[component]
pub fn AssetGrid(
    resource: AssetsResource,
    query: AssetQueryState,
    repository: AssetsRepository,
) -> impl IntoView {
    let error = Signal::derive(move || resource.get().and_then(|result| result.err()));
    let page = create_memo(move |_| {
        let assets = resource
            .get()
            .and_then(|result| result.ok())
            .map(|response| response.result)
            .unwrap_or_default();
        query.snapshot().page_of(&assets)
    });
    let search = query.search_signal();

    view! {
        <div class="space-y-6">
            <div class="flex flex-col md:flex-row gap-4">
                <input
                    type="text"
                    placeholder="Search assets by name..."
                    class="flex-1 px-4 py-3 border border-gray-300 rounded-lg"
                    prop:value=move || search.get()
                    on:input=move |ev| query.set_search(event_target_value(&ev))
                />
                <select
                    class="bg-white border border-gray-300 rounded-lg px-4 py-3"
                    on:change=move |ev| query.set_type(&event_target_value(&ev))
                >
                    <option value="all">"All Types"</option>
                    <option value="Returnable">"Returnable"</option>
                    <option value="Non-returnable">"Non-returnable"</option>
                </select>
                <select
                    class="bg-white border border-gray-300 rounded-lg px-4 py-3"
                    on:change=move |ev| query.set_order(&event_target_value(&ev))
                >
                    <option value={QuantityOrder::Any.as_value()}>"All Quantities"</option>
                    <option value={QuantityOrder::HighToLow.as_value()}>"High to Low"</option>
                    <option value={QuantityOrder::LowToHigh.as_value()}>"Low to High"</option>
                </select>
            </div>
            <InlineErrorMessage error=error />
            <Show when=move || resource.loading().get() && resource.get().is_none()>
                <LoadingSpinner />
            </Show>
            <Show
                when=move || page.with(|page| !page.items.is_empty())
                fallback=|| view! {
                    <div class="col-span-full text-center py-12">
                        <p class="text-gray-500 text-lg">"No assets found"</p>
                    </div>
                }
            >
                <div class="grid sm:grid-cols-2 md:grid-cols-3 lg:grid-cols-4 xl:grid-cols-6 gap-6">
                    {
                        let repository = repository.clone();
                        move || {
                            page.with(|page| {
                                page.items
                                    .iter()
                                    .cloned()
                                    .map(|asset| view! { <AssetCard asset=asset repository=repository.clone() /> })
                                    .collect_view()
                            })
                        }
                    }
                </div>
            </Show>
            <div class="flex items-center justify-between text-sm text-gray-600">
                <button
                    class="px-3 py-1 rounded border border-gray-300 disabled:opacity-30"
                    disabled=move || page.with(|page| page.page == 0)
                    on:click=move |_| query.set_page(page.with_untracked(|page| page.page.saturating_sub(1)))
                >
                    "Previous"
                </button>
                <span>{move || page.with(|page| format!("Page {} of {}", page.page + 1, page.pages))}</span>
                <button
                    class="px-3 py-1 rounded border border-gray-300 disabled:opacity-30"
                    disabled=move || page.with(|page| page.page + 1 >= page.pages)
                    on:click=move |_| query.set_page(page.with_untracked(|page| page.page + 1))
                >
                    "Next"
                </button>
            </div>
        </div>
    }
}

#[component]
pub fn AssetListPage() -> impl IntoView {
    let repository = AssetsRepository::new(use_api_client());
    let resource: AssetsResource = {
        let repository = repository.clone();
        create_resource(
            || (),
            move |_| {
                let repository = repository.clone();
                async move { repository.list_assets().await }
            },
        )
    };
    let query = AssetQueryState::new();

    view! {
        <div class="container mx-auto px-4 sm:px-8 py-8 space-y-4">
            <h2 class="text-2xl font-semibold text-gray-900">"Asset List"</h2>
            <AssetGrid resource=resource query=query repository=repository />
        </div>
    }
}
