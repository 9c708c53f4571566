use crate::api::{AssetRequest, RequestAction, RequestStatus};
use crate::components::prompt::use_prompter;
use crate::pages::manage_requests::{repository::RequestsRepository, view_model::RequestRowModel};
use crate::state::{lifetime::Lifetime, refetch::Refetch};
use crate::utils::time::date_portion;
use leptos::*;

pub fn status_badge_class(status: RequestStatus) -> &'static str {
    match status {
        RequestStatus::Pending => "bg-blue-500 px-2 py-1 rounded text-white",
        RequestStatus::Approved => "bg-green-500 px-2 py-1 rounded text-white",
        RequestStatus::Rejected => "bg-red-500 px-2 py-1 rounded text-white",
    }
}

#[component]
pub fn RequestRow(
    request: AssetRequest,
    /// Latest `(revision, status)` the list delivered for this row.
    upstream: Signal<Option<(u32, RequestStatus)>>,
    repository: RequestsRepository,
    refetch: Refetch,
) -> impl IntoView {
    let model = RequestRowModel::new(
        &request,
        repository,
        use_prompter(),
        refetch,
        Lifetime::bind_to_scope(),
    );

    {
        let model = model.clone();
        create_effect(move |_| {
            if let Some((revision, status)) = upstream.get() {
                model.reconcile(status, revision);
            }
        });
    }

    let status = model.status();
    let approve_enabled = model.can_act(RequestAction::Approve);
    let reject_enabled = model.can_act(RequestAction::Reject);
    let run = move |action: RequestAction| {
        let model = model.clone();
        let lifetime = model.lifetime().clone();
        lifetime.spawn(async move {
            model.perform_action(action).await;
        });
    };
    let run_reject = run.clone();

    view! {
        <tr>
            <td class="px-5 py-5 border-b border-gray-200 bg-white">
                <p class="text-gray-900">{request.requester_name.clone()}</p>
            </td>
            <td class="px-5 py-5 border-b border-gray-200 bg-white">
                <p class="text-gray-900">{request.asset_name.clone()}</p>
            </td>
            <td class="px-5 py-5 border-b border-gray-200 bg-white">
                <p class="text-gray-900">{date_portion(&request.request_date)}</p>
            </td>
            <td class="px-5 py-5 border-b border-gray-200 bg-white">
                <span class=move || status_badge_class(status.get())>
                    {move || status.get().label()}
                </span>
            </td>
            <td class="flex gap-2 justify-center px-5 py-5 border-b border-gray-200 bg-white">
                <button
                    class="bg-indigo-500 text-white px-3 py-1 rounded disabled:opacity-30 disabled:cursor-not-allowed"
                    disabled=move || !approve_enabled.get()
                    on:click=move |_| run(RequestAction::Approve)
                >
                    "Accept"
                </button>
                <button
                    class="bg-red-500 text-white px-3 py-1 rounded disabled:opacity-30 disabled:cursor-not-allowed"
                    disabled=move || !reject_enabled.get()
                    on:click=move |_| run_reject(RequestAction::Reject)
                >
                    "Reject"
                </button>
            </td>
        </tr>
    }
}
