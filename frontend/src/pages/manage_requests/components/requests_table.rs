use super::request_row::RequestRow;
use crate::api::{ApiError, AssetRequest, RequestStatus};
use crate::components::{
    empty_state::EmptyState, error::InlineErrorMessage, layout::LoadingSpinner,
};
use crate::pages::manage_requests::repository::RequestsRepository;
use crate::state::refetch::{retain_last_ok, Refetch};
use leptos::*;

/// A delivery from the list endpoint, tagged with the refetch revision that produced it.
pub type RequestsSnapshot = (u32, Result<Vec<AssetRequest>, ApiError>);
pub type RequestsResource = Resource<u32, RequestsSnapshot>;

fn upstream_for(delivery: &Option<(u32, Vec<AssetRequest>)>, id: &str) -> Option<(u32, RequestStatus)> {
    let (revision, rows) = delivery.as_ref()?;
    rows.iter()
        .find(|row| row.id == id)
        .map(|row| (*revision, row.status))
}

/// Rows of the latest successful delivery with its revision. A failed reload
/// keeps the previous rows.
fn delivered_rows(
    snapshot: impl Fn() -> Option<RequestsSnapshot> + 'static,
) -> Memo<Option<(u32, Vec<AssetRequest>)>> {
    retain_last_ok(move || snapshot().map(|(revision, result)| result.map(|rows| (revision, rows))))
}

#[component]
pub fn RequestsTable(
    resource: RequestsResource,
    repository: RequestsRepository,
    refetch: Refetch,
) -> impl IntoView {
    let loading = resource.loading();
    let error = Signal::derive(move || resource.get().and_then(|(_, result)| result.err()));
    let delivered = delivered_rows(move || resource.get());
    let rows = Signal::derive(move || {
        delivered.with(|delivery| {
            delivery
                .as_ref()
                .map(|(_, rows)| rows.clone())
                .unwrap_or_default()
        })
    });
    let is_empty = Signal::derive(move || {
        delivered.with(|delivery| matches!(delivery, Some((_, rows)) if rows.is_empty()))
    });

    view! {
        <div class="space-y-4">
            <InlineErrorMessage error=error />
            <Show when=move || loading.get() && delivered.with(Option::is_none)>
                <LoadingSpinner />
            </Show>
            <Show
                when=move || !is_empty.get()
                fallback=|| view! {
                    <EmptyState title="No requests" description="There are no asset requests to review." />
                }
            >
                <div class="overflow-x-auto shadow rounded-lg">
                    <table class="min-w-full leading-normal">
                        <thead>
                            <tr>
                                <th class="px-5 py-3 bg-white border-b border-gray-200 text-left text-sm uppercase">"Employee"</th>
                                <th class="px-5 py-3 bg-white border-b border-gray-200 text-left text-sm uppercase">"Asset"</th>
                                <th class="px-5 py-3 bg-white border-b border-gray-200 text-left text-sm uppercase">"Request Date"</th>
                                <th class="px-5 py-3 bg-white border-b border-gray-200 text-left text-sm uppercase">"Status"</th>
                                <th class="px-5 py-3 bg-white border-b border-gray-200 text-center text-sm uppercase">"Action"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || rows.get()
                                key=|request| request.id.clone()
                                children={
                                    let repository = repository.clone();
                                    move |request: AssetRequest| {
                                        let id = request.id.clone();
                                        let upstream = Signal::derive(move || {
                                            delivered.with(|delivery| upstream_for(delivery, &id))
                                        });
                                        view! {
                                            <RequestRow
                                                request=request
                                                upstream=upstream
                                                repository=repository.clone()
                                                refetch=refetch
                                            />
                                        }
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::asset_request;

    #[test]
    fn upstream_for_tags_status_with_revision() {
        let delivery = Some((
            4,
            vec![
                asset_request("r1", RequestStatus::Pending),
                asset_request("r2", RequestStatus::Rejected),
            ],
        ));
        assert_eq!(upstream_for(&delivery, "r2"), Some((4, RequestStatus::Rejected)));
        assert_eq!(upstream_for(&delivery, "missing"), None);
        assert_eq!(upstream_for(&None, "r1"), None);
    }
}
