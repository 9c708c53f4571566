use super::{
    components::requests_table::{RequestsResource, RequestsTable},
    repository::RequestsRepository,
};
use crate::state::{refetch::Refetch, session::use_api_client};
use leptos::*;

#[component]
pub fn ManageRequestsPage() -> impl IntoView {
    let repository = RequestsRepository::new(use_api_client());
    let refetch = Refetch::new();
    let resource: RequestsResource = {
        let repository = repository.clone();
        create_resource(
            move || refetch.revision(),
            move |revision| {
                let repository = repository.clone();
                async move { (revision, repository.list_requests().await) }
            },
        )
    };

    view! {
        <div class="container mx-auto px-4 sm:px-8 py-8 space-y-4">
            <h2 class="text-2xl font-semibold text-gray-900">"Manage Requests"</h2>
            <RequestsTable resource=resource repository=repository refetch=refetch />
        </div>
    }
}
