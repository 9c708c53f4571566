use super::{components::employee_row::EmployeeRow, repository::EmployeesRepository};
use crate::api::{ApiError, Employee};
use crate::components::{
    empty_state::EmptyState, error::InlineErrorMessage, layout::LoadingSpinner,
};
use crate::state::{
    refetch::{retain_last_ok, Refetch},
    session::use_api_client,
};
use leptos::*;

pub type EmployeesResource = Resource<u32, Result<Vec<Employee>, ApiError>>;

#[component]
pub fn EmployeesTable(
    resource: EmployeesResource,
    repository: EmployeesRepository,
    refetch: Refetch,
) -> impl IntoView {
    let loading = resource.loading();
    let error = Signal::derive(move || resource.get().and_then(|result| result.err()));
    let delivered = retain_last_ok(move || resource.get());
    let employees = Signal::derive(move || delivered.get().unwrap_or_default());
    let loaded_empty = Signal::derive(move || {
        delivered.with(|employees| matches!(employees, Some(employees) if employees.is_empty()))
    });

    view! {
        <div class="space-y-4">
            <InlineErrorMessage error=error />
            <Show when=move || loading.get() && delivered.with(Option::is_none)>
                <LoadingSpinner />
            </Show>
            <Show
                when=move || !loaded_empty.get()
                fallback=|| view! {
                    <EmptyState title="No employees" description="No one is affiliated with your company yet." />
                }
            >
                <div class="overflow-x-auto shadow rounded-lg">
                    <table class="min-w-full leading-normal">
                        <thead>
                            <tr>
                                <th class="px-5 py-3 bg-white border-b border-gray-200 text-left text-sm uppercase">"Email"</th>
                                <th class="px-5 py-3 bg-white border-b border-gray-200 text-left text-sm uppercase">"Role"</th>
                                <th class="px-5 py-3 bg-white border-b border-gray-200 text-left text-sm uppercase">"Status"</th>
                                <th class="px-5 py-3 bg-white border-b border-gray-200 text-left text-sm uppercase">"Action"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || employees.get()
                                key=|employee| employee.id.clone()
                                children={
                                    let repository = repository.clone();
                                    move |employee: Employee| {
                                        view! {
                                            <EmployeeRow
                                                employee=employee
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

#[component]
pub fn ManageEmployeesPage() -> impl IntoView {
    let repository = EmployeesRepository::new(use_api_client());
    let refetch = Refetch::new();
    let resource: EmployeesResource = {
        let repository = repository.clone();
        create_resource(
            move || refetch.revision(),
            move |_| {
                let repository = repository.clone();
                async move { repository.list_employees().await }
            },
        )
    };

    view! {
        <div class="container mx-auto px-4 sm:px-8 py-8 space-y-4">
            <h2 class="text-2xl font-semibold text-gray-900">"Manage Employees"</h2>
            <EmployeesTable resource=resource repository=repository refetch=refetch />
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::ApiClient;
    use crate::state::session::Session;
    use crate::test_support::helpers::hr_user;
    use crate::test_support::ssr::{render_to_string, with_runtime};
    use serde_json::json;

    fn render_with(result: Result<Vec<Employee>, ApiError>) -> String {
        render_to_string(move || {
            let repository = EmployeesRepository::new(ApiClient::new_with_base_url(
                "http://unused",
                Session::authenticated("t", hr_user()),
            ));
            let refetch = Refetch::new();
            let resource = create_resource(move || refetch.revision(), |_| async move { Ok(Vec::new()) });
            resource.set(result);
            view! { <EmployeesTable resource=resource repository=repository refetch=refetch /> }
        })
    }

    #[test]
    fn renders_employee_rows() {
        let employees: Vec<Employee> = serde_json::from_value(json!([
            { "_id": "e1", "email": "bob@example.com", "role": "employee", "status": "active" },
            { "_id": "e2", "email": "eve@example.com", "role": "employee" }
        ]))
        .unwrap();
        let html = render_with(Ok(employees));
        assert!(html.contains("bob@example.com"));
        assert!(html.contains("eve@example.com"));
        assert_eq!(html.matches("Assign Asset").count(), 2);
    }

    #[test]
    fn renders_empty_state() {
        let html = render_with(Ok(Vec::new()));
        assert!(html.contains("No employees"));
    }

    #[test]
    fn renders_error() {
        let html = render_with(Err(ApiError::from_error_body(500, br#"{"message":"db down"}"#)));
        assert!(html.contains("db down"));
    }

    #[test]
    fn failed_reload_keeps_listed_employees() {
        with_runtime(|| {
            let result = create_rw_signal(None::<Result<Vec<Employee>, ApiError>>);
            let delivered = retain_last_ok(move || result.get());
            let employees: Vec<Employee> = serde_json::from_value(json!([
                { "_id": "e1", "email": "bob@example.com", "role": "employee" }
            ]))
            .unwrap();

            result.set(Some(Ok(employees.clone())));
            assert_eq!(delivered.get_untracked(), Some(employees.clone()));

            result.set(Some(Err(ApiError::request_failed("Request failed: offline"))));
            assert_eq!(delivered.get_untracked(), Some(employees));
        });
    }
}
