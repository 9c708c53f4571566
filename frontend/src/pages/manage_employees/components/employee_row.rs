use crate::api::Employee;
use crate::components::prompt::use_prompter;
use crate::pages::manage_employees::{
    repository::EmployeesRepository, view_model::AssignmentModel,
};
use crate::state::{lifetime::Lifetime, refetch::Refetch};
use leptos::*;

#[component]
pub fn EmployeeRow(
    employee: Employee,
    repository: EmployeesRepository,
    refetch: Refetch,
) -> impl IntoView {
    let model = AssignmentModel::new(
        employee.email.clone(),
        repository,
        use_prompter(),
        refetch,
        Lifetime::bind_to_scope(),
    );
    let in_flight = model.in_flight();
    let on_assign = move |_| {
        let model = model.clone();
        let lifetime = model.lifetime().clone();
        lifetime.spawn(async move {
            model.assign().await;
        });
    };

    view! {
        <tr>
            <td class="px-5 py-5 border-b border-gray-200 bg-white text-sm">
                <p class="text-gray-900">{employee.email.clone()}</p>
            </td>
            <td class="px-5 py-5 border-b border-gray-200 bg-white text-sm">
                <p class="text-gray-900">{employee.role.clone()}</p>
            </td>
            <td class="px-5 py-5 border-b border-gray-200 bg-white text-sm">
                <p class="text-gray-900">{employee.status_label().to_string()}</p>
            </td>
            <td class="px-5 py-5 border-b border-gray-200 bg-white text-sm">
                <button
                    class="bg-indigo-500 text-white px-3 py-1 rounded disabled:opacity-30 disabled:cursor-not-allowed"
                    disabled=move || in_flight.get()
                    on:click=on_assign
                >
                    {move || if in_flight.get() { "Assigning..." } else { "Assign Asset" }}
                </button>
            </td>
        </tr>
    }
}
