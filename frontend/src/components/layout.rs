use crate::state::session::{use_session, use_session_state, Role};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: &'static str,
    pub href: &'static str,
}

pub fn menu_for(role: Role) -> &'static [MenuEntry] {
    const HR: &[MenuEntry] = &[
        MenuEntry {
            label: "Manage Requests",
            href: "/dashboard/manage-requests",
        },
        MenuEntry {
            label: "Manage Employees",
            href: "/dashboard/manage-employees",
        },
        MenuEntry {
            label: "Asset List",
            href: "/dashboard/all-asset",
        },
    ];
    const EMPLOYEE: &[MenuEntry] = &[
        MenuEntry {
            label: "My Assets",
            href: "/dashboard/my-inventory",
        },
        MenuEntry {
            label: "Request an asset",
            href: "/dashboard/all-asset",
        },
    ];
    match role {
        Role::Hr => HR,
        Role::Employee => EMPLOYEE,
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let session = use_session();
    let state = use_session_state();
    let who = move || {
        state.with(|state| {
            state
                .user
                .as_ref()
                .map(|user| format!("{} · {}", user.display_name(), user.role.label()))
                .unwrap_or_default()
        })
    };
    let on_logout = move |_| {
        log::info!("signing out");
        session.end();
    };
    view! {
        <header class="bg-white shadow-sm border-b border-gray-200">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <a href="/dashboard" class="text-xl font-semibold text-gray-900">"AssetVerse"</a>
                    <div class="flex items-center gap-4">
                        <span class="text-sm text-gray-500">{who}</span>
                        <Show when=move || state.with(|state| state.is_authenticated())>
                            <button
                                on:click=on_logout.clone()
                                class="text-gray-500 hover:text-gray-900 px-3 py-2 rounded-md text-sm font-medium hover:bg-gray-50"
                            >
                                "Logout"
                            </button>
                        </Show>
                    </div>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn MenuItem(entry: MenuEntry) -> impl IntoView {
    view! {
        <a
            href=entry.href
            class="group flex items-center px-4 py-3 my-1 rounded-2xl text-xs font-black uppercase tracking-widest text-gray-400 hover:text-gray-900 hover:bg-gray-50"
        >
            {entry.label}
        </a>
    }
}

/// One sidebar for every role; the entries come from [`menu_for`].
#[component]
pub fn Sidebar() -> impl IntoView {
    let state = use_session_state();
    view! {
        <aside class="w-64 shrink-0 border-r border-gray-200 bg-white p-4">
            <nav>
                {move || {
                    state
                        .with(|state| state.role())
                        .map(|role| {
                            menu_for(role)
                                .iter()
                                .map(|entry| view! { <MenuItem entry=*entry /> })
                                .collect_view()
                        })
                }}
            </nav>
        </aside>
    }
}

#[component]
pub fn DashboardLayout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-50">
            <Header/>
            <div class="flex">
                <Sidebar/>
                <main class="flex-1 py-6 px-4 sm:px-6 lg:px-8">{children()}</main>
            </div>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-indigo-500"></div>
        </div>
    }
}
