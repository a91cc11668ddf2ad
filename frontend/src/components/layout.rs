use crate::{
    access::{
        filter_nav,
        nav::{find_by_path, flatten},
        nav_tree,
        role::role_label,
        AccessTable, NavItem,
    },
    config,
    state::session::{use_logout_action, use_session},
    utils::navigation::{redirect_to_sign_in, DASHBOARD_PATH},
};
use leptos::*;

const LINK_CLASS: &str =
    "block text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover";

/// Access policy provided at the app root; outside it the resolved config
/// decides.
pub fn use_access_table() -> AccessTable {
    use_context::<AccessTable>().unwrap_or_else(|| AccessTable::new(config::unknown_role_menu()))
}

pub fn menu_for(table: &AccessTable, role_code: i32) -> Vec<NavItem> {
    filter_nav(nav_tree(), role_code, table)
}

pub fn can_view(table: &AccessTable, role_code: i32, path: &str) -> bool {
    find_by_path(&menu_for(table, role_code), path).is_some()
}

/// First link in the role's menu; roles that cannot see the dashboard land
/// elsewhere after sign-in.
pub fn landing_path(table: &AccessTable, role_code: i32) -> &'static str {
    flatten(&menu_for(table, role_code))
        .into_iter()
        .find_map(|item| item.path)
        .unwrap_or(DASHBOARD_PATH)
}

#[component]
pub fn Header() -> impl IntoView {
    let session = use_session();
    let state = session.state();
    let (menu_open, set_menu_open) = create_signal(false);
    let user_name = move || {
        state.with(|s| s.user.as_ref().map(|u| u.name.clone()).unwrap_or_default())
    };
    let role = move || state.with(|s| s.role_code().map(role_label).unwrap_or_default());

    let logout_action = use_logout_action();
    let logout_pending = logout_action.pending();
    create_effect(move |_| {
        if logout_action.value().get().is_some() {
            redirect_to_sign_in();
        }
    });
    let on_logout = move |_| {
        if logout_pending.get_untracked() {
            return;
        }
        set_menu_open.set(false);
        logout_action.dispatch(());
    };
    let toggle_menu = move |_| set_menu_open.update(|open| *open = !*open);

    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center gap-3">
                        <button
                            type="button"
                            class="lg:hidden inline-flex items-center justify-center p-2 rounded-md text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                            on:click=toggle_menu
                            aria-expanded=move || menu_open.get()
                            aria-controls="mobile-nav"
                        >
                            <span class="sr-only">
                                {move || if menu_open.get() { "Close menu" } else { "Open menu" }}
                            </span>
                            <svg class="h-6 w-6" xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16"/>
                            </svg>
                        </button>
                        <h1 class="text-xl font-semibold text-fg">"Estate Admin"</h1>
                    </div>
                    <div class="flex items-center gap-4">
                        <div class="text-right">
                            <p class="text-sm font-medium text-fg">{user_name}</p>
                            <p class="text-xs text-fg-muted">{role}</p>
                        </div>
                        <button
                            on:click=on_logout
                            class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium disabled:opacity-50 hover:bg-action-ghost-bg-hover"
                            disabled=move || logout_pending.get()
                        >
                            "Logout"
                        </button>
                    </div>
                </div>
                <Show when=move || menu_open.get()>
                    <div id="mobile-nav" class="lg:hidden border-t border-border py-3">
                        <NavMenu/>
                    </div>
                </Show>
            </div>
        </header>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <aside class="hidden lg:block w-64 shrink-0 border-r border-border bg-surface-elevated min-h-screen py-4">
            <NavMenu/>
        </aside>
    }
}

#[component]
fn NavMenu() -> impl IntoView {
    let session = use_session();
    let state = session.state();
    let table = use_access_table();
    let items = create_memo(move |_| {
        state.with(|s| {
            s.role_code()
                .map(|code| menu_for(&table, code))
                .unwrap_or_default()
        })
    });

    view! {
        <nav class="px-2 space-y-1" aria-label="Main">
            {move || render_items(&items.get(), 0)}
        </nav>
    }
}

fn render_items(items: &[NavItem], depth: usize) -> View {
    let indent = match depth {
        0 => "",
        1 => "pl-4",
        _ => "pl-8",
    };
    items
        .iter()
        .map(|item| {
            let entry = match item.path {
                Some(path) => view! { <a href=path class=LINK_CLASS>{item.name}</a> }.into_view(),
                None => view! {
                    <p class="px-3 pt-3 pb-1 text-xs font-semibold uppercase tracking-wide text-fg-muted">
                        {item.name}
                    </p>
                }
                .into_view(),
            };
            let children = if item.sub_items.is_empty() {
                ().into_view()
            } else {
                render_items(&item.sub_items, depth + 1)
            };
            view! { <div class=indent>{entry}{children}</div> }
        })
        .collect_view()
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header/>
            <div class="flex">
                <Sidebar/>
                <main class="flex-1 py-6 px-4 sm:px-6 lg:px-8">
                    {children()}
                </main>
            </div>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(message: String) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4">
            <div class="flex">
                <div class="flex-shrink-0">
                    <i class="fas fa-exclamation-circle"></i>
                </div>
                <div class="ml-3">
                    <p class="text-sm">{message}</p>
                </div>
            </div>
        </div>
    }
}
