use crate::{
    components::guard::RequireSectionAccess,
    pages::dashboard::{
        components::CountCardsSection, layout::DashboardFrame,
        view_model::use_dashboard_view_model,
    },
    utils::navigation::DASHBOARD_PATH,
};
use leptos::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <DashboardFrame>
            <RequireSectionAccess path=DASHBOARD_PATH>
                {|| view! { <DashboardBody /> }}
            </RequireSectionAccess>
        </DashboardFrame>
    }
}

#[component]
fn DashboardBody() -> impl IntoView {
    let vm = use_dashboard_view_model();

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-2xl font-bold text-fg">
                    {move || format!("Welcome, {}", vm.user_name.get())}
                </h1>
                <p class="mt-1 text-sm text-fg-muted">{move || vm.role_label.get()}</p>
            </div>
            <CountCardsSection counts=vm.counts_resource role_code=vm.role_code />
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{helpers::provide_session, ssr::render_to_string};

    #[test]
    fn dashboard_page_renders_greeting_and_loading_state() {
        let html = render_to_string(move || {
            provide_session(6, "h.p.s");
            view! { <DashboardPage /> }
        });
        assert!(html.contains("Welcome, Ravi Kumar"));
        assert!(html.contains("Marketing Agent"));
        assert!(html.contains("Loading totals..."));
    }

    #[test]
    fn dashboard_is_withheld_from_platform_admin() {
        let html = render_to_string(move || {
            provide_session(1, "h.p.s");
            view! { <DashboardPage /> }
        });
        assert!(!html.contains("Welcome,"));
        assert!(html.contains("You do not have access"));
    }
}
