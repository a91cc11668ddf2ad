use crate::{
    access::role::role_label,
    api::{ApiClient, ApiError, DashboardCounts},
    pages::dashboard::repository,
    state::session::use_session,
    utils::navigation::redirect_to_sign_in,
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    pub counts_resource: Resource<(), Result<DashboardCounts, ApiError>>,
    pub user_name: Signal<String>,
    pub role_label: Signal<&'static str>,
    pub role_code: Signal<Option<i32>>,
}

impl DashboardViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let session = use_session();
        let state = session.state();

        let store = session.clone();
        let counts_resource = create_resource(
            || (),
            move |_| {
                let api = api.clone();
                let store = store.clone();
                async move { repository::fetch_counts(&api, &store).await }
            },
        );

        create_effect(move |_| {
            if let Some(Err(err)) = counts_resource.get() {
                if err.is_unauthorized() {
                    redirect_to_sign_in();
                }
            }
        });

        let user_name = Signal::derive(move || {
            state.with(|s| s.user.as_ref().map(|u| u.name.clone()).unwrap_or_default())
        });
        let role_code = Signal::derive(move || state.with(|s| s.role_code()));
        let role_name =
            Signal::derive(move || role_code.get().map(role_label).unwrap_or_default());

        Self {
            counts_resource,
            user_name,
            role_label: role_name,
            role_code,
        }
    }
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    DashboardViewModel::new()
}
