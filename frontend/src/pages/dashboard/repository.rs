use crate::{
    api::{ApiClient, ApiError, CountsQuery, DashboardCounts},
    state::session::SessionStore,
};

/// Returns the cached counts when present, otherwise fetches them for the
/// signed-in user. A 401 signs the user out.
pub async fn fetch_counts(
    api: &ApiClient,
    store: &SessionStore,
) -> Result<DashboardCounts, ApiError> {
    let state = store.get_untracked();
    if let Some(cached) = state.dashboard_counts {
        return Ok(cached);
    }
    let (Some(user), Some(token)) = (state.user, state.token) else {
        return Err(ApiError::unauthorized());
    };

    match api
        .get_dashboard_counts(&token, &CountsQuery::for_user(&user))
        .await
    {
        Ok(counts) => {
            store.set_dashboard_counts(counts.clone());
            Ok(counts)
        }
        Err(err) => {
            if err.is_unauthorized() {
                log::info!("dashboard counts rejected the token; signing out");
                store.logout();
            } else {
                log::warn!("failed to load dashboard counts: {}", err.code);
            }
            Err(err)
        }
    }
}
