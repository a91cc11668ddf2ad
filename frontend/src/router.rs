use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    access::AccessTable,
    api::ApiClient,
    components::guard::RequireAuth,
    pages::{
        dashboard::DashboardPage, login::LoginPage, not_found::NotFoundPage,
        profile::ProfilePage, section::SectionPage,
    },
    config,
    state::session::SessionProvider,
};

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/dashboard",
    "/leads",
    "/leads/new",
    "/leads/assigned",
    "/projects",
    "/projects/new",
    "/locations/cities",
    "/locations/localities",
    "/employees",
    "/employees/new",
    "/bookings",
    "/partners",
    "/partners/requests",
    "/builders",
    "/queries",
    "/support",
    "/support/new",
    "/profile",
];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &[
    "/dashboard",
    "/leads",
    "/leads/new",
    "/leads/assigned",
    "/projects",
    "/projects/new",
    "/locations/cities",
    "/locations/localities",
    "/employees",
    "/employees/new",
    "/bookings",
    "/partners",
    "/partners/requests",
    "/builders",
    "/queries",
    "/support",
    "/support/new",
    "/profile",
];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/"];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_context(ApiClient::new());
    provide_context(AccessTable::new(config::unknown_role_menu()));
    view! {
        <Title text="Estate Admin"/>
        <SessionProvider>
            <Router>
                <Routes>
                    <Route path="/" view=LoginPage/>
                    <Route path="/dashboard" view=ProtectedDashboard/>
                    <Route path="/leads" view=ProtectedSection/>
                    <Route path="/leads/new" view=ProtectedSection/>
                    <Route path="/leads/assigned" view=ProtectedSection/>
                    <Route path="/projects" view=ProtectedSection/>
                    <Route path="/projects/new" view=ProtectedSection/>
                    <Route path="/locations/cities" view=ProtectedSection/>
                    <Route path="/locations/localities" view=ProtectedSection/>
                    <Route path="/employees" view=ProtectedSection/>
                    <Route path="/employees/new" view=ProtectedSection/>
                    <Route path="/bookings" view=ProtectedSection/>
                    <Route path="/partners" view=ProtectedSection/>
                    <Route path="/partners/requests" view=ProtectedSection/>
                    <Route path="/builders" view=ProtectedSection/>
                    <Route path="/queries" view=ProtectedSection/>
                    <Route path="/support" view=ProtectedSection/>
                    <Route path="/support/new" view=ProtectedSection/>
                    <Route path="/profile" view=ProtectedProfile/>
                    <Route path="/*any" view=NotFoundPage/>
                </Routes>
            </Router>
        </SessionProvider>
    }
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! { <RequireAuth><DashboardPage/></RequireAuth> }
}

#[component]
fn ProtectedSection() -> impl IntoView {
    view! { <RequireAuth><SectionPage/></RequireAuth> }
}

#[component]
fn ProtectedProfile() -> impl IntoView {
    view! { <RequireAuth><ProfilePage/></RequireAuth> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::{nav::flatten, nav_tree};
    use std::collections::HashSet;

    #[test]
    fn every_menu_link_is_a_protected_route() {
        for item in flatten(nav_tree()) {
            if let Some(path) = item.path {
                assert!(
                    PROTECTED_ROUTE_PATHS.contains(&path),
                    "menu path not routed: {}",
                    path
                );
            }
        }
    }

    #[test]
    fn protected_and_public_routes_partition_all_routes() {
        let all: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        let protected: HashSet<&str> = PROTECTED_ROUTE_PATHS.iter().copied().collect();
        let public: HashSet<&str> = PUBLIC_ROUTE_PATHS.iter().copied().collect();
        assert!(protected.is_disjoint(&public));
        assert_eq!(
            protected.union(&public).copied().collect::<HashSet<_>>(),
            all
        );
    }

    #[test]
    fn no_duplicate_routes() {
        let unique: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        assert_eq!(unique.len(), ROUTE_PATHS.len());
    }
}
