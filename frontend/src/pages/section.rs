use crate::{
    access::{nav::find_by_path, nav_tree},
    components::{guard::RequireSectionAccess, layout::Layout},
};
use leptos::*;
use leptos_router::use_location;

pub fn section_title(path: &str) -> &'static str {
    find_by_path(nav_tree(), path)
        .map(|item| item.name)
        .unwrap_or("Section")
}

/// Placeholder for CRUD sections, titled from the menu entry of the current path.
#[component]
pub fn SectionPage() -> impl IntoView {
    let location = use_location();
    let path = Signal::derive(move || location.pathname.get());
    view! {
        <Layout>
            <SectionBody path=path />
        </Layout>
    }
}

#[component]
pub fn SectionBody(#[prop(into)] path: MaybeSignal<String>) -> impl IntoView {
    let title = {
        let path = path.clone();
        Signal::derive(move || section_title(&path.get()))
    };
    view! {
        <RequireSectionAccess path=path>
            {move || view! {
                <div class="space-y-4">
                    <h1 class="text-2xl font-bold text-fg">{move || title.get()}</h1>
                    <div class="bg-surface-elevated shadow rounded-lg p-6">
                        <p class="text-sm text-fg-muted">"No records to show yet."</p>
                    </div>
                </div>
            }}
        </RequireSectionAccess>
    }
}

#[cfg(test)]
mod tests {
    use super::section_title;

    #[test]
    fn section_title_comes_from_menu() {
        assert_eq!(section_title("/leads/assigned"), "Assigned Leads");
        assert_eq!(section_title("/locations/cities/"), "Cities");
        assert_eq!(section_title("/unknown"), "Section");
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{helpers::provide_session, ssr::render_to_string};

    #[test]
    fn section_body_renders_title_for_visible_path() {
        let html = render_to_string(move || {
            provide_session(4, "h.p.s");
            view! { <SectionBody path="/bookings" /> }
        });
        assert!(html.contains("Bookings"));
        assert!(html.contains("No records to show yet."));
    }

    #[test]
    fn section_body_withholds_denied_path() {
        let html = render_to_string(move || {
            provide_session(4, "h.p.s");
            view! { <SectionBody path="/partners" /> }
        });
        assert!(!html.contains("No records to show yet."));
    }
}
