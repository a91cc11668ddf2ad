use crate::{
    api::{ApiError, DashboardCounts},
    components::layout::{menu_for, use_access_table, ErrorMessage, LoadingSpinner},
    pages::dashboard::utils::{format_count, visible_cards, CountCard},
};
use leptos::*;

#[component]
pub fn CountCardsSection(
    counts: Resource<(), Result<DashboardCounts, ApiError>>,
    role_code: Signal<Option<i32>>,
) -> impl IntoView {
    let table = use_access_table();
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <div>
                <h3 class="text-base font-semibold text-fg">"Overview"</h3>
                <p class="text-sm text-fg-muted">"Totals for the sections you can access"</p>
            </div>
            <div>
                {move || match counts.get() {
                    None => view! {
                        <div class="flex items-center gap-2 text-sm text-fg-muted">
                            <LoadingSpinner />
                            <span>"Loading totals..."</span>
                        </div>
                    }.into_view(),
                    Some(Err(err)) => view! { <ErrorMessage message=err.error /> }.into_view(),
                    Some(Ok(data)) => {
                        let menu = role_code
                            .get()
                            .map(|code| menu_for(&table, code))
                            .unwrap_or_default();
                        view! { <CountCards cards=visible_cards(&data, &menu) /> }.into_view()
                    }
                }}
            </div>
        </div>
    }
}

#[component]
pub fn CountCards(cards: Vec<CountCard>) -> impl IntoView {
    if cards.is_empty() {
        return view! {
            <p class="text-sm text-fg-muted">"No totals are available for your role."</p>
        }
        .into_view();
    }
    view! {
        <div class="grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-4">
            {cards
                .into_iter()
                .map(|card| {
                    let value = format_count(card.value);
                    view! { <Metric label=card.label href=card.href value=value /> }
                })
                .collect_view()}
        </div>
    }
    .into_view()
}

#[component]
fn Metric(label: &'static str, href: &'static str, value: String) -> impl IntoView {
    view! {
        <a href=href class="block p-6 rounded-2xl bg-surface border border-border shadow-sm hover:shadow-md transition-shadow">
            <p class="text-xs font-bold text-fg-muted uppercase tracking-widest">{label}</p>
            <p class="mt-3 text-3xl font-extrabold text-fg">{value}</p>
        </a>
    }
}
