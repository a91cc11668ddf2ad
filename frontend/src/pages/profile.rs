use crate::{
    access::role::role_label,
    api::User,
    components::layout::Layout,
    state::session::use_session,
};
use leptos::*;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = use_session();
    let state = session.state();
    let user = Signal::derive(move || state.with(|s| s.user.clone()));
    view! {
        <Layout>
            <ProfileCard user=user />
        </Layout>
    }
}

fn field(label: &'static str, value: String) -> impl IntoView {
    let value = if value.trim().is_empty() { "-".to_string() } else { value };
    view! {
        <div class="py-2 grid grid-cols-3 gap-4">
            <dt class="text-sm font-medium text-fg-muted">{label}</dt>
            <dd class="text-sm text-fg col-span-2">{value}</dd>
        </div>
    }
}

#[component]
pub fn ProfileCard(user: Signal<Option<User>>) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <h1 class="text-2xl font-bold text-fg">"Profile"</h1>
            {move || match user.get() {
                None => ().into_view(),
                Some(user) => view! {
                    <div class="flex items-center gap-4">
                        {user.photo.clone().map(|src| view! {
                            <img src=src alt="Profile photo" class="h-16 w-16 rounded-full object-cover"/>
                        })}
                        <div>
                            <p class="text-lg font-semibold text-fg">{user.name.clone()}</p>
                            <p class="text-sm text-fg-muted">{role_label(user.user_type)}</p>
                        </div>
                    </div>
                    <dl class="divide-y divide-border">
                        {field("Email", user.email)}
                        {field("Mobile", user.mobile)}
                        {field("City", user.city)}
                        {field("State", user.state)}
                    </dl>
                }.into_view(),
            }}
        </div>
    }
}
