use crate::{
    components::layout::{can_view, use_access_table, LoadingSpinner},
    state::session::{use_session, GuardDecision},
    utils::{navigation::redirect_to_sign_in, token::now_epoch_seconds},
};
use leptos::*;

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let state = session.state();
    let decision = create_memo(move |_| {
        state.with(|s| GuardDecision::evaluate(s, now_epoch_seconds()))
    });
    let is_loading = create_memo(move |_| state.with(|s| s.loading));

    create_isomorphic_effect(move |_| match decision.get() {
        GuardDecision::Render => {}
        // Teardown signs out, so the next run takes the `SignIn` arm.
        GuardDecision::ExpiredSession => {
            session.guard(now_epoch_seconds());
        }
        GuardDecision::SignIn => {
            if !is_loading.get_untracked() {
                redirect_to_sign_in();
            }
        }
    });

    view! {
        <Show
            when=move || should_render_children(decision.get(), is_loading.get())
            fallback=move || {
                if is_loading.get() {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

fn should_render_children(decision: GuardDecision, is_loading: bool) -> bool {
    decision.allows_render() && !is_loading
}

/// Hides a section whose menu entry is filtered out for the current role,
/// so typing the URL does not bypass the menu.
#[component]
pub fn RequireSectionAccess(
    #[prop(into)] path: MaybeSignal<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let session = use_session();
    let state = session.state();
    let table = use_access_table();
    let allowed = create_memo(move |_| {
        let path = path.get();
        state.with(|s| s.role_code().is_some_and(|code| can_view(&table, code, &path)))
    });

    view! {
        <Show when=move || allowed.get() fallback=|| view! { <UnauthorizedMessage /> }>
            {children()}
        </Show>
    }
}

#[component]
pub fn UnauthorizedMessage() -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 text-center">
            <p class="text-sm text-fg">"You do not have access to this section. Contact your administrator."</p>
        </div>
    }
}
