use crate::{api::ApiError, components::error::InlineErrorMessage};
use leptos::{ev::SubmitEvent, *};

const INPUT_CLASS: &str = "appearance-none relative block w-full px-3 py-2 border border-border placeholder-fg-muted text-fg bg-surface focus:outline-none focus:ring-action-primary-bg focus:border-action-primary-bg focus:z-10 sm:text-sm";

#[component]
pub fn LoginForm(
    mobile: RwSignal<String>,
    password: RwSignal<String>,
    error: Signal<Option<ApiError>>,
    pending: Signal<bool>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">"Sign in to Estate Admin"</h2>
                    <p class="mt-2 text-center text-sm text-fg-muted">"Use your registered mobile number"</p>
                </div>
                <form class="mt-8 space-y-6" on:submit=move |ev| on_submit.call(ev)>
                    <div class="rounded-md shadow-sm -space-y-px">
                        <div>
                            <label for="mobile" class="sr-only">"Mobile number"</label>
                            <input
                                id="mobile"
                                name="mobile"
                                type="tel"
                                inputmode="numeric"
                                maxlength="10"
                                autocomplete="tel"
                                class=format!("{} rounded-t-md", INPUT_CLASS)
                                placeholder="Mobile number"
                                prop:value=move || mobile.get()
                                on:input=move |ev| mobile.set(event_target_value(&ev))
                            />
                        </div>
                        <div>
                            <label for="password" class="sr-only">"Password"</label>
                            <input
                                id="password"
                                name="password"
                                type="password"
                                autocomplete="current-password"
                                class=format!("{} rounded-b-md", INPUT_CLASS)
                                placeholder="Password"
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                        </div>
                    </div>

                    <InlineErrorMessage error=error />

                    <button
                        type="submit"
                        disabled=move || pending.get()
                        class="group relative w-full flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover disabled:opacity-50"
                    >
                        {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
