use leptos::*;

use crate::utils::navigation::SIGN_IN_PATH;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface px-4">
            <div class="text-center space-y-4">
                <p class="text-5xl font-extrabold text-fg">"404"</p>
                <h1 class="text-xl font-semibold text-fg">"Page not found"</h1>
                <a href=SIGN_IN_PATH class="text-sm font-medium text-action-primary-bg hover:underline">
                    "Back to sign in"
                </a>
            </div>
        </div>
    }
}
