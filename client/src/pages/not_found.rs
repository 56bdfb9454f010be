//! Fallback for unknown routes.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page">
            <div class="page__inner">
                <h1 class="page__title">"Page not found"</h1>
                <A href="/dashboard">"Back to dashboard"</A>
            </div>
        </div>
    }
}
