//! Full-screen loading placeholder shown while auth or data resolves.

#[cfg(test)]
#[path = "loading_test.rs"]
mod loading_test;

use leptos::prelude::*;

#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="guard-screen">
            <div class="guard-screen__message">"Loading..."</div>
        </div>
    }
}
