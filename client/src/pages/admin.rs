//! Admin panel listing every user from `GET /users/all`.

use leptos::prelude::*;

use crate::auth::use_auth;
use crate::components::loading::Loading;
use crate::components::user_table::UserTable;
use crate::net::api;
use crate::state::admin::{AdminState, FETCH_USERS_FAILED};

#[component]
pub fn AdminPage() -> impl IntoView {
    let auth = use_auth();
    let admin = RwSignal::new(AdminState::default());

    // Fetch once on mount; the effect reads no signals so it never re-runs.
    Effect::new(move || {
        let Some(token) = auth.token_untracked() else {
            admin.update(|s| s.failed(FETCH_USERS_FAILED));
            return;
        };
        leptos::task::spawn_local(async move {
            match api::fetch_all_users(&token).await {
                Ok(users) => admin.update(|s| s.loaded(users)),
                Err(err) => {
                    log::warn!("admin user listing failed: {err}");
                    if !auth.expire_if_unauthorized(&err) {
                        admin.update(|s| s.failed(FETCH_USERS_FAILED));
                    }
                }
            }
        });
    });

    let users = Signal::derive(move || admin.with(|s| s.users.clone()));

    view! {
        <Show
            when=move || !admin.with(|s| s.loading)
            fallback=|| view! { <Loading/> }
        >
            <div class="page">
                <div class="page__inner page__inner--wide">
                    <h1 class="page__title">"Admin Panel"</h1>
                    <Show when=move || admin.with(|s| s.error.is_some())>
                        <div class="alert alert--error">
                            {move || admin.with(|s| s.error.clone().unwrap_or_default())}
                        </div>
                    </Show>
                    <div class="card">
                        <h2 class="card__title">"All Users"</h2>
                        <UserTable users=users/>
                    </div>
                </div>
            </div>
        </Show>
    }
}
