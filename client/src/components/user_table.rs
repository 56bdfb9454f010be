//! Admin table of every registered user.

use leptos::prelude::*;

use crate::net::types::UserRecord;

#[component]
pub fn UserTable(#[prop(into)] users: Signal<Vec<UserRecord>>) -> impl IntoView {
    view! {
        <div class="user-table__wrap">
            <table class="user-table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Username"</th>
                        <th>"Email"</th>
                        <th>"Roles"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || users.get()
                        key=|u| u.id
                        children=move |u| {
                            let roles = u.role_names();
                            view! {
                                <tr>
                                    <td>{u.id}</td>
                                    <td>{u.username}</td>
                                    <td>{u.email}</td>
                                    <td>{roles}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
