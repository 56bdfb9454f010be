//! Products page: list, filter by category, create, edit, and delete.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered behind `PrivateRoute`, so a token is normally present. Every call
//! carries it as a bearer header; the API decides what the user may change.

use leptos::prelude::*;

use crate::auth::{AuthContext, use_auth};
use crate::components::product_card::ProductCard;
use crate::net::api;
use crate::state::products::{ProductDraft, ProductsState};

const FETCH_PRODUCTS_FAILED: &str = "Failed to fetch products";
const CREATE_PRODUCT_FAILED: &str = "Failed to create product";
const UPDATE_PRODUCT_FAILED: &str = "Failed to update product";
const DELETE_PRODUCT_FAILED: &str = "Failed to delete product";

fn load_products(auth: AuthContext, products: RwSignal<ProductsState>) {
    let (request, category) = products.try_update(ProductsState::begin_load).unwrap_or_default();
    let Some(token) = auth.token_untracked() else {
        products.update(|s| {
            s.failed(request, FETCH_PRODUCTS_FAILED);
        });
        return;
    };
    leptos::task::spawn_local(async move {
        match api::fetch_products(&token, category.as_deref()).await {
            Ok(items) => {
                let applied = products.try_update(|s| s.loaded(request, category, items)).unwrap_or(false);
                if !applied {
                    log::debug!("dropped superseded product listing {request}");
                }
            }
            Err(err) => {
                log::warn!("product listing failed: {err}");
                if auth.expire_if_unauthorized(&err) {
                    return;
                }
                products.update(|s| {
                    s.failed(request, err.user_message(FETCH_PRODUCTS_FAILED));
                });
            }
        }
    });
}

#[component]
pub fn ProductsPage() -> impl IntoView {
    let auth = use_auth();
    let products = RwSignal::new(ProductsState::pending());
    let draft = RwSignal::new(ProductDraft::default());
    let saving = RwSignal::new(false);
    let form_error = RwSignal::new(String::new());

    Effect::new(move || load_products(auth, products));

    let on_filter = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        load_products(auth, products);
    };

    let on_clear_filter = move |_| {
        products.update(|s| s.category.clear());
        load_products(auth, products);
    };

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let product = match draft.with_untracked(ProductDraft::to_product) {
            Ok(product) => product,
            Err(message) => {
                form_error.set(message.to_owned());
                return;
            }
        };
        let editing = products.with_untracked(|s| s.editing.clone());
        let fallback = if editing.is_some() { UPDATE_PRODUCT_FAILED } else { CREATE_PRODUCT_FAILED };
        let Some(token) = auth.token_untracked() else {
            form_error.set(fallback.to_owned());
            return;
        };
        saving.set(true);
        form_error.set(String::new());
        leptos::task::spawn_local(async move {
            let result = match editing.as_deref() {
                Some(id) => api::update_product(&token, id, &product).await,
                None => api::create_product(&token, &product).await,
            };
            match (result, editing) {
                (Ok(saved), Some(_)) => {
                    products.update(|s| s.updated(saved));
                    draft.set(ProductDraft::default());
                }
                (Ok(saved), None) => {
                    products.update(|s| s.added(saved));
                    draft.set(ProductDraft::default());
                }
                (Err(err), _) => {
                    log::warn!("product save failed: {err}");
                    if !auth.expire_if_unauthorized(&err) {
                        form_error.set(err.user_message(fallback));
                    }
                }
            }
            saving.set(false);
        });
    };

    let on_edit = Callback::new(move |id: String| {
        products.update(|s| s.editing = Some(id));
        if let Some(next) = products.with_untracked(|s| s.editing_product().map(ProductDraft::from_product)) {
            draft.set(next);
        }
        form_error.set(String::new());
    });

    let on_cancel_edit = move |_| {
        products.update(|s| s.editing = None);
        draft.set(ProductDraft::default());
        form_error.set(String::new());
    };

    let on_delete = Callback::new(move |id: String| {
        let Some(token) = auth.token_untracked() else {
            return;
        };
        leptos::task::spawn_local(async move {
            match api::delete_product(&token, &id).await {
                Ok(()) => products.update(|s| s.removed(&id)),
                Err(err) => {
                    log::warn!("product delete failed: {err}");
                    if !auth.expire_if_unauthorized(&err) {
                        products.update(|s| s.error = Some(err.user_message(DELETE_PRODUCT_FAILED)));
                    }
                }
            }
        });
    });

    let is_editing = move || products.with(|s| s.editing.is_some());

    view! {
        <div class="page">
            <div class="page__inner page__inner--wide">
                <h1 class="page__title">"Products"</h1>

                <form class="filter-bar" on:submit=on_filter>
                    <input
                        class="filter-bar__input"
                        type="text"
                        placeholder="Filter by category"
                        list="product-categories"
                        prop:value=move || products.with(|s| s.category.clone())
                        on:input=move |ev| products.update(|s| s.category = event_target_value(&ev))
                    />
                    <datalist id="product-categories">
                        {move || {
                            products
                                .with(ProductsState::categories)
                                .into_iter()
                                .map(|c| view! { <option value=c></option> })
                                .collect_view()
                        }}
                    </datalist>
                    <button class="btn" type="submit">"Filter"</button>
                    <button class="btn btn--secondary" type="button" on:click=on_clear_filter>
                        "Clear"
                    </button>
                </form>

                <Show when=move || products.with(|s| s.error.is_some())>
                    <div class="alert alert--error">
                        {move || products.with(|s| s.error.clone().unwrap_or_default())}
                    </div>
                </Show>

                <Show
                    when=move || !products.with(|s| s.loading)
                    fallback=|| view! { <p class="page__loading">"Loading..."</p> }
                >
                    <Show
                        when=move || products.with(|s| !s.items.is_empty())
                        fallback=|| view! { <p class="page__empty">"No products found."</p> }
                    >
                        <div class="product-grid">
                            {move || {
                                products
                                    .get()
                                    .items
                                    .into_iter()
                                    .map(|product| {
                                        view! { <ProductCard product=product on_edit=on_edit on_delete=on_delete/> }
                                    })
                                    .collect_view()
                            }}
                        </div>
                    </Show>
                </Show>

                <div class="card">
                    <h2 class="card__title">
                        {move || if is_editing() { "Edit Product" } else { "Add Product" }}
                    </h2>
                    <Show when=move || !form_error.get().is_empty()>
                        <div class="alert alert--error">{move || form_error.get()}</div>
                    </Show>
                    <form class="product-form" on:submit=on_save>
                        <input
                            class="product-form__input"
                            type="text"
                            placeholder="Name"
                            prop:value=move || draft.with(|d| d.name.clone())
                            on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                        />
                        <input
                            class="product-form__input"
                            type="text"
                            placeholder="Category"
                            prop:value=move || draft.with(|d| d.category.clone())
                            on:input=move |ev| draft.update(|d| d.category = event_target_value(&ev))
                        />
                        <input
                            class="product-form__input"
                            type="number"
                            step="0.01"
                            min="0"
                            placeholder="Price"
                            prop:value=move || draft.with(|d| d.price.clone())
                            on:input=move |ev| draft.update(|d| d.price = event_target_value(&ev))
                        />
                        <input
                            class="product-form__input"
                            type="number"
                            step="1"
                            min="0"
                            placeholder="Quantity"
                            prop:value=move || draft.with(|d| d.quantity.clone())
                            on:input=move |ev| draft.update(|d| d.quantity = event_target_value(&ev))
                        />
                        <textarea
                            class="product-form__input product-form__input--wide"
                            placeholder="Description"
                            prop:value=move || draft.with(|d| d.description.clone())
                            on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                        ></textarea>
                        <button class="btn" type="submit" disabled=move || saving.get()>
                            {move || match (saving.get(), is_editing()) {
                                (true, _) => "Saving...",
                                (false, true) => "Save Changes",
                                (false, false) => "Add Product",
                            }}
                        </button>
                        <Show when=is_editing>
                            <button class="btn btn--secondary" type="button" on:click=on_cancel_edit>
                                "Cancel"
                            </button>
                        </Show>
                    </form>
                </div>
            </div>
        </div>
    }
}
