//! Single product tile on the products page.

use leptos::prelude::*;

use crate::net::types::Product;

#[component]
pub fn ProductCard(product: Product, on_edit: Callback<String>, on_delete: Callback<String>) -> impl IntoView {
    let price = product.price_label();
    let id = product.id.clone();
    let category = product.category;

    view! {
        <div class="product-card">
            <div class="product-card__header">
                <h3 class="product-card__name">{product.name}</h3>
                {(!category.is_empty()).then(|| view! { <span class="product-card__category">{category}</span> })}
            </div>
            <p class="product-card__description">{product.description}</p>
            <div class="product-card__meta">
                <span class="product-card__price">{price}</span>
                <span class="product-card__quantity">{format!("Qty: {}", product.quantity)}</span>
            </div>
            {id.map(|id| {
                let edit_id = id.clone();
                view! {
                    <div class="product-card__actions">
                        <button
                            class="btn btn--secondary"
                            on:click=move |_| on_edit.run(edit_id.clone())
                        >
                            "Edit"
                        </button>
                        <button
                            class="btn product-card__delete"
                            on:click=move |_| on_delete.run(id.clone())
                        >
                            "Delete"
                        </button>
                    </div>
                }
            })}
        </div>
    }
}
