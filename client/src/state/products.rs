//! Product list state and the product form draft.
//!
//! DESIGN
//! ======
//! The draft keeps raw input strings so the form can show exactly what was
//! typed; parsing into a `Product` happens once, on submit.
//!
//! Each listing request gets a sequence number from `begin_load`. Only the
//! latest request may write `items`, so a slow response for an old filter
//! cannot replace a newer one.

#[cfg(test)]
#[path = "products_test.rs"]
mod products_test;

use std::collections::BTreeSet;

use crate::net::types::Product;

/// Product listing backed by `GET /products`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductsState {
    pub items: Vec<Product>,
    pub loading: bool,
    pub error: Option<String>,
    /// Category filter input; empty means all products.
    pub category: String,
    /// Filter the current `items` were fetched with.
    pub applied_category: Option<String>,
    /// Product whose values are loaded into the form, if editing.
    pub editing: Option<String>,
    request: u64,
}

impl ProductsState {
    /// Listing that has not been fetched yet.
    #[must_use]
    pub fn pending() -> Self {
        Self { loading: true, ..Self::default() }
    }

    /// Category to send to the API, if the filter is set.
    #[must_use]
    pub fn category_filter(&self) -> Option<&str> {
        let trimmed = self.category.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    /// Distinct non-empty categories among the loaded items, sorted.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        self.items
            .iter()
            .map(|p| p.category.trim())
            .filter(|c| !c.is_empty())
            .map(str::to_owned)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Start a listing request for the current filter. Returns the request
    /// id and the category to send.
    pub fn begin_load(&mut self) -> (u64, Option<String>) {
        self.request += 1;
        self.loading = true;
        let category = self.category_filter().map(str::to_owned);
        (self.request, category)
    }

    /// Whether `request` is still the latest listing request.
    #[must_use]
    pub fn is_current(&self, request: u64) -> bool {
        self.request == request
    }

    /// Apply a listing response. Returns false when a newer request superseded it.
    pub fn loaded(&mut self, request: u64, category: Option<String>, items: Vec<Product>) -> bool {
        if !self.is_current(request) {
            return false;
        }
        self.items = items;
        self.applied_category = category;
        self.loading = false;
        self.error = None;
        true
    }

    /// Record a failed listing request unless a newer one superseded it.
    pub fn failed(&mut self, request: u64, message: impl Into<String>) -> bool {
        if !self.is_current(request) {
            return false;
        }
        self.loading = false;
        self.error = Some(message.into());
        true
    }

    fn shows(&self, product: &Product) -> bool {
        self.applied_category.as_deref().is_none_or(|c| c == product.category)
    }

    /// Append a freshly created product unless it falls outside the shown filter.
    pub fn added(&mut self, product: Product) {
        if self.shows(&product) {
            self.items.push(product);
        }
        self.error = None;
    }

    /// Replace an edited product in place. It is dropped from the list when
    /// its new category no longer matches the shown filter.
    pub fn updated(&mut self, product: Product) {
        let visible = self.shows(&product);
        let id = product.id.clone();
        match self.items.iter().position(|p| p.id.is_some() && p.id == id) {
            Some(index) if visible => self.items[index] = product,
            Some(index) => {
                self.items.remove(index);
            }
            None if visible => self.items.push(product),
            None => {}
        }
        if self.editing.is_some() && self.editing == id {
            self.editing = None;
        }
        self.error = None;
    }

    pub fn removed(&mut self, id: &str) {
        self.items.retain(|p| p.id.as_deref() != Some(id));
        if self.editing.as_deref() == Some(id) {
            self.editing = None;
        }
    }

    /// Product currently being edited, if it is still listed.
    #[must_use]
    pub fn editing_product(&self) -> Option<&Product> {
        let id = self.editing.as_deref()?;
        self.items.iter().find(|p| p.id.as_deref() == Some(id))
    }
}

/// Raw product form input, used for both create and edit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: String,
    pub quantity: String,
    pub category: String,
}

impl ProductDraft {
    /// Form values for editing an existing product.
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            price: format!("{:.2}", product.price),
            quantity: product.quantity.to_string(),
            category: product.category.clone(),
        }
    }

    /// Validate and convert into a product without an id.
    ///
    /// # Errors
    ///
    /// Returns the message to show when the name is blank, or the price or
    /// quantity is not a non-negative number.
    pub fn to_product(&self) -> Result<Product, &'static str> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Product name is required.");
        }
        let price = self
            .price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite() && *p >= 0.0)
            .ok_or("Price must be a non-negative number.")?;
        let quantity = self
            .quantity
            .trim()
            .parse::<i32>()
            .ok()
            .filter(|q| *q >= 0)
            .ok_or("Quantity must be a non-negative whole number.")?;
        Ok(Product {
            id: None,
            name: name.to_owned(),
            description: self.description.trim().to_owned(),
            price,
            quantity,
            category: self.category.trim().to_owned(),
        })
    }
}
