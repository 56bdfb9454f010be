use super::*;

fn make_product(id: &str, category: &str) -> Product {
    Product {
        id: Some(id.to_owned()),
        name: format!("Product {id}"),
        description: String::new(),
        price: 1.0,
        quantity: 1,
        category: category.to_owned(),
    }
}

fn draft(name: &str, price: &str, quantity: &str) -> ProductDraft {
    ProductDraft {
        name: name.to_owned(),
        description: "  nice  ".to_owned(),
        price: price.to_owned(),
        quantity: quantity.to_owned(),
        category: " tools ".to_owned(),
    }
}

// =============================================================
// ProductsState
// =============================================================

#[test]
fn category_filter_ignores_blank_input() {
    let mut state = ProductsState::default();
    assert_eq!(state.category_filter(), None);
    state.category = "   ".to_owned();
    assert_eq!(state.category_filter(), None);
    state.category = " books ".to_owned();
    assert_eq!(state.category_filter(), Some("books"));
}

fn loaded_with(items: Vec<Product>) -> ProductsState {
    let mut state = ProductsState::default();
    let (request, category) = state.begin_load();
    assert!(state.loaded(request, category, items));
    state
}

fn filtered(category: &str, items: Vec<Product>) -> ProductsState {
    let mut state = ProductsState { category: category.to_owned(), ..ProductsState::default() };
    let (request, category) = state.begin_load();
    state.loaded(request, category, items);
    state
}

#[test]
fn categories_are_distinct_and_sorted() {
    let state = loaded_with(vec![
        make_product("1", "tools"),
        make_product("2", "books"),
        make_product("3", "tools"),
        make_product("4", ""),
    ]);
    assert_eq!(state.categories(), vec!["books".to_owned(), "tools".to_owned()]);
}

#[test]
fn added_respects_shown_filter() {
    let mut state = filtered("books", vec![]);
    state.added(make_product("1", "tools"));
    assert!(state.items.is_empty());
    state.added(make_product("2", "books"));
    assert_eq!(state.items.len(), 1);
}

#[test]
fn added_ignores_unsubmitted_filter_text() {
    let mut state = loaded_with(vec![]);
    state.category = "books".to_owned();
    state.added(make_product("1", "tools"));
    assert_eq!(state.items.len(), 1);
}

#[test]
fn removed_drops_matching_id_only() {
    let mut state = loaded_with(vec![make_product("1", "a"), make_product("2", "a")]);
    state.removed("1");
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id.as_deref(), Some("2"));
    state.removed("missing");
    assert_eq!(state.items.len(), 1);
}

#[test]
fn failed_then_loaded_clears_error() {
    let mut state = ProductsState::pending();
    let (first, _) = state.begin_load();
    assert!(state.failed(first, "Failed to fetch products"));
    assert!(!state.loading);
    assert!(state.error.is_some());
    let (second, category) = state.begin_load();
    state.loaded(second, category, vec![]);
    assert!(state.error.is_none());
}

#[test]
fn begin_load_sends_trimmed_filter() {
    let mut state = ProductsState { category: " books ".to_owned(), ..ProductsState::default() };
    let (_, category) = state.begin_load();
    assert!(state.loading);
    assert_eq!(category.as_deref(), Some("books"));
}

#[test]
fn older_response_is_ignored_after_filter_changes() {
    let mut state = ProductsState::pending();
    let (all_request, all_category) = state.begin_load();
    state.category = "books".to_owned();
    let (books_request, books_category) = state.begin_load();

    assert!(state.loaded(books_request, books_category, vec![make_product("1", "books")]));
    assert!(!state.loaded(all_request, all_category, vec![make_product("1", "books"), make_product("2", "tools")]));

    assert_eq!(state.items.len(), 1);
    assert_eq!(state.applied_category.as_deref(), Some("books"));
    assert!(!state.loading);
}

#[test]
fn older_failure_is_ignored_after_filter_changes() {
    let mut state = ProductsState::pending();
    let (old, _) = state.begin_load();
    let (new, category) = state.begin_load();
    assert!(!state.failed(old, "Failed to fetch products"));
    assert!(state.loading);
    assert!(state.error.is_none());
    state.loaded(new, category, vec![]);
    assert!(!state.loading);
}

#[test]
fn updated_replaces_product_in_place() {
    let mut state = loaded_with(vec![make_product("1", "a"), make_product("2", "a")]);
    state.editing = Some("1".to_owned());
    let mut edited = make_product("1", "a");
    edited.name = "Renamed".to_owned();
    state.updated(edited);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[0].name, "Renamed");
    assert_eq!(state.editing, None);
}

#[test]
fn updated_drops_product_leaving_filter() {
    let mut state = filtered("books", vec![make_product("1", "books")]);
    state.updated(make_product("1", "tools"));
    assert!(state.items.is_empty());
}

#[test]
fn editing_product_follows_listing() {
    let mut state = loaded_with(vec![make_product("1", "a")]);
    assert!(state.editing_product().is_none());
    state.editing = Some("1".to_owned());
    assert_eq!(state.editing_product().map(|p| p.name.as_str()), Some("Product 1"));
    state.removed("1");
    assert_eq!(state.editing, None);
}

// =============================================================
// ProductDraft
// =============================================================

#[test]
fn draft_converts_trimmed_fields() {
    let product = draft(" Lamp ", "19.99", "3").to_product().unwrap();
    assert_eq!(product.id, None);
    assert_eq!(product.name, "Lamp");
    assert_eq!(product.description, "nice");
    assert_eq!(product.category, "tools");
    assert!((product.price - 19.99).abs() < f64::EPSILON);
    assert_eq!(product.quantity, 3);
}

#[test]
fn draft_requires_name() {
    assert_eq!(draft("  ", "1", "1").to_product(), Err("Product name is required."));
}

#[test]
fn draft_rejects_bad_price() {
    assert_eq!(draft("Lamp", "abc", "1").to_product(), Err("Price must be a non-negative number."));
    assert_eq!(draft("Lamp", "-1", "1").to_product(), Err("Price must be a non-negative number."));
    assert_eq!(draft("Lamp", "NaN", "1").to_product(), Err("Price must be a non-negative number."));
}

#[test]
fn draft_rejects_bad_quantity() {
    assert_eq!(
        draft("Lamp", "1", "1.5").to_product(),
        Err("Quantity must be a non-negative whole number.")
    );
    assert_eq!(
        draft("Lamp", "1", "-2").to_product(),
        Err("Quantity must be a non-negative whole number.")
    );
}

#[test]
fn draft_from_product_round_trips_through_validation() {
    let mut product = make_product("7", "tools");
    product.price = 4.5;
    let draft = ProductDraft::from_product(&product);
    assert_eq!(draft.price, "4.50");
    assert_eq!(draft.quantity, "1");
    let parsed = draft.to_product().unwrap();
    assert_eq!(parsed.id, None);
    assert_eq!(parsed.name, product.name);
    assert_eq!(parsed.category, "tools");
}

#[test]
fn draft_accepts_zero_price_and_quantity() {
    let product = draft("Free", "0", "0").to_product().unwrap();
    assert_eq!(product.quantity, 0);
    assert!(product.price.abs() < f64::EPSILON);
}
