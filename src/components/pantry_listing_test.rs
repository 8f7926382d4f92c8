use super::*;
use leptos::prelude::*;

#[test]
fn column_headers_cover_display_columns() {
    for column in DISPLAY_COLUMNS {
        assert!(!column_header(column).is_empty(), "missing header for {column}");
    }
    assert_eq!(column_header("purchase_date"), "Purchase Date");
    assert_eq!(column_header("unknown"), "");
}

#[test]
fn category_title_capitalizes_each_word() {
    assert_eq!(category_title("baked goods"), "Baked Goods");
    assert_eq!(category_title("herbs/spices"), "Herbs/spices");
    assert_eq!(category_title("dairy"), "Dairy");
    assert_eq!(category_title(""), "");
}

#[test]
fn row_class_marks_expanded_rows() {
    assert_eq!(row_class(false), "pantry-row");
    assert_eq!(row_class(true), "pantry-row pantry-row--expanded");
}

// =============================================================
// Fetch delivery
// =============================================================

use crate::net::error::FETCH_FAILED_MESSAGE;

fn signals() -> (RwSignal<PantryState>, RwSignal<NotificationState>) {
    (RwSignal::new(PantryState::default()), RwSignal::new(NotificationState::default()))
}

fn pantry_item(product: &str, date: &str) -> PantryItem {
    PantryItem {
        id: None,
        product: product.to_owned(),
        purchase_date: date.to_owned(),
        notes: String::new(),
    }
}

fn current_message(notice: RwSignal<NotificationState>) -> Option<String> {
    notice.with_untracked(|n| n.message().map(str::to_owned))
}

#[test]
fn failed_pantry_fetch_notifies_and_leaves_pantry_info_unset() {
    let owner = Owner::new();
    owner.set();
    let (pantry, notice) = signals();
    pantry.update(PantryState::begin_refresh);

    deliver_pantry(Err(FetchError::Unavailable), pantry, notice, 3000);

    assert_eq!(current_message(notice).as_deref(), Some(FETCH_FAILED_MESSAGE));
    assert!(pantry.with_untracked(|s| s.pantry_info.is_none()));
    assert!(!pantry.with_untracked(|s| s.pantry_loading));
}

#[test]
fn failed_pantry_fetch_keeps_previous_records() {
    let owner = Owner::new();
    owner.set();
    let (pantry, notice) = signals();
    deliver_pantry(Ok(vec![pantry_item("p-1", "2021-01-01")]), pantry, notice, 3000);

    deliver_pantry(Err(FetchError::Status { status: 503 }), pantry, notice, 3000);

    assert_eq!(pantry.with_untracked(|s| s.pantry_info.as_ref().map(Vec::len)), Some(1));
    assert_eq!(current_message(notice).as_deref(), Some(FETCH_FAILED_MESSAGE));
}

#[test]
fn successful_pantry_fetch_applies_sorted_unique_records() {
    let owner = Owner::new();
    owner.set();
    let (pantry, notice) = signals();

    deliver_pantry(
        Ok(vec![pantry_item("p-1", "2021-02-01"), pantry_item("p-1", "2021-01-01")]),
        pantry,
        notice,
        3000,
    );

    assert_eq!(pantry.with_untracked(|s| s.pantry_info.as_ref().map(Vec::len)), Some(2));
    assert_eq!(
        pantry.with_untracked(|s| s.pantry_item_for("p-1").map(|i| i.purchase_date.clone())),
        Some("2021-01-01".to_owned())
    );
    assert_eq!(current_message(notice), None);
}

#[test]
fn failed_products_fetch_notifies_and_keeps_products() {
    let owner = Owner::new();
    owner.set();
    let (pantry, notice) = signals();
    let product = Product {
        id: "p-1".to_owned(),
        product_name: "Milk".to_owned(),
        brand: String::new(),
        category: "dairy".to_owned(),
        store: String::new(),
        limit: 1,
    };
    deliver_products(Ok(vec![product.clone(), product]), pantry, notice, 3000);
    assert_eq!(pantry.with_untracked(|s| s.unique_products.len()), 1);

    deliver_products(Err(FetchError::Request("offline".to_owned())), pantry, notice, 3000);

    assert_eq!(pantry.with_untracked(|s| s.unique_products.len()), 1);
    assert_eq!(current_message(notice).as_deref(), Some(FETCH_FAILED_MESSAGE));
}

#[test]
fn successful_delete_runs_refresh() {
    let owner = Owner::new();
    owner.set();
    let (_, notice) = signals();
    let refreshed = RwSignal::new(false);
    let refresh = Callback::new(move |()| refreshed.set(true));

    deliver_delete(Ok(()), "p-1", notice, 3000, refresh);

    assert!(refreshed.get_untracked());
    assert_eq!(current_message(notice), None);
}

#[test]
fn failed_delete_notifies_without_refresh() {
    let owner = Owner::new();
    owner.set();
    let (_, notice) = signals();
    let refreshed = RwSignal::new(false);
    let refresh = Callback::new(move |()| refreshed.set(true));

    deliver_delete(Err(FetchError::Status { status: 500 }), "p-1", notice, 3000, refresh);

    assert!(!refreshed.get_untracked());
    assert_eq!(current_message(notice).as_deref(), Some(FETCH_FAILED_MESSAGE));
}

#[test]
fn delete_delivered_after_listing_disposed_does_not_panic() {
    let owner = Owner::new();
    owner.set();
    let (_, notice) = signals();
    let refresh = Callback::new(move |()| {});
    owner.unset();

    deliver_delete(Ok(()), "p-1", notice, 3000, refresh);
}
