//! Pantry listing: products grouped by category with expandable rows.
//!
//! SYSTEM CONTEXT
//! ==============
//! On activation the listing issues two independent fetches (products in the
//! pantry, pantry records). Each delivers into the component-local
//! `PantryState` on its own; neither waits for the other. A refresh cancels
//! whatever the previous pair still has in flight.
//!
//! ERROR HANDLING
//! ==============
//! A failed fetch logs, shows the generic notification, and leaves the
//! previously displayed data alone. There is no automatic retry; the Refresh
//! button re-runs the pair.

#[cfg(test)]
#[path = "pantry_listing_test.rs"]
mod pantry_listing_test;

use leptos::prelude::*;

use crate::components::delete_dialog::{DeleteConfirmDialog, DialogOutcome};
use crate::components::notification_bar::show_notification;
use crate::config::ClientConfig;
use crate::net::api;
use crate::net::error::FetchError;
use crate::net::subscription::{FetchSubscriptions, spawn_subscribed};
use crate::net::types::{DISPLAY_COLUMNS, PantryItem, Product};
use crate::state::notification::NotificationState;
use crate::state::pantry::PantryState;

/// Header text for a column key.
fn column_header(column: &str) -> &'static str {
    match column {
        "product" => "Product",
        "purchase_date" => "Purchase Date",
        "notes" => "Notes",
        _ => "",
    }
}

/// Title-case a category label for section headings.
fn category_title(category: &str) -> String {
    category
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            chars
                .next()
                .map(|first| first.to_uppercase().chain(chars).collect::<String>())
                .unwrap_or_default()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn row_class(expanded: bool) -> &'static str {
    if expanded { "pantry-row pantry-row--expanded" } else { "pantry-row" }
}

fn report_fetch_error(notice: RwSignal<NotificationState>, dismiss_after_ms: u64, what: &str, err: &FetchError) {
    log::error!("couldn't get the {what}; the server might be down: {err}");
    show_notification(notice, err.user_message(), dismiss_after_ms);
}

/// Store a products fetch result, or report it and keep the old list.
fn deliver_products(
    result: Result<Vec<Product>, FetchError>,
    pantry: RwSignal<PantryState>,
    notice: RwSignal<NotificationState>,
    dismiss_after_ms: u64,
) {
    match result {
        Ok(products) => pantry.update(|s| s.apply_products(products)),
        Err(e) => {
            pantry.update(PantryState::products_failed);
            report_fetch_error(notice, dismiss_after_ms, "pantry products", &e);
        }
    }
}

/// Store a pantry records result, or report it and keep the old records.
fn deliver_pantry(
    result: Result<Vec<PantryItem>, FetchError>,
    pantry: RwSignal<PantryState>,
    notice: RwSignal<NotificationState>,
    dismiss_after_ms: u64,
) {
    match result {
        Ok(items) => pantry.update(|s| s.apply_pantry(items)),
        Err(e) => {
            pantry.update(PantryState::pantry_failed);
            report_fetch_error(notice, dismiss_after_ms, "pantry records", &e);
        }
    }
}

/// Refresh after a successful delete, or report the failure.
fn deliver_delete(
    result: Result<(), FetchError>,
    product_id: &str,
    notice: RwSignal<NotificationState>,
    dismiss_after_ms: u64,
    refresh: Callback<()>,
) {
    match result {
        Ok(()) => {
            log::info!("deleted product {product_id}");
            if refresh.try_run(()).is_none() {
                log::debug!("listing gone before refresh after delete");
            }
        }
        Err(e) => report_fetch_error(notice, dismiss_after_ms, "product deletion", &e),
    }
}

/// Cancel the previous fetch pair and start a new one.
fn start_refresh(
    config: &ClientConfig,
    pantry: RwSignal<PantryState>,
    notice: RwSignal<NotificationState>,
    subscriptions: StoredValue<FetchSubscriptions>,
) {
    subscriptions.update_value(FetchSubscriptions::cancel_fetches);
    pantry.update(PantryState::begin_refresh);
    let dismiss_after_ms = config.notification_ms;

    let products_config = config.clone();
    let products = spawn_subscribed(
        async move { api::fetch_products_in_pantry(&products_config).await },
        move |result| deliver_products(result, pantry, notice, dismiss_after_ms),
    );

    let records_config = config.clone();
    let records = spawn_subscribed(
        async move { api::fetch_pantry_records(&records_config).await },
        move |result| deliver_pantry(result, pantry, notice, dismiss_after_ms),
    );

    subscriptions.update_value(|subs| {
        subs.set_products(products);
        subs.set_pantry(records);
    });
}

/// Delete a confirmed product, then refresh the listing.
///
/// The request is owned by `subscriptions`, so tearing the listing down
/// cancels it before it can deliver.
fn delete_then_refresh(
    config: ClientConfig,
    product: Product,
    notice: RwSignal<NotificationState>,
    subscriptions: StoredValue<FetchSubscriptions>,
    refresh: Callback<()>,
) {
    let dismiss_after_ms = config.notification_ms;
    let product_id = product.id.clone();
    let delete = spawn_subscribed(
        async move { api::delete_product(&config, &product.id).await },
        move |result| deliver_delete(result, &product_id, notice, dismiss_after_ms, refresh),
    );
    subscriptions.update_value(|subs| subs.set_delete(delete));
}

/// Pantry listing with category sections and a delete-confirmation dialog.
#[component]
pub fn PantryListing() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let notice = expect_context::<RwSignal<NotificationState>>();

    let pantry = RwSignal::new(PantryState::default());
    let subscriptions = StoredValue::new(FetchSubscriptions::default());
    let pending_delete = RwSignal::new(None::<Product>);

    let refresh_config = config.clone();
    let refresh = Callback::new(move |()| {
        start_refresh(&refresh_config, pantry, notice, subscriptions);
    });

    // Effects only run in the browser, so SSR renders the empty listing.
    Effect::new(move || refresh.run(()));
    on_cleanup(move || {
        let _ = subscriptions.try_update_value(FetchSubscriptions::cancel_all);
    });

    // Sections only rebuild when the grouped products change, not on row
    // expansion or loading-flag flips.
    let sections = Memo::new(move |_| pantry.with(PantryState::populated_categories));

    let on_delete_request = Callback::new(move |product: Product| pending_delete.set(Some(product)));
    let on_dialog_close = Callback::new(move |outcome: DialogOutcome<Product>| {
        pending_delete.set(None);
        match outcome {
            DialogOutcome::Confirm(product) => {
                delete_then_refresh(config.clone(), product, notice, subscriptions, refresh);
            }
            DialogOutcome::Cancel => log::debug!("delete cancelled"),
        }
    });

    view! {
        <section class="pantry-listing">
            <header class="pantry-listing__header toolbar">
                <span class="toolbar__board-name">"My Pantry"</span>
                <span class="toolbar__spacer"></span>
                <button
                    class="btn toolbar__refresh"
                    on:click=move |_| refresh.run(())
                    disabled=move || pantry.with(PantryState::is_loading)
                >
                    "Refresh"
                </button>
            </header>

            <Show when=move || pantry.with(PantryState::shows_loading_message)>
                <p class="pantry-listing__loading">"Loading pantry..."</p>
            </Show>
            <Show when=move || pantry.with(PantryState::shows_empty_message)>
                <p class="pantry-listing__empty">"There are no products in the pantry."</p>
            </Show>

            {move || {
                sections
                    .get()
                    .into_iter()
                    .map(|(category, products)| {
                        view! {
                            <CategorySection
                                category=category
                                products=products
                                pantry=pantry
                                on_delete=on_delete_request
                            />
                        }
                    })
                    .collect::<Vec<_>>()
            }}

            {move || {
                pending_delete
                    .get()
                    .map(|product| view! { <DeleteConfirmDialog item=product on_close=on_dialog_close/> })
            }}
        </section>
    }
}

/// One category heading with its product table.
#[component]
fn CategorySection(
    category: &'static str,
    products: Vec<Product>,
    pantry: RwSignal<PantryState>,
    on_delete: Callback<Product>,
) -> impl IntoView {
    view! {
        <div class="pantry-category">
            <h2 class="pantry-category__title">{category_title(category)}</h2>
            <table class="pantry-table">
                <thead>
                    <tr>
                        {DISPLAY_COLUMNS
                            .iter()
                            .map(|&column| view! { <th>{column_header(column)}</th> })
                            .collect::<Vec<_>>()}
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {products
                        .into_iter()
                        .map(|product| view! { <PantryRow product=product pantry=pantry on_delete=on_delete/> })
                        .collect::<Vec<_>>()}
                </tbody>
            </table>
        </div>
    }
}

/// A product row plus its expandable detail row.
#[component]
fn PantryRow(product: Product, pantry: RwSignal<PantryState>, on_delete: Callback<Product>) -> impl IntoView {
    let record_id = product.id.clone();
    let record = Memo::new(move |_| pantry.with(|s| s.pantry_item_for(&record_id).cloned()));
    let expanded_id = product.id.clone();
    let expanded = Memo::new(move |_| pantry.with(|s| s.is_expanded(&expanded_id)));

    let toggle_id = product.id.clone();
    let name = product.display_name().to_owned();
    let brand = product.brand.clone();
    let store = product.store.clone();
    let category = product.category.clone();
    let limit = product.limit;
    let colspan = (DISPLAY_COLUMNS.len() + 1).to_string();

    view! {
        <tr class=move || row_class(expanded.get()) on:click=move |_| pantry.update(|s| s.toggle_expanded(&toggle_id))>
            <td>{name}</td>
            <td>{move || record.get().map(|r| r.purchase_date).unwrap_or_default()}</td>
            <td>{move || record.get().map(|r| r.notes).unwrap_or_default()}</td>
            <td>
                <button
                    class="btn btn--danger"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_delete.run(product.clone());
                    }
                >
                    "Delete"
                </button>
            </td>
        </tr>
        <Show when=move || expanded.get()>
            <tr class="pantry-row__detail">
                <td colspan=colspan.clone()>
                    <dl class="pantry-row__facts">
                        <dt>"Brand"</dt>
                        <dd>{brand.clone()}</dd>
                        <dt>"Store"</dt>
                        <dd>{store.clone()}</dd>
                        <dt>"Category"</dt>
                        <dd>{category.clone()}</dd>
                        <dt>"Limit"</dt>
                        <dd>{limit}</dd>
                    </dl>
                </td>
            </tr>
        </Show>
    }
}
