//! Pantry listing state and the list transforms behind it.
//!
//! DESIGN
//! ======
//! Each fetch result replaces its collections wholesale. Products are
//! deduplicated by identity and bucketed into the fixed category list;
//! pantry records are sorted by purchase date and then deduplicated by the
//! product they reference, so the earliest purchase survives.
//!
//! Failures never touch these fields; stale data stays on screen.

#[cfg(test)]
#[path = "pantry_test.rs"]
mod pantry_test;

use std::collections::{BTreeMap, HashSet};

use crate::net::api::filter_products_by_category;
use crate::net::types::{CATEGORIES, PantryItem, Product};

/// Unique products grouped by category label.
pub type CategoryMap = BTreeMap<&'static str, Vec<Product>>;

/// Keep the first product seen for each identity key.
pub fn dedup_products(products: &[Product]) -> Vec<Product> {
    let mut seen = HashSet::new();
    products.iter().filter(|p| seen.insert(p.id.as_str())).cloned().collect()
}

/// Stable ascending sort on the lowercased purchase date.
pub fn sort_pantry_by_date(items: &mut [PantryItem]) {
    items.sort_by_cached_key(PantryItem::date_key);
}

/// Keep the first pantry record seen for each referenced product.
pub fn dedup_pantry(items: &[PantryItem]) -> Vec<PantryItem> {
    let mut seen = HashSet::new();
    items.iter().filter(|item| seen.insert(item.product.as_str())).cloned().collect()
}

/// One bucket per entry in [`CATEGORIES`]; other labels are left out.
pub fn build_category_map(unique_products: &[Product]) -> CategoryMap {
    CATEGORIES
        .iter()
        .map(|&category| (category, filter_products_by_category(unique_products, category)))
        .collect()
}

/// Everything the pantry listing renders.
#[derive(Clone, Debug, Default)]
pub struct PantryState {
    /// Products as last returned by the backend.
    pub matching_products: Vec<Product>,
    pub unique_products: Vec<Product>,
    pub category_map: CategoryMap,
    /// Date-sorted pantry records; `None` until the first successful fetch.
    pub pantry_info: Option<Vec<PantryItem>>,
    pub unique_pantry: Vec<PantryItem>,
    /// Product id of the pantry row whose details are open.
    pub expanded: Option<String>,
    pub products_loading: bool,
    pub pantry_loading: bool,
    /// Set once the first products fetch has succeeded.
    pub products_fetched: bool,
}

impl PantryState {
    /// Mark both collections as in flight.
    pub fn begin_refresh(&mut self) {
        self.products_loading = true;
        self.pantry_loading = true;
    }

    pub fn apply_products(&mut self, products: Vec<Product>) {
        self.unique_products = dedup_products(&products);
        self.category_map = build_category_map(&self.unique_products);
        self.matching_products = products;
        self.products_loading = false;
        self.products_fetched = true;
        log::debug!(
            "pantry products: {} fetched, {} unique",
            self.matching_products.len(),
            self.unique_products.len()
        );
    }

    pub fn apply_pantry(&mut self, mut items: Vec<PantryItem>) {
        sort_pantry_by_date(&mut items);
        self.unique_pantry = dedup_pantry(&items);
        self.pantry_info = Some(items);
        self.pantry_loading = false;
        log::debug!("pantry records: {} unique", self.unique_pantry.len());
    }

    /// Clear the loading flag of a failed fetch, keeping its data.
    pub fn products_failed(&mut self) {
        self.products_loading = false;
    }

    pub fn pantry_failed(&mut self) {
        self.pantry_loading = false;
    }

    /// Open the row for `product_id`, or close it if already open.
    pub fn toggle_expanded(&mut self, product_id: &str) {
        if self.expanded.as_deref() == Some(product_id) {
            self.expanded = None;
        } else {
            self.expanded = Some(product_id.to_owned());
        }
    }

    pub fn is_expanded(&self, product_id: &str) -> bool {
        self.expanded.as_deref() == Some(product_id)
    }

    /// The surviving pantry record for a product.
    pub fn pantry_item_for(&self, product_id: &str) -> Option<&PantryItem> {
        self.unique_pantry.iter().find(|item| item.product == product_id)
    }

    pub fn is_loading(&self) -> bool {
        self.products_loading || self.pantry_loading
    }

    /// Nothing to show yet because the first products fetch is pending.
    pub fn shows_loading_message(&self) -> bool {
        !self.products_fetched && self.unique_products.is_empty()
    }

    /// A products fetch succeeded and returned nothing.
    pub fn shows_empty_message(&self) -> bool {
        self.products_fetched && self.unique_products.is_empty()
    }

    /// Non-empty buckets in display order.
    pub fn populated_categories(&self) -> Vec<(&'static str, Vec<Product>)> {
        CATEGORIES
            .iter()
            .filter_map(|&category| {
                self.category_map
                    .get(category)
                    .filter(|bucket| !bucket.is_empty())
                    .map(|bucket| (category, bucket.clone()))
            })
            .collect()
    }
}
