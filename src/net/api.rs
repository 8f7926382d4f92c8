//! REST helpers for the pantry backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: network calls return
//! [`FetchError::Unavailable`] since these endpoints are only meaningful in
//! the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so a down backend degrades
//! to a notification without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::FetchError;
use super::types::{PantryItem, Product};
use crate::config::ClientConfig;

#[cfg(any(test, feature = "hydrate"))]
fn pantry_products_endpoint(config: &ClientConfig) -> String {
    config.endpoint("pantry/products")
}

#[cfg(any(test, feature = "hydrate"))]
fn pantry_records_endpoint(config: &ClientConfig) -> String {
    config.endpoint("pantry")
}

#[cfg(any(test, feature = "hydrate"))]
fn product_endpoint(config: &ClientConfig, product_id: &str) -> String {
    config.endpoint(&format!("products/{product_id}"))
}

#[cfg(feature = "hydrate")]
async fn get_json<T>(url: &str) -> Result<T, FetchError>
where
    T: serde::de::DeserializeOwned,
{
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| FetchError::Request(e.to_string()))?;
    if !resp.ok() {
        return Err(FetchError::Status { status: resp.status() });
    }
    resp.json::<T>().await.map_err(|e| FetchError::Parse(e.to_string()))
}

/// Fetch every product that currently has a pantry record.
///
/// # Errors
///
/// Returns a [`FetchError`] if the request fails, the server responds with a
/// non-OK status, or the body is not a product list.
pub async fn fetch_products_in_pantry(config: &ClientConfig) -> Result<Vec<Product>, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&pantry_products_endpoint(config)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        Err(FetchError::Unavailable)
    }
}

/// Fetch the raw pantry purchase records.
///
/// # Errors
///
/// Returns a [`FetchError`] if the request fails, the server responds with a
/// non-OK status, or the body is not a pantry record list.
pub async fn fetch_pantry_records(config: &ClientConfig) -> Result<Vec<PantryItem>, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&pantry_records_endpoint(config)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        Err(FetchError::Unavailable)
    }
}

/// Delete a product via `DELETE {base}/products/{id}`.
///
/// # Errors
///
/// Returns a [`FetchError`] if the request fails or the server responds with
/// a non-OK status.
pub async fn delete_product(config: &ClientConfig, product_id: &str) -> Result<(), FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let url = product_endpoint(config, product_id);
        let resp = gloo_net::http::Request::delete(&url)
            .send()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;
        if !resp.ok() {
            return Err(FetchError::Status { status: resp.status() });
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, product_id);
        Err(FetchError::Unavailable)
    }
}

/// Products whose category label equals `category` exactly.
pub fn filter_products_by_category(products: &[Product], category: &str) -> Vec<Product> {
    products.iter().filter(|p| p.category == category).cloned().collect()
}
