//! Cancellable handles for in-flight fetches.
//!
//! A fetch and its delivery callback run together inside a
//! [`futures::future::Abortable`], so once a [`Subscription`] is cancelled
//! the callback can no longer run. Dropping a subscription cancels it.
//!
//! There is no generation counter: a delivery that finished before the
//! cancel still lands.

#[cfg(test)]
#[path = "subscription_test.rs"]
mod subscription_test;

use std::future::Future;

use futures::future::{AbortHandle, Abortable};

/// Owner of one in-flight fetch.
#[derive(Debug)]
pub struct Subscription {
    handle: AbortHandle,
}

impl Subscription {
    /// Stop the fetch; its callback will not run if it has not already.
    pub fn cancel(&self) {
        self.handle.abort();
    }

    pub fn is_cancelled(&self) -> bool {
        self.handle.is_aborted()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Wrap `task` so the returned [`Subscription`] can cancel it.
pub fn subscribe<F>(task: F) -> (Subscription, Abortable<F>)
where
    F: Future,
{
    let (handle, registration) = AbortHandle::new_pair();
    (Subscription { handle }, Abortable::new(task, registration))
}

/// Run `fetch` on the browser event loop and hand its output to `deliver`.
///
/// Outside the browser the task is dropped unpolled.
pub fn spawn_subscribed<F, T, D>(fetch: F, deliver: D) -> Subscription
where
    F: Future<Output = T> + 'static,
    D: FnOnce(T) + 'static,
{
    let (subscription, task) = subscribe(async move { deliver(fetch.await) });
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            if task.await.is_err() {
                log::debug!("fetch cancelled before delivery");
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        drop(task);
    }
    subscription
}

/// The in-flight request handles owned by the pantry listing.
#[derive(Debug, Default)]
pub struct FetchSubscriptions {
    products: Option<Subscription>,
    pantry: Option<Subscription>,
    delete: Option<Subscription>,
}

impl FetchSubscriptions {
    /// Cancel the pending product and pantry fetches, leaving any delete alone.
    pub fn cancel_fetches(&mut self) {
        if let Some(sub) = self.products.take() {
            sub.cancel();
        }
        if let Some(sub) = self.pantry.take() {
            sub.cancel();
        }
    }

    /// Cancel every pending request, including a delete.
    pub fn cancel_all(&mut self) {
        self.cancel_fetches();
        if let Some(sub) = self.delete.take() {
            sub.cancel();
        }
    }

    /// Store the products handle, cancelling the one it replaces.
    pub fn set_products(&mut self, subscription: Subscription) {
        if let Some(previous) = self.products.replace(subscription) {
            previous.cancel();
        }
    }

    /// Store the pantry handle, cancelling the one it replaces.
    pub fn set_pantry(&mut self, subscription: Subscription) {
        if let Some(previous) = self.pantry.replace(subscription) {
            previous.cancel();
        }
    }

    /// Store the delete handle, cancelling the one it replaces.
    pub fn set_delete(&mut self, subscription: Subscription) {
        if let Some(previous) = self.delete.replace(subscription) {
            previous.cancel();
        }
    }

    pub fn is_idle(&self) -> bool {
        self.products.is_none() && self.pantry.is_none() && self.delete.is_none()
    }
}
