//! Pantry page: the listing plus the notification bar.

use leptos::prelude::*;

use crate::components::notification_bar::NotificationBar;
use crate::components::pantry_listing::PantryListing;

/// Landing route showing what is in the pantry.
#[component]
pub fn PantryPage() -> impl IntoView {
    view! {
        <main class="pantry-page">
            <PantryListing/>
            <NotificationBar/>
        </main>
    }
}
