//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::ClientConfig;
use crate::pages::pantry::PantryPage;
use crate::state::notification::NotificationState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides config and the notification bar state, then sets up routing.
/// Pantry data is owned by the listing itself and dropped with it.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(ClientConfig::from_env());
    provide_context(RwSignal::new(NotificationState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/pantry-ui.css"/>
        <Title text="Pantry"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=PantryPage/>
                <Route path=StaticSegment("pantry") view=PantryPage/>
            </Routes>
        </Router>
    }
}
