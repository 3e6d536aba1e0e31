//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::ClientConfig;
use crate::pages::login_checkpoint::LoginCheckpointPage;
use crate::state::flash::FlashState;

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
/// Provides the client config and the flash store for the lifetime of the
/// shell, and routes the checkpoint screen.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(ClientConfig::from_build_env());
    provide_context(RwSignal::new(FlashState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/auth-checkpoint.css"/>
        <Title text="Device Checkpoint"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route
                    path=(StaticSegment("auth"), StaticSegment("login"), StaticSegment("checkpoint"))
                    view=LoginCheckpointPage
                />
            </Routes>
        </Router>
    }
}
