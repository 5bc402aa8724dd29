//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{login::LoginPage, update_password::UpdatePasswordPage};

/// HTML shell rendered on the server for SSR + hydration.
///
/// `/config.js` defines `window.AUTH_CONFIG` and must load before the WASM
/// bundle reads it.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script src="/config.js"></script>
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
/// The two auth pages are independent; neither shares state with the other.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/auth-pages.css"/>
        <Title text="Account"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=(StaticSegment("auth"), StaticSegment("login")) view=LoginPage/>
                <Route
                    path=(StaticSegment("auth"), StaticSegment("update-password"))
                    view=UpdatePasswordPage
                />
            </Routes>
        </Router>
    }
}
