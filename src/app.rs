//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::components::require_auth::RequireAuth;
use crate::config::AppConfig;
use crate::net::ApiClient;
use crate::net::transport::default_transport;
use crate::pages::{
    cars::CarsPage, categories::CategoriesPage, dashboard::DashboardPage, sign_in::SignInPage, sign_up::SignUpPage,
};
use crate::session::{AuthStore, token_store::default_token_store};
use crate::state::auth::AuthContext;
use crate::util::auth::AppRoute;

/// Root application component.
///
/// Restores the persisted session once, before any route renders, then
/// provides the [`AuthContext`] to every page.
#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_meta_context();

    let store = AuthStore::new(default_token_store());
    store.initialize();
    let api = ApiClient::new(&config.api_base_url, store.clone(), default_transport());
    provide_context(AuthContext::new(store, api));

    view! {
        <Title text="Car Management"/>

        <Router>
            <Navbar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("signup") view=SignUpPage/>
                    <Route path=StaticSegment("signin") view=SignInPage/>
                    <Route
                        path=StaticSegment("")
                        view=|| view! { <RequireAuth route=AppRoute::Home><DashboardPage/></RequireAuth> }
                    />
                    <Route
                        path=StaticSegment("dashboard")
                        view=|| view! { <RequireAuth route=AppRoute::Dashboard><DashboardPage/></RequireAuth> }
                    />
                    <Route
                        path=StaticSegment("cars")
                        view=|| view! { <RequireAuth route=AppRoute::Cars><CarsPage/></RequireAuth> }
                    />
                    <Route
                        path=StaticSegment("categories")
                        view=|| view! { <RequireAuth route=AppRoute::Categories><CategoriesPage/></RequireAuth> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
