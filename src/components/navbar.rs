//! Top navigation bar with session-aware links and logout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthContext;
use crate::util::auth::{AppRoute, SIGN_IN_PATH};

/// Brand link plus either the resource links and a logout button, or the
/// sign-in/sign-up links when nobody is signed in.
#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let navigate = use_navigate();

    let on_logout = Callback::new(move |()| {
        auth.logout();
        navigate(SIGN_IN_PATH, NavigateOptions::default());
    });

    let user_name = move || auth.display_name().unwrap_or_default();

    view! {
        <nav class="navbar">
            <a href=AppRoute::Home.path() class="navbar__brand">
                "Car Management"
            </a>
            <Show
                when=move || auth.is_authenticated()
                fallback=|| {
                    view! {
                        <div class="navbar__links navbar__links--end">
                            <a href=AppRoute::SignIn.path() class="navbar__link">"Sign In"</a>
                            <a href=AppRoute::SignUp.path() class="navbar__link">"Sign Up"</a>
                        </div>
                    }
                }
            >
                <div class="navbar__links">
                    <a href=AppRoute::Dashboard.path() class="navbar__link">"Dashboard"</a>
                    <a href=AppRoute::Categories.path() class="navbar__link">"Categories"</a>
                    <a href=AppRoute::Cars.path() class="navbar__link">"Cars"</a>
                </div>
                <span class="navbar__spacer"></span>
                <span class="navbar__user">{user_name}</span>
                <button class="btn btn--outline navbar__logout" on:click=move |_| on_logout.run(())>
                    "Logout"
                </button>
            </Show>
        </nav>
    }
}
