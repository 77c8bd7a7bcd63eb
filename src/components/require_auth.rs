//! Route wrapper that applies the session guard before rendering.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::state::auth::AuthContext;
use crate::util::auth::{AppRoute, RouteDecision, decide};

/// Render `children` when the guard admits `route`, otherwise redirect.
///
/// Re-evaluates whenever the session changes, so logging out on a protected
/// page sends the user to sign-in.
#[component]
pub fn RequireAuth(route: AppRoute, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    move || match decide(route, &auth.session()) {
        RouteDecision::Render => children().into_any(),
        RouteDecision::Redirect(path) => view! { <Redirect path=path/> }.into_any(),
    }
}
