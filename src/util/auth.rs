//! Route table and the render-vs-redirect guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route applies the same decision: render when the session
//! holds a token, otherwise redirect to sign-in. Expiry is not re-checked
//! here; it is evaluated once at startup and the server rejects stale tokens.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::session::Session;

pub const SIGN_IN_PATH: &str = "/signin";

/// Every navigable view in the application.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Home,
    Dashboard,
    Cars,
    Categories,
    SignIn,
    SignUp,
}

impl AppRoute {
    pub const ALL: [Self; 6] = [Self::Home, Self::Dashboard, Self::Cars, Self::Categories, Self::SignIn, Self::SignUp];

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Dashboard => "/dashboard",
            Self::Cars => "/cars",
            Self::Categories => "/categories",
            Self::SignIn => SIGN_IN_PATH,
            Self::SignUp => "/signup",
        }
    }

    /// Whether the view requires a session.
    #[must_use]
    pub fn is_protected(self) -> bool {
        !matches!(self, Self::SignIn | Self::SignUp)
    }
}

/// Outcome of consulting the guard for a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    Render,
    Redirect(&'static str),
}

/// Decide whether `route` may render for `session`.
#[must_use]
pub fn decide(route: AppRoute, session: &Session) -> RouteDecision {
    if !route.is_protected() || session.token().is_some() {
        RouteDecision::Render
    } else {
        RouteDecision::Redirect(SIGN_IN_PATH)
    }
}
