//! Sign-in page: email + password, exchanges credentials for a token.

#[cfg(test)]
#[path = "sign_in_test.rs"]
mod sign_in_test;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::form_field::FormField;
use crate::net::types::SignInRequest;
use crate::services::AuthService;
use crate::state::auth::AuthContext;
use crate::util::auth::AppRoute;
use crate::util::validation::{FieldErrors, validate_sign_in};

pub const SIGN_IN_FAILED: &str = "Login failed";

/// Exchange credentials for a token and start the session with it.
///
/// # Errors
///
/// Returns the server's `message` when it sent one, otherwise
/// [`SIGN_IN_FAILED`]. A token that does not decode also yields
/// [`SIGN_IN_FAILED`] and leaves the session unchanged.
pub async fn submit_sign_in(service: &AuthService, auth: AuthContext, form: &SignInRequest) -> Result<(), String> {
    let request = SignInRequest { email: form.email.trim().to_owned(), password: form.password.clone() };
    let response = service.sign_in(&request).await.map_err(|e| e.user_message(SIGN_IN_FAILED))?;
    auth.login(&response.token).map_err(|e| {
        log::warn!("sign-in returned an undecodable token: {e}");
        SIGN_IN_FAILED.to_owned()
    })?;
    Ok(())
}

#[component]
pub fn SignInPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let navigate = use_navigate();

    let form = RwSignal::new(SignInRequest::default());
    let errors = RwSignal::new(FieldErrors::new());
    let server_error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let field_error = move |field: &'static str| Signal::derive(move || errors.with(|e| e.get(field).copied()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let request = form.get_untracked();
        let found = validate_sign_in(&request);
        let invalid = !found.is_empty();
        errors.set(found);
        if invalid {
            return;
        }
        server_error.set(None);
        submitting.set(true);

        let service = AuthService::new(auth.api());
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = submit_sign_in(&service, auth, &request).await;
            submitting.set(false);
            match result {
                Ok(()) => navigate(AppRoute::Dashboard.path(), NavigateOptions::default()),
                Err(message) => server_error.set(Some(message)),
            }
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit novalidate=true>
                <h1 class="auth-card__title">"Sign In"</h1>
                {move || server_error.get().map(|message| view! { <div class="alert alert--error">{message}</div> })}
                <FormField
                    label="Email"
                    input_type="email"
                    placeholder="Enter email"
                    value=Signal::derive(move || form.with(|f| f.email.clone()))
                    on_input=Callback::new(move |value: String| form.update(|f| f.email = value))
                    error=field_error("email")
                />
                <FormField
                    label="Password"
                    input_type="password"
                    placeholder="Enter password"
                    value=Signal::derive(move || form.with(|f| f.password.clone()))
                    on_input=Callback::new(move |value: String| form.update(|f| f.password = value))
                    error=field_error("password")
                />
                <button type="submit" class="btn btn--primary btn--block" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Signing In..." } else { "Sign In" }}
                </button>
                <p class="auth-card__footer">
                    "Don't have an account? " <a href=AppRoute::SignUp.path()>"Sign Up"</a>
                </p>
            </form>
        </div>
    }
}
