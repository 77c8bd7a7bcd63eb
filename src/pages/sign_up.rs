//! Sign-up page: name + email; the server mails the password.

#[cfg(test)]
#[path = "sign_up_test.rs"]
mod sign_up_test;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::form_field::FormField;
use crate::net::types::SignUpRequest;
use crate::services::AuthService;
use crate::state::auth::AuthContext;
use crate::util::auth::AppRoute;
use crate::util::validation::{FieldErrors, validate_sign_up};

pub const SIGN_UP_FAILED: &str = "Sign-up failed";
pub const SIGN_UP_SUCCEEDED: &str = "Sign-up successful! Please check your email for login details.";
pub const REDIRECT_DELAY_MS: u32 = 3_000;

/// Register a new account. Issues no token.
///
/// # Errors
///
/// Returns the server's `message` when it sent one, otherwise
/// [`SIGN_UP_FAILED`].
pub async fn submit_sign_up(service: &AuthService, form: &SignUpRequest) -> Result<(), String> {
    let request = SignUpRequest { name: form.name.trim().to_owned(), email: form.email.trim().to_owned() };
    service.sign_up(&request).await.map_err(|e| e.user_message(SIGN_UP_FAILED))
}

#[cfg(feature = "csr")]
async fn pause_before_redirect() {
    gloo_timers::future::TimeoutFuture::new(REDIRECT_DELAY_MS).await;
}

#[cfg(not(feature = "csr"))]
async fn pause_before_redirect() {}

#[component]
pub fn SignUpPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let navigate = use_navigate();

    let form = RwSignal::new(SignUpRequest::default());
    let errors = RwSignal::new(FieldErrors::new());
    let server_error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<&'static str>);
    let submitting = RwSignal::new(false);

    let field_error = move |field: &'static str| Signal::derive(move || errors.with(|e| e.get(field).copied()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let request = form.get_untracked();
        let found = validate_sign_up(&request);
        let invalid = !found.is_empty();
        errors.set(found);
        if invalid {
            return;
        }
        server_error.set(None);
        success.set(None);
        submitting.set(true);

        let service = AuthService::new(auth.api());
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = submit_sign_up(&service, &request).await;
            submitting.set(false);
            match result {
                Ok(()) => {
                    success.set(Some(SIGN_UP_SUCCEEDED));
                    form.set(SignUpRequest::default());
                    pause_before_redirect().await;
                    navigate(AppRoute::SignIn.path(), NavigateOptions::default());
                }
                Err(message) => server_error.set(Some(message)),
            }
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit novalidate=true>
                <h1 class="auth-card__title">"Sign Up"</h1>
                {move || server_error.get().map(|message| view! { <div class="alert alert--error">{message}</div> })}
                {move || success.get().map(|message| view! { <div class="alert alert--success">{message}</div> })}
                <FormField
                    label="Name"
                    placeholder="Enter name"
                    value=Signal::derive(move || form.with(|f| f.name.clone()))
                    on_input=Callback::new(move |value: String| form.update(|f| f.name = value))
                    error=field_error("name")
                />
                <FormField
                    label="Email"
                    input_type="email"
                    placeholder="Enter email"
                    value=Signal::derive(move || form.with(|f| f.email.clone()))
                    on_input=Callback::new(move |value: String| form.update(|f| f.email = value))
                    error=field_error("email")
                />
                <button type="submit" class="btn btn--primary btn--block" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Signing Up..." } else { "Sign Up" }}
                </button>
                <p class="auth-card__footer">
                    "Already have an account? " <a href=AppRoute::SignIn.path()>"Sign In"</a>
                </p>
            </form>
        </div>
    }
}
