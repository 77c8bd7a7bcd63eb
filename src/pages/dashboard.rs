//! Dashboard: a single count of registered cars.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::services::CarService;
use crate::state::auth::AuthContext;

pub const FETCH_FAILED: &str = "Failed to fetch car data.";

/// Number of cars the server currently lists.
///
/// # Errors
///
/// Any API failure collapses to [`FETCH_FAILED`].
pub async fn count_cars(service: &CarService) -> Result<usize, String> {
    service.list().await.map(|cars| cars.len()).map_err(|e| {
        log::warn!("dashboard car count failed: {e}");
        FETCH_FAILED.to_owned()
    })
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let total = LocalResource::new(move || {
        let service = CarService::new(auth.api());
        async move { count_cars(&service).await }
    });

    view! {
        <div class="page page--dashboard">
            <h1 class="page__title">"Dashboard"</h1>
            <Suspense fallback=|| view! { <div class="spinner" aria-label="Loading"></div> }>
                {move || {
                    total
                        .get()
                        .map(|result| match result {
                            Ok(count) => {
                                view! {
                                    <div class="stat-card">
                                        <h2 class="stat-card__label">"Total Registered Cars"</h2>
                                        <p class="stat-card__value">{count}</p>
                                    </div>
                                }
                                    .into_any()
                            }
                            Err(message) => view! { <div class="alert alert--error">{message}</div> }.into_any(),
                        })
                }}
            </Suspense>
        </div>
    }
}
