//! Cars page: sortable table, create/edit modal, per-row delete.
//!
//! DESIGN
//! ======
//! The list only reflects confirmed server state: a create appends the
//! record the server returned, an update swaps it in, a delete removes it
//! after the server acknowledges. Failures leave the list untouched and show
//! a message above the table.

#[cfg(test)]
#[path = "cars_test.rs"]
mod cars_test;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::data_table::{Column, DataTable};
use crate::components::form_field::FormField;
use crate::components::modal::Modal;
use crate::net::ApiError;
use crate::net::types::{Car, CarFields, Category, CategoryRef};
use crate::services::{CarService, CategoryService};
use crate::state::auth::AuthContext;
use crate::state::form::{FormMode, FormState};
use crate::state::records::RecordList;
use crate::util::validation::{FieldErrors, trimmed_car, validate_car};

pub const LOAD_FAILED: &str = "Failed to load cars.";
pub const CATEGORIES_FAILED: &str = "Failed to load categories.";
pub const SAVE_FAILED: &str = "Failed to save car.";
pub const DELETE_FAILED: &str = "Failed to delete car.";

/// Create or update depending on `mode`, sending trimmed fields.
///
/// # Errors
///
/// Propagates the service's [`ApiError`].
pub async fn save_car(service: &CarService, mode: &FormMode, fields: &CarFields) -> Result<Car, ApiError> {
    let fields = trimmed_car(fields);
    match mode {
        FormMode::Create => service.create(&fields).await,
        FormMode::Edit(id) => service.update(id, &fields).await,
    }
}

/// Categories for the select and the table's Category column.
///
/// # Errors
///
/// Any API failure collapses to [`CATEGORIES_FAILED`].
pub async fn load_categories(service: &CategoryService) -> Result<Vec<Category>, String> {
    service.list().await.map_err(|e| {
        log::warn!("loading categories failed: {e}");
        CATEGORIES_FAILED.to_owned()
    })
}

/// Copy of `car` whose category carries its name, looked up in `known`
/// when the server sent only an id. Unknown ids are left as they are.
#[must_use]
pub fn resolve_category(car: &Car, known: &[Category]) -> Car {
    let category = match &car.category {
        CategoryRef::Id(id) => known
            .iter()
            .find(|category| &category.id == id)
            .map_or_else(|| car.category.clone(), |category| CategoryRef::Populated(category.clone())),
        populated @ CategoryRef::Populated(_) => populated.clone(),
    };
    Car { category, ..car.clone() }
}

/// Table columns. The Category cell shows a name only for rows already
/// passed through [`resolve_category`]; bare ids render as-is.
#[must_use]
pub fn car_columns() -> Vec<Column<Car>> {
    vec![
        Column::sortable("Model", |car| car.model.clone()),
        Column::sortable("Make", |car| car.make.clone()),
        Column::sortable("Color", |car| car.color.clone()),
        Column::sortable("Category", |car| car.category.label(&[]).to_owned()),
        Column::sortable("Registration Number", |car| car.registration_no.clone()),
    ]
}

#[component]
pub fn CarsPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let list = RwSignal::new(RecordList::<Car>::pending());
    let categories = RwSignal::new(Vec::<Category>::new());
    let category_error = RwSignal::new(None::<String>);
    let form = RwSignal::new(FormState::<CarFields>::default());
    let errors = RwSignal::new(FieldErrors::new());

    let car_service = CarService::new(auth.api());
    spawn_local(async move {
        match car_service.list().await {
            Ok(cars) => list.update(|l| l.replace_all(cars)),
            Err(e) => {
                log::warn!("loading cars failed: {e}");
                list.update(|l| l.fail(LOAD_FAILED));
            }
        }
    });
    let category_service = CategoryService::new(auth.api());
    spawn_local(async move {
        match load_categories(&category_service).await {
            Ok(found) => categories.set(found),
            Err(message) => category_error.set(Some(message)),
        }
    });

    let rows = Signal::derive(move || {
        categories.with(|known| list.with(|l| l.items.iter().map(|car| resolve_category(car, known)).collect::<Vec<_>>()))
    });

    let open_create = move |_: leptos::ev::MouseEvent| {
        errors.set(FieldErrors::new());
        form.update(FormState::open_create);
    };
    let close = Callback::new(move |()| form.update(FormState::close));

    let on_edit = Callback::new(move |car: Car| {
        errors.set(FieldErrors::new());
        form.update(|f| f.open_edit(&car.id, CarFields::from(&car)));
    });

    let on_delete = Callback::new(move |id: String| {
        let service = CarService::new(auth.api());
        spawn_local(async move {
            match service.delete(&id).await {
                Ok(()) => list.update(|l| l.remove(&id)),
                Err(e) => {
                    log::warn!("deleting car {id} failed: {e}");
                    list.update(|l| l.fail(e.user_message(DELETE_FAILED)));
                }
            }
        });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let state = form.get_untracked();
        if state.submitting {
            return;
        }
        let found = validate_car(&state.draft);
        let invalid = !found.is_empty();
        errors.set(found);
        if invalid {
            return;
        }
        form.update(|f| {
            f.submitting = true;
            f.error = None;
        });

        let service = CarService::new(auth.api());
        spawn_local(async move {
            match save_car(&service, &state.mode, &state.draft).await {
                Ok(car) => {
                    list.update(|l| l.apply_saved(state.mode.editing_id(), car));
                    form.update(FormState::close);
                }
                Err(e) => {
                    log::warn!("saving car failed: {e}");
                    form.update(|f| {
                        f.submitting = false;
                        f.error = Some(e.user_message(SAVE_FAILED));
                    });
                }
            }
        });
    };

    let text_field = move |label: &'static str,
                           key: &'static str,
                           get: fn(&CarFields) -> String,
                           set: fn(&mut CarFields, String)| {
        view! {
            <FormField
                label=label
                value=Signal::derive(move || form.with(|f| get(&f.draft)))
                on_input=Callback::new(move |value: String| form.update(|f| set(&mut f.draft, value)))
                error=Signal::derive(move || errors.with(|e| e.get(key).copied()))
            />
        }
    };

    let category_options = move || {
        categories
            .get()
            .into_iter()
            .map(|category| view! { <option value=category.id>{category.name}</option> })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="page page--cars">
            <div class="page__header">
                <h1 class="page__title">"Cars"</h1>
                <button class="btn btn--primary" on:click=open_create>
                    "Add Car"
                </button>
            </div>
            {move || list.with(|l| l.error.clone()).map(|message| view! { <div class="alert alert--error">{message}</div> })}
            {move || category_error.get().map(|message| view! { <div class="alert alert--error">{message}</div> })}
            <Show
                when=move || !list.with(|l| l.loading)
                fallback=|| view! { <div class="spinner" aria-label="Loading"></div> }
            >
                <Show
                    when=move || !list.with(RecordList::is_empty)
                    fallback=|| view! { <p class="page__empty">"No cars available."</p> }
                >
                    <DataTable rows=rows columns=car_columns() on_edit=on_edit on_delete=on_delete />
                </Show>
            </Show>
            <Show when=move || form.with(|f| f.open)>
                <Modal title=Signal::derive(move || form.with(|f| f.mode.title("Car"))) on_close=close>
                    <form class="dialog__form" on:submit=on_submit novalidate=true>
                        {move || form.with(|f| f.error.clone()).map(|message| view! { <div class="alert alert--error">{message}</div> })}
                        {text_field("Model", "model", |f| f.model.clone(), |f, v| f.model = v)}
                        {text_field("Make", "make", |f| f.make.clone(), |f, v| f.make = v)}
                        {text_field("Color", "color", |f| f.color.clone(), |f, v| f.color = v)}
                        <label class="form-field">
                            <span class="form-field__label">"Category"</span>
                            <select
                                class="form-field__input"
                                class:form-field__input--invalid=move || errors.with(|e| e.contains_key("category"))
                                prop:value=move || form.with(|f| f.draft.category.clone())
                                on:change=move |ev| {
                                    let value = event_target_value(&ev);
                                    form.update(|f| f.draft.category = value);
                                }
                            >
                                <option value="">"Select a category"</option>
                                {category_options}
                            </select>
                            {move || {
                                errors
                                    .with(|e| e.get("category").copied())
                                    .map(|message| view! { <div class="form-field__error">{message}</div> })
                            }}
                        </label>
                        {text_field(
                            "Registration Number",
                            "registrationNo",
                            |f| f.registration_no.clone(),
                            |f, v| f.registration_no = v,
                        )}
                        <div class="dialog__actions">
                            <button type="button" class="btn btn--outline" on:click=move |_| close.run(())>
                                "Cancel"
                            </button>
                            <button
                                type="submit"
                                class="btn btn--primary"
                                disabled=move || form.with(|f| f.submitting)
                            >
                                {move || form.with(|f| f.mode.submit_label("Car", f.submitting))}
                            </button>
                        </div>
                    </form>
                </Modal>
            </Show>
        </div>
    }
}
