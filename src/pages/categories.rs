//! Categories page: the same list/modal flow as cars over a single field.

#[cfg(test)]
#[path = "categories_test.rs"]
mod categories_test;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::data_table::{Column, DataTable};
use crate::components::form_field::FormField;
use crate::components::modal::Modal;
use crate::net::ApiError;
use crate::net::types::{Category, CategoryFields};
use crate::services::CategoryService;
use crate::state::auth::AuthContext;
use crate::state::form::{FormMode, FormState};
use crate::state::records::RecordList;
use crate::util::validation::{FieldErrors, validate_category};

pub const LOAD_FAILED: &str = "Failed to load categories.";
pub const SAVE_FAILED: &str = "Failed to save category.";
pub const DELETE_FAILED: &str = "Failed to delete category.";

/// Create or update depending on `mode`, sending the trimmed name.
///
/// # Errors
///
/// Propagates the service's [`ApiError`].
pub async fn save_category(
    service: &CategoryService,
    mode: &FormMode,
    fields: &CategoryFields,
) -> Result<Category, ApiError> {
    let fields = CategoryFields { name: fields.name.trim().to_owned() };
    match mode {
        FormMode::Create => service.create(&fields).await,
        FormMode::Edit(id) => service.update(id, &fields).await,
    }
}

#[must_use]
pub fn category_columns() -> Vec<Column<Category>> {
    vec![Column::sortable("Category Name", |category| category.name.clone())]
}

#[component]
pub fn CategoriesPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let list = RwSignal::new(RecordList::<Category>::pending());
    let form = RwSignal::new(FormState::<CategoryFields>::default());
    let errors = RwSignal::new(FieldErrors::new());

    let service = CategoryService::new(auth.api());
    spawn_local(async move {
        match service.list().await {
            Ok(found) => list.update(|l| l.replace_all(found)),
            Err(e) => {
                log::warn!("loading categories failed: {e}");
                list.update(|l| l.fail(LOAD_FAILED));
            }
        }
    });

    let open_create = move |_: leptos::ev::MouseEvent| {
        errors.set(FieldErrors::new());
        form.update(FormState::open_create);
    };
    let close = Callback::new(move |()| form.update(FormState::close));

    let on_edit = Callback::new(move |category: Category| {
        errors.set(FieldErrors::new());
        form.update(|f| f.open_edit(&category.id, CategoryFields::from(&category)));
    });

    let on_delete = Callback::new(move |id: String| {
        let service = CategoryService::new(auth.api());
        spawn_local(async move {
            match service.delete(&id).await {
                Ok(()) => list.update(|l| l.remove(&id)),
                Err(e) => {
                    log::warn!("deleting category {id} failed: {e}");
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
        let found = validate_category(&state.draft);
        let invalid = !found.is_empty();
        errors.set(found);
        if invalid {
            return;
        }
        form.update(|f| {
            f.submitting = true;
            f.error = None;
        });

        let service = CategoryService::new(auth.api());
        spawn_local(async move {
            match save_category(&service, &state.mode, &state.draft).await {
                Ok(category) => {
                    list.update(|l| l.apply_saved(state.mode.editing_id(), category));
                    form.update(FormState::close);
                }
                Err(e) => {
                    log::warn!("saving category failed: {e}");
                    form.update(|f| {
                        f.submitting = false;
                        f.error = Some(e.user_message(SAVE_FAILED));
                    });
                }
            }
        });
    };

    view! {
        <div class="page page--categories">
            <div class="page__header">
                <h1 class="page__title">"Categories"</h1>
                <button class="btn btn--primary" on:click=open_create>
                    "Add Category"
                </button>
            </div>
            {move || list.with(|l| l.error.clone()).map(|message| view! { <div class="alert alert--error">{message}</div> })}
            <Show
                when=move || !list.with(|l| l.loading)
                fallback=|| view! { <div class="spinner" aria-label="Loading"></div> }
            >
                <Show
                    when=move || !list.with(RecordList::is_empty)
                    fallback=|| view! { <p class="page__empty">"No categories available."</p> }
                >
                    <DataTable
                        rows=Signal::derive(move || list.with(|l| l.items.clone()))
                        columns=category_columns()
                        on_edit=on_edit
                        on_delete=on_delete
                    />
                </Show>
            </Show>
            <Show when=move || form.with(|f| f.open)>
                <Modal title=Signal::derive(move || form.with(|f| f.mode.title("Category"))) on_close=close>
                    <form class="dialog__form" on:submit=on_submit novalidate=true>
                        {move || form.with(|f| f.error.clone()).map(|message| view! { <div class="alert alert--error">{message}</div> })}
                        <FormField
                            label="Name"
                            placeholder="Enter category name"
                            value=Signal::derive(move || form.with(|f| f.draft.name.clone()))
                            on_input=Callback::new(move |value: String| form.update(|f| f.draft.name = value))
                            error=Signal::derive(move || errors.with(|e| e.get("name").copied()))
                        />
                        <div class="dialog__actions">
                            <button type="button" class="btn btn--outline" on:click=move |_| close.run(())>
                                "Cancel"
                            </button>
                            <button
                                type="submit"
                                class="btn btn--primary"
                                disabled=move || form.with(|f| f.submitting)
                            >
                                {move || form.with(|f| f.mode.submit_label("Category", f.submitting))}
                            </button>
                        </div>
                    </form>
                </Modal>
            </Show>
        </div>
    }
}
