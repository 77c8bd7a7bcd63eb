//! Generic sortable, paginated record table with edit/delete actions.
//!
//! DESIGN
//! ======
//! Columns are plain function pointers so the column set can live in a
//! `StoredValue` and be shared across reactive closures. Sorting and page
//! math live in `util::table`.

use leptos::prelude::*;

use crate::state::records::Record;
use crate::util::table::{
    DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS, SortDirection, SortState, clamp_page, page_count, page_range, range_label,
    sort_rows,
};

/// One table column.
pub struct Column<T> {
    pub title: &'static str,
    pub value: fn(&T) -> String,
    pub sortable: bool,
}

impl<T> Column<T> {
    #[must_use]
    pub fn sortable(title: &'static str, value: fn(&T) -> String) -> Self {
        Self { title, value, sortable: true }
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Column<T> {}

#[component]
pub fn DataTable<T>(
    #[prop(into)] rows: Signal<Vec<T>>,
    columns: Vec<Column<T>>,
    on_edit: Callback<T>,
    on_delete: Callback<String>,
) -> impl IntoView
where
    T: Record + Clone + Send + Sync + 'static,
{
    let default_sort = columns
        .iter()
        .position(|column| column.sortable)
        .map(|column| SortState { column, direction: SortDirection::Ascending });
    let columns = StoredValue::new(columns);
    let sort = RwSignal::new(default_sort);
    let page = RwSignal::new(0_usize);
    let page_size = RwSignal::new(DEFAULT_PAGE_SIZE);

    let total = move || rows.with(Vec::len);
    let visible = move || {
        let mut items = rows.get();
        if let Some(state) = sort.get() {
            if let Some(key) = columns.with_value(|cols| cols.get(state.column).map(|c| c.value)) {
                sort_rows(&mut items, key, state.direction);
            }
        }
        let range = page_range(page.get(), items.len(), page_size.get());
        items[range].to_vec()
    };

    let headers = move || {
        columns.with_value(|cols| {
            cols.iter()
                .copied()
                .enumerate()
                .map(|(index, column)| {
                    let on_click = move |_: leptos::ev::MouseEvent| {
                        if column.sortable {
                            sort.update(|current| *current = Some(SortState::clicked(*current, index)));
                            page.set(0);
                        }
                    };
                    let indicator = move || {
                        sort.get()
                            .filter(|state| state.column == index)
                            .map(|state| state.direction.indicator())
                    };
                    view! {
                        <th
                            class="data-table__header"
                            class:data-table__header--sortable=column.sortable
                            on:click=on_click
                        >
                            {column.title}
                            <span class="data-table__sort">{indicator}</span>
                        </th>
                    }
                })
                .collect::<Vec<_>>()
        })
    };

    let body = move || {
        visible()
            .into_iter()
            .map(|row| {
                let cells = columns.with_value(|cols| {
                    cols.iter()
                        .map(|column| view! { <td class="data-table__cell">{(column.value)(&row)}</td> })
                        .collect::<Vec<_>>()
                });
                let id = row.record_id().to_owned();
                view! {
                    <tr class="data-table__row">
                        {cells}
                        <td class="data-table__cell data-table__cell--actions">
                            <button class="btn btn--small" on:click=move |_| on_edit.run(row.clone())>
                                "Edit"
                            </button>
                            <button class="btn btn--small btn--danger" on:click=move |_| on_delete.run(id.clone())>
                                "Delete"
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect::<Vec<_>>()
    };

    let on_page_size = move |ev: leptos::ev::Event| {
        if let Ok(size) = event_target_value(&ev).parse::<usize>() {
            page_size.set(size);
            page.set(0);
        }
    };
    let current_page = move || clamp_page(page.get(), total(), page_size.get());
    let on_prev = move |_: leptos::ev::MouseEvent| page.set(current_page().saturating_sub(1));
    let on_next = move |_: leptos::ev::MouseEvent| page.set((current_page() + 1).min(page_count(total(), page_size.get()) - 1));

    view! {
        <div class="data-table">
            <table class="data-table__table">
                <thead>
                    <tr>
                        {headers}
                        <th class="data-table__header">"Actions"</th>
                    </tr>
                </thead>
                <tbody>{body}</tbody>
            </table>
            <div class="data-table__footer">
                <label class="data-table__page-size">
                    "Rows per page: "
                    <select on:change=on_page_size prop:value=move || page_size.get().to_string()>
                        {PAGE_SIZE_OPTIONS
                            .iter()
                            .map(|size| view! { <option value=size.to_string()>{size.to_string()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <span class="data-table__range">
                    {move || range_label(&page_range(page.get(), total(), page_size.get()), total())}
                </span>
                <button class="btn btn--small" disabled=move || current_page() == 0 on:click=on_prev>
                    "\u{2039}"
                </button>
                <button
                    class="btn btn--small"
                    disabled=move || current_page() + 1 >= page_count(total(), page_size.get())
                    on:click=on_next
                >
                    "\u{203A}"
                </button>
            </div>
        </div>
    }
}
