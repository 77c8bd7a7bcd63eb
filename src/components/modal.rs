//! Backdrop + dialog shell used by the create/edit forms.

use leptos::prelude::*;

/// Modal dialog. Clicking the backdrop closes it; clicks inside do not.
#[component]
pub fn Modal(#[prop(into)] title: Signal<String>, on_close: Callback<()>, children: Children) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2 class="dialog__title">{move || title.get()}</h2>
                {children()}
            </div>
        </div>
    }
}
