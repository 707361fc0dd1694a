//! List Initialization Form
//!
//! Collects a name and at least two genres, then hands the finalized
//! record to the caller. Persistence is the caller's responsibility;
//! an invalid submit only surfaces field errors.

use leptos::prelude::*;

use crate::components::GenreSelect;
use crate::models::ListInit;
use crate::validation::{self, FormErrors};

/// Form for creating a new movie list
#[component]
pub fn InitializeListForm(on_create: impl Fn(ListInit) + Copy + 'static) -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (tags, set_tags) = signal(Vec::<String>::new());
    let (errors, set_errors) = signal(FormErrors::default());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match validation::finalize(&name.get(), &tags.get()) {
            Ok(list) => {
                set_errors.set(FormErrors::default());
                set_name.set(String::new());
                set_tags.set(Vec::new());
                on_create(list);
            }
            Err(errs) => set_errors.set(errs),
        }
    };

    view! {
        <form class="new-list-form" on:submit=on_submit>
            <h2>"New List"</h2>
            <input
                type="text"
                placeholder="List Name"
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            {move || errors.get().name.map(|msg| view! {
                <p class="field-error">{msg}</p>
            })}

            <GenreSelect selected=tags set_selected=set_tags />
            {move || errors.get().tags.map(|msg| view! {
                <p class="field-error">{msg}</p>
            })}

            <button type="submit">"Confirm"</button>
        </form>
    }
}
