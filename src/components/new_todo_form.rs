//! New Todo Form Component
//!
//! Controlled text input plus submit button for creating tasks.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::config;
use crate::models::append_todo;
use crate::store::{self, use_todos, TodoCacheStoreFields};

/// Creation form at the top of the list
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let store = use_todos();

    let (new_title, set_new_title) = signal(String::new());

    let create_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = new_title.get().trim().to_string();
        if title.is_empty() {
            return;
        }

        spawn_local(async move {
            match api::create_todo(config::API_URL, &title).await {
                Ok(created) => {
                    let todos = store.todos().get_untracked().unwrap_or_default();
                    store::mutate(&store, append_todo(&todos, created));
                    // Input clears only once the server confirmed the create
                    set_new_title.set(String::new());
                }
                Err(err) => store::publish_error(&store, err),
            }
        });
    };

    view! {
        <form class="new-todo-form" on:submit=create_todo>
            <input
                type="text"
                placeholder="Add a task"
                prop:value=move || new_title.get()
                on:input=move |ev| set_new_title.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
