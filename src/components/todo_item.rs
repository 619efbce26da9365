//! Todo Item Component
//!
//! One task row: completion checkbox, inline title edit, delete.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, TodoPatch};
use crate::config;
use crate::models::{remove_todo, replace_todo, Todo};
use crate::store::{self, use_todos, TodoCacheStoreFields};

/// Edit-mode state for one row
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum EditMode {
    #[default]
    Viewing,
    Editing,
}

/// A single task row
#[component]
pub fn TodoItem(todo: Todo) -> impl IntoView {
    let store = use_todos();

    let id = todo.id;
    let is_completed = todo.is_completed;
    let title = todo.title.clone();

    let (mode, set_mode) = signal(EditMode::Viewing);
    // Draft buffer, snapshotted from the canonical title on entering edit mode
    let (draft, set_draft) = signal(String::new());

    let snapshot_title = title.clone();
    let on_edit_or_save = move |_| match mode.get() {
        EditMode::Viewing => {
            set_draft.set(snapshot_title.clone());
            set_mode.set(EditMode::Editing);
        }
        EditMode::Editing => {
            // Edit mode exits before the request resolves
            set_mode.set(EditMode::Viewing);
            let edited_title = draft.get();
            spawn_local(async move {
                let patch = TodoPatch {
                    title: Some(&edited_title),
                    ..Default::default()
                };
                match api::edit_todo(config::API_URL, id, &patch).await {
                    Ok(updated) => {
                        let todos = store.todos().get_untracked().unwrap_or_default();
                        store::mutate(&store, replace_todo(&todos, updated));
                    }
                    Err(err) => {
                        // Failed save: surface it and drop back into editing
                        store::publish_error(&store, err);
                        set_mode.set(EditMode::Editing);
                    }
                }
            });
        }
    };

    let on_toggle_completion = move |_| {
        spawn_local(async move {
            let patch = TodoPatch {
                is_completed: Some(!is_completed),
                ..Default::default()
            };
            match api::edit_todo(config::API_URL, id, &patch).await {
                Ok(updated) => {
                    let todos = store.todos().get_untracked().unwrap_or_default();
                    store::mutate(&store, replace_todo(&todos, updated));
                }
                Err(err) => store::publish_error(&store, err),
            }
        });
    };

    let on_delete = move |_| {
        spawn_local(async move {
            match api::delete_todo(config::API_URL, id).await {
                Ok(_deleted) => {
                    let todos = store.todos().get_untracked().unwrap_or_default();
                    store::mutate(&store, remove_todo(&todos, id));
                }
                Err(err) => store::publish_error(&store, err),
            }
        });
    };

    view! {
        <li class=move || if is_completed { "todo-row completed" } else { "todo-row" }>
            <input type="checkbox" checked=is_completed on:change=on_toggle_completion />

            <Show
                when=move || mode.get() == EditMode::Editing
                fallback=move || view! { <span class="todo-title">{title.clone()}</span> }
            >
                <input
                    class="edit-input"
                    type="text"
                    prop:value=move || draft.get()
                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                />
            </Show>

            <button class="edit-btn" on:click=on_edit_or_save>
                {move || if mode.get() == EditMode::Editing { "Save" } else { "Edit" }}
            </button>
            <button class="delete-btn" on:click=on_delete>"×"</button>
        </li>
    }
}
