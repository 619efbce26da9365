//! To-Do List App
//!
//! Single-column layout: creation form, error banner, task list.

use leptos::prelude::*;

use crate::components::{NewTodoForm, TodoItem};
use crate::store::{use_todos, TodoCacheStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = use_todos();

    let todos = move || store.todos().get().unwrap_or_default();

    view! {
        <div class="todo-app">
            <h1>"To-Do List"</h1>

            <NewTodoForm />

            {move || store.error().get().map(|err| view! {
                <div class="error-banner">
                    <span>{err.to_string()}</span>
                    <button on:click=move |_| store.error().set(None)>"×"</button>
                </div>
            })}

            <Show when=move || store.is_loading().get() && store.todos().get().is_none()>
                <p class="loading">"Loading..."</p>
            </Show>

            // Rows are keyed by content so an in-place title or completion
            // change re-renders the row
            <ul class="todo-list">
                <For
                    each=todos
                    key=|todo| (todo.id, todo.title.clone(), todo.is_completed)
                    children=move |todo| view! { <TodoItem todo=todo /> }
                />
            </ul>

            <p class="todo-count">{move || format!("{} tasks", todos().len())}</p>
        </div>
    }
}
