//! UI Components
//!
//! Reusable Leptos components.

mod new_todo_form;
mod todo_item;

pub use new_todo_form::NewTodoForm;
pub use todo_item::TodoItem;
