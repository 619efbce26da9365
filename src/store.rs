//! Todo Collection Cache
//!
//! A process-wide keyed store mapping a collection URL to its cached value
//! plus loading/error status. Uses Leptos reactive_stores for field-level
//! reactivity. Reads go through the cache; mutations bypass it and push the
//! server's latest answer back in via [`mutate`].

use std::cell::RefCell;
use std::collections::HashMap;

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::api::{self, ApiError};
use crate::config;
use crate::models::Todo;

/// Cached projection of the remote collection
#[derive(Clone, Debug, Default, Store)]
pub struct TodoCache {
    /// Last-known-good collection; None before the first successful fetch
    pub todos: Option<Vec<Todo>>,
    /// True while a fetch or revalidation is in flight
    pub is_loading: bool,
    /// Failure of the most recent fetch or mutation
    pub error: Option<ApiError>,
}

/// Type alias for the store handle
pub type TodoStore = Store<TodoCache>;

thread_local! {
    static REGISTRY: RefCell<HashMap<String, TodoStore>> = RefCell::new(HashMap::new());
}

/// Focus-triggered revalidations closer together than this are dropped
const FOCUS_THROTTLE_MS: f64 = 5_000.0;

/// Cache handle for the configured collection URL.
///
/// The first caller for a key creates the entry, kicks off the initial list
/// request, and installs the focus revalidation listener; later callers get
/// the same store back.
pub fn use_todos() -> TodoStore {
    let key = format!("{}/allTodos", config::API_URL);
    REGISTRY.with(|registry| {
        if let Some(store) = registry.borrow().get(&key) {
            return *store;
        }
        let store = Store::new(TodoCache::default());
        registry.borrow_mut().insert(key.clone(), store);
        revalidate(store, key.clone());
        install_focus_revalidation(store, key);
        store
    })
}

// ========================
// Store Helper Functions
// ========================

/// Replace the cached collection without touching the network.
///
/// The caller passes an already-correct full collection reflecting the
/// server's latest response; loading settles and any stale error clears.
pub fn mutate(store: &TodoStore, todos: Vec<Todo>) {
    store.todos().set(Some(todos));
    store.is_loading().set(false);
    store.error().set(None);
}

/// Publish a failed mutation into the entry; the cached value stays as-is
pub fn publish_error(store: &TodoStore, error: ApiError) {
    store.error().set(Some(error));
}

// ========================
// Revalidation
// ========================

fn revalidate(store: TodoStore, key: String) {
    store.is_loading().set(true);
    spawn_local(async move {
        match api::list_todos(&key).await {
            Ok(todos) => {
                web_sys::console::log_1(&format!("[CACHE] loaded {} todos", todos.len()).into());
                store.todos().set(Some(todos));
                store.error().set(None);
            }
            Err(err) => {
                web_sys::console::log_1(&format!("[CACHE] load failed: {err}").into());
                store.error().set(Some(err));
            }
        }
        store.is_loading().set(false);
    });
}

fn install_focus_revalidation(store: TodoStore, key: String) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let mut last_run = f64::MIN;
    let listener = Closure::<dyn FnMut()>::new(move || {
        let now = js_sys::Date::now();
        if now - last_run < FOCUS_THROTTLE_MS {
            return;
        }
        last_run = now;
        revalidate(store, key.clone());
    });
    if window
        .add_event_listener_with_callback("focus", listener.as_ref().unchecked_ref())
        .is_ok()
    {
        // Entries live for the whole session, so the listener does too
        listener.forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_todo(id: u32, title: &str) -> Todo {
        Todo {
            id,
            title: title.to_string(),
            is_completed: false,
        }
    }

    #[test]
    fn test_mutate_replaces_value_and_settles() {
        let store = Store::new(TodoCache {
            todos: None,
            is_loading: true,
            error: Some(ApiError::Status(500)),
        });

        mutate(&store, vec![make_todo(1, "a"), make_todo(2, "b")]);

        let todos = store.todos().get_untracked().unwrap();
        assert_eq!(todos.len(), 2);
        assert!(!store.is_loading().get_untracked());
        assert!(store.error().get_untracked().is_none());
    }

    #[test]
    fn test_publish_error_keeps_cached_value() {
        let store = Store::new(TodoCache {
            todos: Some(vec![make_todo(1, "a")]),
            is_loading: false,
            error: None,
        });

        publish_error(&store, ApiError::Status(404));

        assert_eq!(store.todos().get_untracked().unwrap().len(), 1);
        assert_eq!(store.error().get_untracked(), Some(ApiError::Status(404)));
    }
}
