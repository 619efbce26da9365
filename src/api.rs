//! REST API Client
//!
//! Async wrappers over the browser fetch primitive, one per remote operation.
//! The server owns the data; every call returns the server's view of the
//! affected record(s).

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::models::Todo;

/// Failure of a single API call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The fetch itself rejected before a response arrived
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status
    #[error("server responded with status {0}")]
    Status(u16),
    /// The body was not the JSON we expected
    #[error("invalid JSON: {0}")]
    Decode(String),
}

// ========================
// Request Body Structs
// ========================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTodo<'a> {
    pub title: &'a str,
    pub is_completed: bool,
}

/// Partial update; absent fields are left untouched by the server
#[derive(Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TodoPatch<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_completed: Option<bool>,
}

// ========================
// Remote Operations
// ========================

/// `GET {url}`: the full collection, in server order
pub async fn list_todos(url: &str) -> Result<Vec<Todo>, ApiError> {
    fetch_json("GET", url, None).await
}

/// `POST {base}/createTodo`: returns the created record with its assigned id
pub async fn create_todo(base: &str, title: &str) -> Result<Todo, ApiError> {
    let body = to_body(&NewTodo {
        title,
        is_completed: false,
    })?;
    fetch_json("POST", &format!("{base}/createTodo"), Some(body)).await
}

/// `PUT {base}/editTodo/{id}`: returns the full updated record
pub async fn edit_todo(base: &str, id: u32, patch: &TodoPatch<'_>) -> Result<Todo, ApiError> {
    let body = to_body(patch)?;
    fetch_json("PUT", &format!("{base}/editTodo/{id}"), Some(body)).await
}

/// `DELETE {base}/deleteTodo/{id}`: returns the deleted record
pub async fn delete_todo(base: &str, id: u32) -> Result<Todo, ApiError> {
    fetch_json("DELETE", &format!("{base}/deleteTodo/{id}"), None).await
}

// ========================
// Fetch Plumbing
// ========================

fn to_body<T: Serialize>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string(value).map_err(|err| ApiError::Decode(err.to_string()))
}

async fn fetch_json<T: DeserializeOwned>(
    method: &str,
    url: &str,
    body: Option<String>,
) -> Result<T, ApiError> {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);
    if let Some(body) = body {
        opts.set_body(&JsValue::from_str(&body));
    }

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|err| ApiError::Network(js_to_string(err)))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|err| ApiError::Network(js_to_string(err)))?;

    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".into()))?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|err| ApiError::Network(js_to_string(err)))?;
    let response: Response = response
        .dyn_into()
        .map_err(|err| ApiError::Network(js_to_string(err)))?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    let json = response
        .json()
        .map_err(|err| ApiError::Decode(js_to_string(err)))?;
    let json = JsFuture::from(json)
        .await
        .map_err(|err| ApiError::Decode(js_to_string(err)))?;
    serde_wasm_bindgen::from_value(json).map_err(|err| ApiError::Decode(err.to_string()))
}

fn js_to_string(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_body_shape() {
        let body = serde_json::to_value(NewTodo {
            title: "Buy milk",
            is_completed: false,
        })
        .unwrap();
        assert_eq!(body, json!({"title": "Buy milk", "isCompleted": false}));
    }

    #[test]
    fn test_patch_carries_only_set_fields() {
        let title_only = serde_json::to_value(TodoPatch {
            title: Some("B"),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(title_only, json!({"title": "B"}));

        let completion_only = serde_json::to_value(TodoPatch {
            is_completed: Some(true),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(completion_only, json!({"isCompleted": true}));
    }

    #[test]
    fn test_error_messages_name_the_category() {
        assert_eq!(
            ApiError::Status(500).to_string(),
            "server responded with status 500"
        );
        assert_eq!(
            ApiError::Network("failed to fetch".into()).to_string(),
            "network error: failed to fetch"
        );
    }
}
