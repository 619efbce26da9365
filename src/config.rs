//! API Endpoint Configuration

/// Base URL of the remote collection resource.
///
/// Override at build time with the `TODO_API_URL` environment variable.
pub const API_URL: &str = match option_env!("TODO_API_URL") {
    Some(url) => url,
    None => "http://localhost:8080",
};
