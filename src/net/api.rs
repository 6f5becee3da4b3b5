//! REST helpers for establishing a session with the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Elsewhere: calls return [`ClientError::Unavailable`] since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx answers become [`ClientError::Rejected`] carrying the server's
//! `message` when it sent one, so pages can show it verbatim.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{JoinRequest, SignInRequest, UserData};
use crate::config::ClientConfig;
use crate::error::ClientError;

pub const SIGN_IN_PATH: &str = "/users/signin";
pub const JOIN_PATH: &str = "/users/join";
pub const MIN_PASSWORD_LEN: usize = 8;

/// Exchange credentials for a session via `POST /users/signin`.
///
/// # Errors
///
/// Returns an error if the request fails or the server rejects it.
pub async fn sign_in(config: &ClientConfig, request: &SignInRequest) -> Result<UserData, ClientError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(&config.endpoint(SIGN_IN_PATH), request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, request);
        Err(ClientError::Unavailable)
    }
}

/// Register a new account and receive its first session via `POST /users/join`.
///
/// # Errors
///
/// Returns an error if the request fails or the server rejects it.
pub async fn join(config: &ClientConfig, request: &JoinRequest) -> Result<UserData, ClientError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(&config.endpoint(JOIN_PATH), request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, request);
        Err(ClientError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
async fn post_json<B, T>(url: &str, body: &B) -> Result<T, ClientError>
where
    B: serde::Serialize,
    T: serde::de::DeserializeOwned,
{
    let resp = gloo_net::http::Request::post(url).json(body)?.send().await?;
    if !resp.ok() {
        let status = resp.status();
        let fallback = resp.status_text();
        let message = resp
            .json::<super::types::ApiErrorBody>()
            .await
            .ok()
            .and_then(|b| b.message)
            .unwrap_or(fallback);
        return Err(ClientError::Rejected { status, message });
    }
    Ok(resp.json::<T>().await?)
}

/// Trim and check sign-in form input.
///
/// # Errors
///
/// Returns [`ClientError::Validation`] with a user-facing message.
pub fn validate_sign_in(email: &str, password: &str) -> Result<SignInRequest, ClientError> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(ClientError::Validation("Enter your email and password."));
    }
    if !looks_like_email(email) {
        return Err(ClientError::Validation("Enter a valid email address."));
    }
    Ok(SignInRequest { email: email.to_owned(), password: password.to_owned() })
}

/// Raw join form fields as typed by the user.
#[derive(Clone, Debug, Default)]
pub struct JoinForm {
    pub email: String,
    pub user_name: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub confirm_password: String,
}

/// Trim and check join form input. Passwords are never trimmed.
///
/// # Errors
///
/// Returns [`ClientError::Validation`] with a user-facing message.
pub fn validate_join(form: &JoinForm) -> Result<JoinRequest, ClientError> {
    let email = form.email.trim();
    let user_name = form.user_name.trim();
    let first_name = form.first_name.trim();
    let last_name = form.last_name.trim();
    if [email, user_name, first_name, last_name].iter().any(|v| v.is_empty()) || form.password.is_empty() {
        return Err(ClientError::Validation("All fields are required."));
    }
    if !looks_like_email(email) {
        return Err(ClientError::Validation("Enter a valid email address."));
    }
    if user_name.chars().any(char::is_whitespace) {
        return Err(ClientError::Validation("User name cannot contain spaces."));
    }
    if form.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ClientError::Validation("Password must be at least 8 characters."));
    }
    if form.password != form.confirm_password {
        return Err(ClientError::Validation("Passwords do not match."));
    }
    Ok(JoinRequest {
        email: email.to_owned(),
        user_name: user_name.to_owned(),
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        password: form.password.clone(),
    })
}

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.starts_with('.'),
        None => false,
    }
}
