//! Wire and storage DTOs for users and sessions.
//!
//! DESIGN
//! ======
//! Field names follow the backend's JSON (`_id`, camelCase). The same `User`
//! shape is what gets written to the `userData` storage key, so serde must
//! round-trip it without loss.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A chat user profile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Backend identifier.
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    /// Public handle shown to other users.
    pub user_name: String,
    pub first_name: String,
    pub last_name: String,
}

impl User {
    /// "First Last", falling back to the handle when both names are blank.
    pub fn full_name(&self) -> String {
        let full = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let full = full.trim();
        if full.is_empty() { self.user_name.clone() } else { full.to_owned() }
    }
}

/// Payload returned by a successful sign-in or join.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserData {
    pub user: User,
    pub token: String,
}

/// Body of `POST /users/signin`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /users/join`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinRequest {
    pub email: String,
    pub user_name: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}

/// Error body the backend sends alongside non-2xx statuses.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
