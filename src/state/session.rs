//! Signed-in user identity and session token, mirrored into key-value storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides a `RwSignal<SessionState>` through context and calls
//! [`SessionState::initialize_from_storage`] once on mount. Pages mutate it
//! through [`SessionState::set_session`] and [`SessionState::logout`]. The
//! route guard never reads this struct; it checks [`has_persisted_token`].
//!
//! ERROR HANDLING
//! ==============
//! Malformed persisted data is the only failure that changes state: the
//! session is dropped everywhere and the user is treated as signed out.
//! Storage write failures are logged and the in-memory state stays
//! authoritative for the current page.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::error::ClientError;
use crate::net::types::{User, UserData};
use crate::storage::KeyValueStore;

/// Storage key holding the JSON-serialized [`User`].
pub const USER_DATA_KEY: &str = "userData";
/// Storage key holding the bare user id.
pub const USER_ID_KEY: &str = "userId";
/// Storage key holding the session token.
pub const TOKEN_KEY: &str = "token";

/// In-memory session for the current browser tab.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<User>,
    pub token: Option<String>,
    pub authenticated: bool,
}

impl SessionState {
    /// Id of the signed-in user, or `""` when signed out.
    pub fn user_id(&self) -> &str {
        self.user.as_ref().map_or("", |u| u.id.as_str())
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Name for shell chrome; empty when signed out.
    pub fn display_name(&self) -> String {
        self.user.as_ref().map(User::full_name).unwrap_or_default()
    }

    /// Adopt a freshly issued session and write it through to `store`.
    pub fn set_session(&mut self, data: UserData, store: &impl KeyValueStore) {
        if let Err(e) = persist(&data, store) {
            log::warn!("session not persisted: {e}");
        }
        log::info!("signed in as {}", data.user.user_name);
        self.user = Some(data.user);
        self.token = Some(data.token);
        self.authenticated = true;
    }

    /// Restore the session persisted by an earlier page load.
    ///
    /// Returns `true` if a session was restored. When either key is absent
    /// the current state is left untouched. Malformed user data triggers a
    /// full [`logout`](Self::logout).
    pub fn initialize_from_storage(&mut self, store: &impl KeyValueStore) -> bool {
        match read_persisted(store) {
            Ok(Some((user, token))) => {
                log::debug!("restored session for {}", user.user_name);
                self.user = Some(user);
                self.token = Some(token);
                self.authenticated = true;
                true
            }
            Ok(None) => false,
            Err(e) => {
                log::error!("discarding persisted session: {e}");
                self.logout(store);
                false
            }
        }
    }

    /// Clear the session in memory and in `store`.
    pub fn logout(&mut self, store: &impl KeyValueStore) {
        self.reset();
        for key in [USER_DATA_KEY, USER_ID_KEY, TOKEN_KEY] {
            if let Err(e) = store.remove_item(key) {
                log::warn!("failed to clear {key}: {e}");
            }
        }
    }

    /// Clear the in-memory session only; persisted keys survive.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Whether `store` holds a non-empty session token.
pub fn has_persisted_token(store: &impl KeyValueStore) -> bool {
    store.get_item(TOKEN_KEY).is_some_and(|t| !t.is_empty())
}

fn persist(data: &UserData, store: &impl KeyValueStore) -> Result<(), ClientError> {
    let user_json = serde_json::to_string(&data.user).map_err(ClientError::MalformedSession)?;
    store.set_item(USER_DATA_KEY, &user_json)?;
    store.set_item(USER_ID_KEY, &data.user.id)?;
    store.set_item(TOKEN_KEY, &data.token)?;
    Ok(())
}

/// Empty strings count as absent, matching how the keys are cleared.
fn read_persisted(store: &impl KeyValueStore) -> Result<Option<(User, String)>, ClientError> {
    let token = store.get_item(TOKEN_KEY).filter(|t| !t.is_empty());
    let user_json = store.get_item(USER_DATA_KEY).filter(|u| !u.is_empty());
    let (Some(token), Some(user_json)) = (token, user_json) else {
        return Ok(None);
    };
    let user = serde_json::from_str::<User>(&user_json).map_err(ClientError::MalformedSession)?;
    Ok(Some((user, token)))
}
