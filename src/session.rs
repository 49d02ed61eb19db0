//! Session Store
//!
//! Persists the auth token and user profile in localStorage so a
//! reload lands back on the dashboard. No token validity check happens
//! here; a stale token only surfaces when a later API call fails.

use web_sys::Storage;

use crate::models::Session;

const TOKEN_KEY: &str = "vento_token";
const USER_KEY: &str = "vento_user";

/// Handle on the browser's localStorage for session persistence,
/// created at startup and passed to consumers via context. Holds no
/// state itself; localStorage is looked up per call so the handle
/// stays freely copyable into callbacks.
#[derive(Clone, Copy, Default)]
pub struct SessionStore;

impl SessionStore {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Option<Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }

    /// Read back a persisted session. Both keys must be present and the
    /// profile must parse, otherwise the app starts unauthenticated.
    pub fn restore(&self) -> Option<Session> {
        let storage = self.storage()?;
        let token = storage.get_item(TOKEN_KEY).ok()??;
        let user_json = storage.get_item(USER_KEY).ok()??;
        let user = serde_json::from_str(&user_json).ok()?;
        Some(Session { token, user })
    }

    /// Persist a fresh login. Storage failures (e.g. private browsing)
    /// only cost the user a re-login after the next reload.
    pub fn persist(&self, session: &Session) {
        let Some(storage) = self.storage() else {
            return;
        };
        let _ = storage.set_item(TOKEN_KEY, &session.token);
        if let Ok(user_json) = serde_json::to_string(&session.user) {
            let _ = storage.set_item(USER_KEY, &user_json);
        }
    }

    /// Clear all persisted session data unconditionally. A subsequent
    /// restore() finds nothing and the app starts unauthenticated.
    pub fn clear(&self) {
        if let Some(storage) = self.storage() {
            let _ = storage.clear();
        }
    }
}
