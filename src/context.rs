//! Application Context
//!
//! Shared signals provided via Leptos Context API.

use leptos::prelude::*;

use crate::models::Session;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Active session, None while logged out
    pub session: RwSignal<Option<Session>>,
    /// Trigger to re-fetch items and logs from the backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to re-fetch items and logs from the backend - write
    set_reload_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(
        session: RwSignal<Option<Session>>,
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            session,
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
        }
    }

    /// Trigger a refresh of items and logs. Required after every
    /// successful mutation; the mutation response itself is never
    /// treated as authoritative.
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }
}
