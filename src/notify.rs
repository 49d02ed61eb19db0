//! Toast Notifications
//!
//! Small notification service provided via context. Every failure the
//! user should see goes through here as one generic message; toasts
//! auto-dismiss except while marked loading.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long a toast stays on screen
const TOAST_MS: u32 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToastKind {
    Success,
    Error,
    Loading,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

/// Toast list plus id counter, cheap to copy into event handlers
#[derive(Clone, Copy)]
pub struct Toasts {
    list: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u32>,
}

impl Toasts {
    fn new() -> Self {
        Self {
            list: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    pub fn entries(&self) -> ReadSignal<Vec<Toast>> {
        self.list.read_only()
    }

    fn push(&self, kind: ToastKind, message: String) -> u32 {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.list.update(|list| list.push(Toast { id, kind, message }));
        id
    }

    fn dismiss_later(&self, id: u32) {
        let list = self.list;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_MS).await;
            list.update(|l| l.retain(|t| t.id != id));
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        let id = self.push(ToastKind::Success, message.into());
        self.dismiss_later(id);
    }

    pub fn error(&self, message: impl Into<String>) {
        let id = self.push(ToastKind::Error, message.into());
        self.dismiss_later(id);
    }

    /// Show a toast that stays until resolved, for in-flight requests
    pub fn loading(&self, message: impl Into<String>) -> u32 {
        self.push(ToastKind::Loading, message.into())
    }

    /// Replace a loading toast in place with its outcome
    pub fn resolve(&self, id: u32, kind: ToastKind, message: impl Into<String>) {
        let message = message.into();
        self.list.update(|list| {
            if let Some(toast) = list.iter_mut().find(|t| t.id == id) {
                toast.kind = kind;
                toast.message = message;
            }
        });
        self.dismiss_later(id);
    }
}

pub fn provide_toasts() {
    provide_context(Toasts::new());
}

pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}
