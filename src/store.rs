//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The item
//! and log collections are whole-sale replaced on every re-fetch; the
//! aggregates the dashboard shows are derived in `stats`, not kept
//! here.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::form::ItemForm;
use crate::models::{Item, KategoriFilter, LogEntry};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Last item snapshot fetched from the backend
    pub items: Vec<Item>,
    /// Last activity log snapshot, newest first
    pub logs: Vec<LogEntry>,
    /// Live search term over item names
    pub search_term: String,
    /// Active category filter chip
    pub filter_kategori: KategoriFilter,
    /// Create/edit form state
    pub form: ItemForm,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Drop everything back to the initial state. Used on logout so the
/// next login starts from a clean slate.
pub fn store_reset(store: &AppStore) {
    store.items().set(Vec::new());
    store.logs().set(Vec::new());
    store.search_term().set(String::new());
    store.filter_kategori().set(KategoriFilter::Semua);
    store.form().set(ItemForm::default());
}
