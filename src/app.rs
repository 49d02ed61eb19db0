//! Vento Frontend App
//!
//! Login gate plus the dashboard layout. Holds the session lifecycle
//! and the refresh effect every mutation relies on.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{
    ActivityLog, ConfirmModal, FilterBar, ItemFormPanel, ItemTable, LoginScreen, Navbar,
    StatCards, Toaster,
};
use crate::context::AppContext;
use crate::notify;
use crate::session::SessionStore;
use crate::store::{store_reset, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let session_store = SessionStore::new();
    // A persisted session puts us straight on the dashboard; the token
    // is not validated here, a stale one just fails the first fetch.
    let session = RwSignal::new(session_store.restore());
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let ctx = AppContext::new(session, (reload_trigger, set_reload_trigger));

    let store = Store::new(AppState::default());
    provide_context(store);
    provide_context(ctx);
    provide_context(session_store);
    notify::provide_toasts();
    let toasts = notify::use_toasts();

    // Re-fetch items and logs whenever a session becomes active or a
    // mutation asks for a refresh. Both collections are replaced
    // whole-sale; read failures stay on the console and the dashboard
    // keeps whatever snapshot it had.
    Effect::new(move |_| {
        let _ = reload_trigger.get();
        let Some(session) = session.get() else { return };
        spawn_local(async move {
            match api::list_items(&session.token).await {
                Ok(items) => store.items().set(items),
                Err(err) => {
                    web_sys::console::error_1(&format!("[API] memuat barang: {err}").into());
                }
            }
            match api::list_logs(&session.token).await {
                Ok(logs) => store.logs().set(logs),
                Err(err) => {
                    web_sys::console::error_1(&format!("[API] memuat log: {err}").into());
                }
            }
        });
    });

    // Confirmation modals
    let show_logout = RwSignal::new(false);
    let delete_target = RwSignal::new(None::<u32>);

    let on_logout_confirm = Callback::new(move |_| {
        session_store.clear();
        session.set(None);
        store_reset(&store);
        show_logout.set(false);
    });

    let on_delete_confirm = Callback::new(move |_| {
        let Some(id) = delete_target.get() else { return };
        let Some(session) = session.get() else { return };
        delete_target.set(None);
        spawn_local(async move {
            match api::delete_item(&session.token, id).await {
                Ok(()) => {
                    toasts.success("Dihapus");
                    ctx.reload();
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[API] hapus barang: {err}").into());
                    toasts.error("Gagal");
                }
            }
        });
    });

    view! {
        <Show
            when=move || session.get().is_some()
            fallback=|| view! { <LoginScreen /> }
        >
            <div class="dashboard">
                <Navbar on_logout_request=Callback::new(move |_| show_logout.set(true)) />
                <main class="dashboard-main">
                    <StatCards />
                    <div class="dashboard-grid">
                        <ItemFormPanel />
                        <section class="inventory-panel">
                            <FilterBar />
                            <ItemTable on_delete=Callback::new(move |id| {
                                delete_target.set(Some(id))
                            }) />
                            <ActivityLog />
                        </section>
                    </div>
                </main>
            </div>
        </Show>

        <Show when=move || show_logout.get()>
            <ConfirmModal
                title="Keluar Sesi?"
                message="Sesi akan ditutup pada peramban ini."
                confirm_label="Ya, Keluar"
                on_confirm=on_logout_confirm
                on_cancel=Callback::new(move |_| show_logout.set(false))
            />
        </Show>

        <Show when=move || delete_target.get().is_some()>
            <ConfirmModal
                title="Hapus Barang?"
                message="Data akan hilang permanen dari gudang."
                confirm_label="Hapus"
                on_confirm=on_delete_confirm
                on_cancel=Callback::new(move |_| delete_target.set(None))
            />
        </Show>

        <Toaster />
    }
}
