//! Filter Bar Component
//!
//! Search input, export button, and the category filter chips.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::export::{self, ExportError};
use crate::models::{Kategori, KategoriFilter};
use crate::notify::use_toasts;
use crate::store::{use_app_store, AppStateStoreFields};

/// Filter chips. "Semua" plus every category, including "Lainnya"
/// which the form cannot assign but existing data may carry.
const FILTER_CHIPS: &[KategoriFilter] = &[
    KategoriFilter::Semua,
    KategoriFilter::Kategori(Kategori::Umum),
    KategoriFilter::Kategori(Kategori::Sembako),
    KategoriFilter::Kategori(Kategori::Elektronik),
    KategoriFilter::Kategori(Kategori::Minuman),
    KategoriFilter::Kategori(Kategori::Lainnya),
];

#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let store = use_app_store();
    let toasts = use_toasts();

    // Exports the whole collection, not the filtered view
    let on_export = move |_| {
        let items = store.items().get();
        let nama_toko = ctx
            .session
            .with(|s| s.as_ref().map(|s| s.user.nama_toko.clone()))
            .unwrap_or_default();
        match export::download_report(&items, &nama_toko) {
            Ok(()) => {}
            Err(ExportError::Empty) => toasts.error("Gudang kosong"),
            Err(err) => {
                web_sys::console::error_1(&format!("[EXPORT] {err}").into());
                toasts.error("Gagal ekspor");
            }
        }
    };

    view! {
        <div class="filter-bar">
            <div class="search-row">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Cari barang..."
                    prop:value=move || store.search_term().get()
                    on:input=move |ev| store.search_term().set(event_target_value(&ev))
                />
                <button class="export-btn" on:click=on_export>"Excel"</button>
            </div>
            <div class="filter-chips">
                {FILTER_CHIPS
                    .iter()
                    .map(|chip| {
                        let chip = *chip;
                        let is_active = move || store.filter_kategori().get() == chip;
                        view! {
                            <button
                                class=move || if is_active() { "chip active" } else { "chip" }
                                on:click=move |_| store.filter_kategori().set(chip)
                            >
                                {chip.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
