//! Item Table Component
//!
//! The filtered, newest-first item list with edit/delete actions and
//! the two empty states (no match vs. empty warehouse).

use leptos::prelude::*;

use crate::format::{format_nama, format_rupiah};
use crate::stats;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ItemTable(#[prop(into)] on_delete: Callback<u32>) -> impl IntoView {
    let store = use_app_store();

    let visible = move || {
        stats::visible_items(
            store.items().read().as_slice(),
            store.search_term().read().as_str(),
            store.filter_kategori().get(),
        )
    };

    view! {
        <div class="item-table-card">
            <table class="item-table">
                <thead>
                    <tr>
                        <th>"Informasi Produk"</th>
                        <th class="manage-col">"Kelola"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=visible
                        key=|item| {
                            // Tuple of every field so in-place edits re-render the row
                            (
                                item.id,
                                item.nama.clone(),
                                item.harga.to_bits(),
                                item.stok,
                                item.kategori,
                                item.satuan.clone(),
                            )
                        }
                        children=move |item| {
                            let id = item.id;
                            let low = item.stok <= stats::LOW_STOCK_THRESHOLD;
                            let display_nama = format_nama(&item.nama);
                            let stok_label = format!("{} {}", item.stok, item.satuan);
                            let harga_label = format_rupiah(item.harga);
                            let kategori_label = item.kategori.as_str();
                            let edit_item = item.clone();

                            view! {
                                <tr class="item-row">
                                    <td class="item-info">
                                        <div class="item-nama">{display_nama}</div>
                                        <div class="item-meta">
                                            <span class="kategori-badge">{kategori_label}</span>
                                            <span class=if low { "stok low" } else { "stok" }>
                                                {stok_label}
                                            </span>
                                            <span class="harga">{harga_label}</span>
                                        </div>
                                    </td>
                                    <td class="item-actions">
                                        <button
                                            class="edit-btn"
                                            on:click=move |_| {
                                                store.form().write().start_edit(&edit_item);
                                                // Bring the form into view
                                                if let Some(window) = web_sys::window() {
                                                    window.scroll_to_with_x_and_y(0.0, 0.0);
                                                }
                                            }
                                        >
                                            "Ubah"
                                        </button>
                                        <button class="delete-btn" on:click=move |_| on_delete.run(id)>
                                            "Hapus"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            <Show when=move || visible().is_empty()>
                <div class="empty-state">
                    {move || {
                        if store.search_term().read().is_empty() {
                            "Gudang Vento Kosong"
                        } else {
                            "Barang tidak ditemukan"
                        }
                    }}
                </div>
            </Show>
        </div>
    }
}
