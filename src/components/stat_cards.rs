//! Stat Cards Component
//!
//! Summary row: product count, total asset value, low-stock count.
//! All three are derived from the item snapshot on every render.

use leptos::prelude::*;

use crate::format::format_rupiah;
use crate::stats;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn StatCards() -> impl IntoView {
    let store = use_app_store();

    let total_produk = move || store.items().read().len();
    let nilai_aset = move || format_rupiah(stats::total_asset_value(store.items().read().as_slice()));
    let stok_kritis = move || stats::low_stock_count(store.items().read().as_slice());

    view! {
        <div class="stat-cards">
            <div class="stat-card">
                <p class="stat-label">"Total Produk"</p>
                <h3 class="stat-value">{total_produk}</h3>
            </div>
            <div class="stat-card">
                <p class="stat-label">"Nilai Aset"</p>
                <h3 class="stat-value">{nilai_aset}</h3>
            </div>
            <div class=move || {
                if stok_kritis() > 0 { "stat-card critical" } else { "stat-card" }
            }>
                <p class="stat-label">"Stok Kritis"</p>
                <h3 class="stat-value">{move || format!("{} Item", stok_kritis())}</h3>
            </div>
        </div>
    }
}
