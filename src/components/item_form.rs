//! Item Form Component
//!
//! Create/edit form panel. The field state lives in the store
//! (`form::ItemForm`); this component renders it and drives the
//! create/update calls.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;
use crate::form::FormMode;
use crate::models::Kategori;
use crate::notify::use_toasts;
use crate::store::{use_app_store, AppStateStoreFields};

/// Categories offered by the form selector. "Lainnya" is filterable
/// but not selectable here, matching the backend's intake rules.
const FORM_KATEGORI: &[Kategori] = &[
    Kategori::Umum,
    Kategori::Sembako,
    Kategori::Elektronik,
    Kategori::Minuman,
];

#[component]
pub fn ItemFormPanel() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let store = use_app_store();
    let toasts = use_toasts();

    let is_editing = move || store.form().read().is_editing();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = store.form().get();
        let Some(draft) = form.draft() else { return };
        let Some(session) = ctx.session.get() else { return };

        spawn_local(async move {
            let result = match form.mode {
                FormMode::Editing(id) => api::update_item(&session.token, id, &draft)
                    .await
                    .map(|_| "Barang diperbarui"),
                FormMode::Creating => api::create_item(&session.token, &draft)
                    .await
                    .map(|_| "Barang ditambah"),
            };
            match result {
                Ok(message) => {
                    toasts.success(message);
                    store.form().write().reset();
                    ctx.reload();
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[API] simpan barang: {err}").into());
                    toasts.error("Gagal simpan.");
                }
            }
        });
    };

    view! {
        <div class=move || if is_editing() { "form-card editing" } else { "form-card" }>
            <h3 class="form-title">
                {move || if is_editing() { "Edit Barang" } else { "Barang Masuk" }}
            </h3>
            <form class="item-form" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Nama Barang"
                    required
                    prop:value=move || store.form().read().nama.clone()
                    on:input=move |ev| store.form().write().nama = event_target_value(&ev)
                />
                <input
                    type="number"
                    placeholder="Harga / Unit"
                    required
                    prop:value=move || store.form().read().harga.clone()
                    on:input=move |ev| store.form().write().harga = event_target_value(&ev)
                />
                <select
                    prop:value=move || store.form().read().kategori.as_str().to_string()
                    on:change=move |ev| {
                        store.form().write().kategori = Kategori::from_str(&event_target_value(&ev));
                    }
                >
                    {FORM_KATEGORI
                        .iter()
                        .map(|k| view! { <option value=k.as_str()>{k.as_str()}</option> })
                        .collect_view()}
                </select>
                <div class="form-row">
                    <input
                        type="number"
                        placeholder="Stok"
                        required
                        prop:value=move || store.form().read().stok.clone()
                        on:input=move |ev| store.form().write().stok = event_target_value(&ev)
                    />
                    <input
                        type="text"
                        placeholder="Satuan"
                        required
                        prop:value=move || store.form().read().satuan.clone()
                        on:input=move |ev| store.form().write().satuan = event_target_value(&ev)
                    />
                </div>
                <button type="submit" class="form-submit">"Simpan Barang"</button>
                <Show when=is_editing>
                    <button
                        type="button"
                        class="form-cancel"
                        on:click=move |_| store.form().write().reset()
                    >
                        "Batal"
                    </button>
                </Show>
            </form>
        </div>
    }
}
