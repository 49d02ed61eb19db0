//! Confirm Modal Component
//!
//! Reusable blocking confirmation dialog used by logout and delete.

use leptos::prelude::*;

#[component]
pub fn ConfirmModal(
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    #[prop(into)] confirm_label: String,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="modal-backdrop">
            <div class="modal-card">
                <h3 class="modal-title">{title}</h3>
                <p class="modal-message">{message}</p>
                <div class="modal-actions">
                    <button class="modal-cancel" on:click=move |_| on_cancel.run(())>
                        "Batal"
                    </button>
                    <button class="modal-confirm" on:click=move |_| on_confirm.run(())>
                        {confirm_label}
                    </button>
                </div>
            </div>
        </div>
    }
}
