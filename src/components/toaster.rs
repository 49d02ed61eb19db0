//! Toaster Component
//!
//! Renders the toast list from the notification service.

use leptos::prelude::*;

use crate::notify::{use_toasts, ToastKind};

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="toaster">
            <For
                each=move || toasts.entries().get()
                key=|toast| (toast.id, toast.kind, toast.message.clone())
                children=|toast| {
                    let kind_class = match toast.kind {
                        ToastKind::Success => "toast success",
                        ToastKind::Error => "toast error",
                        ToastKind::Loading => "toast loading",
                    };
                    view! { <div class=kind_class>{toast.message.clone()}</div> }
                }
            />
        </div>
    }
}
