//! Navbar Component
//!
//! Top bar with the store name and the logout entry point.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn Navbar(#[prop(into)] on_logout_request: Callback<()>) -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let nama_toko = move || {
        ctx.session
            .with(|s| s.as_ref().map(|s| s.user.nama_toko.clone()))
            .unwrap_or_default()
    };

    view! {
        <nav class="navbar">
            <div class="navbar-brand">"VENTO GUDANG"</div>
            <div class="navbar-right">
                <span class="store-name">{nama_toko}</span>
                <button class="logout-btn" on:click=move |_| on_logout_request.run(())>
                    "Keluar"
                </button>
            </div>
        </nav>
    }
}
