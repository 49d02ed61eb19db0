//! Login Screen Component
//!
//! Full-page login form shown while no session is active.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;
use crate::notify::{use_toasts, ToastKind};
use crate::session::SessionStore;

#[component]
pub fn LoginScreen() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let session_store = expect_context::<SessionStore>();
    let toasts = use_toasts();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (show_password, set_show_password) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let username = username.get();
        let password = password.get();

        spawn_local(async move {
            let loading = toasts.loading("Masuk...");
            match api::login(&username, &password).await {
                Ok(session) => {
                    session_store.persist(&session);
                    toasts.resolve(
                        loading,
                        ToastKind::Success,
                        format!("Halo, {}", session.user.nama_toko),
                    );
                    // Activating the session kicks off the item/log fetch
                    ctx.session.set(Some(session));
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[AUTH] login: {err}").into());
                    toasts.resolve(loading, ToastKind::Error, "Gagal Login!");
                }
            }
        });
    };

    view! {
        <div class="login-screen">
            <div class="login-card">
                <div class="login-header">
                    <h1>"VENTO"</h1>
                    <p>"Sistem Gudang Profesional"</p>
                </div>
                <form class="login-form" on:submit=on_submit>
                    <input
                        type="text"
                        placeholder="Username"
                        required
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                    />
                    <div class="password-field">
                        <input
                            type=move || if show_password.get() { "text" } else { "password" }
                            placeholder="Password"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                        <button
                            type="button"
                            class="password-toggle"
                            on:click=move |_| set_show_password.update(|v| *v = !*v)
                        >
                            {move || if show_password.get() { "Sembunyikan" } else { "Lihat" }}
                        </button>
                    </div>
                    <button type="submit" class="login-submit">"Masuk ke Vento"</button>
                </form>
            </div>
        </div>
    }
}
