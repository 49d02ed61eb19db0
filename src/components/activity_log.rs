//! Activity Log Component
//!
//! The five most recent backend-computed log entries, newest first.

use leptos::prelude::*;

use crate::models::{LogAksi, LogEntry};
use crate::store::{use_app_store, AppStateStoreFields};

/// Entries shown in the panel
const RECENT_LOGS: usize = 5;

fn format_waktu(timestamp: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(timestamp) {
        Ok(dt) => dt.format("%d/%m/%Y %H.%M").to_string(),
        // Unparsable timestamp from an older backend: show the date part raw
        Err(_) => timestamp.chars().take(19).collect(),
    }
}

#[component]
pub fn ActivityLog() -> impl IntoView {
    let store = use_app_store();

    let recent = move || {
        store
            .logs()
            .get()
            .into_iter()
            .take(RECENT_LOGS)
            .collect::<Vec<LogEntry>>()
    };

    view! {
        <div class="activity-log">
            <h3 class="activity-title">"Riwayat Aktivitas"</h3>
            <div class="log-entries">
                <For
                    each=recent
                    key=|log| log.id
                    children=|log| {
                        let aksi_class = match log.aksi {
                            LogAksi::Tambah => "log-icon tambah",
                            LogAksi::Hapus => "log-icon hapus",
                            _ => "log-icon",
                        };
                        view! {
                            <div class="log-entry">
                                <span class=aksi_class></span>
                                <div class="log-body">
                                    <p class="log-rincian">{log.rincian.clone()}</p>
                                    <p class="log-waktu">{format_waktu(&log.created_at)}</p>
                                </div>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
