use crate::routes::routes::AppRoutes;
use crate::shared::config::{load_config, AppConfig};
use crate::shared::notifications::{Notifications, Toaster};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config().unwrap_or_else(|e| {
        log::error!("Embedded config is invalid, using defaults: {}", e);
        AppConfig::default()
    });
    let toast_timeout_ms = config.ui.toast_timeout_ms;

    provide_context(config);
    // App-wide toast channel; pages push, Toaster renders.
    provide_context(Notifications::new());

    view! {
        <AppRoutes />
        <Toaster timeout_ms=toast_timeout_ms />
    }
}
