//! Repair-shop customer portal, browser side
//!
//! - `startup`: preconditions checked before anything is mounted
//! - `controller`: portal state shared through context, effect runner
//! - `components`: the four views and the outlet switching between them
//! - `web`: thin wrappers over browser APIs

macro_rules! log_info {
    ($($t:tt)*) => (web_sys::console::log_1(&format!($($t)*).into()))
}

macro_rules! log_warn {
    ($($t:tt)*) => (web_sys::console::warn_1(&format!($($t)*).into()))
}

macro_rules! log_error {
    ($($t:tt)*) => (web_sys::console::error_1(&format!($($t)*).into()))
}

mod controller;
pub mod startup;
mod components {
    pub mod dashboard;
    pub mod login;
    pub mod outlet;
    pub mod register;
    pub mod vehicle_detail;
}

// Thin wrappers over browser APIs, kept in one place so nothing else
// touches web_sys directly.
pub(crate) mod web {
    mod http;
    mod notify;
    mod storage;
    mod timer;

    pub use http::FetchClient;
    pub use notify::alert;
    pub use storage::LocalStorage;
    pub use timer::BrowserScheduler;
}

use crate::components::outlet::ViewOutlet;
use crate::controller::PortalContext;
use crate::startup::Mount;
use leptos::prelude::*;
use tallerportal::PortalConfig;

#[component]
pub fn App(config: PortalConfig) -> impl IntoView {
    let portal = PortalContext::new(config);
    provide_context(portal);

    // One-off, decides between login and dashboard
    portal.check_session();

    view! {
        <main class="min-h-screen bg-base-200 font-sans">
            <ViewOutlet />
        </main>
    }
}

/// Check the page, then mount the portal or render the startup failure.
pub fn run() {
    match startup::preflight() {
        Ok(Mount { root, config }) => {
            log_info!("[startup] mounting portal, api base {:?}", config.base_url);
            leptos::mount::mount_to(root, move || view! { <App config=config /> }).forget();
        }
        Err(e) => startup::report(&e),
    }
}
