//! Startup preconditions
//!
//! The portal needs a window, a document and a `#root` element to mount
//! into. Each missing piece is reported as a typed error and rendered as a
//! static page instead of throwing.

use leptos::prelude::*;
use tallerportal::PortalConfig;
use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

pub const MOUNT_POINT_ID: &str = "root";
/// Optional override of the API origin, set on `<html>`.
const API_URL_ATTRIBUTE: &str = "data-api-url";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StartupError {
    #[error("no global window object")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("mount point #{0} not found")]
    MissingMountPoint(&'static str),
}

/// Everything `run` needs once the checks pass.
pub struct Mount {
    pub root: HtmlElement,
    pub config: PortalConfig,
}

pub fn preflight() -> Result<Mount, StartupError> {
    let window = web_sys::window().ok_or(StartupError::NoWindow)?;
    let document = window.document().ok_or(StartupError::NoDocument)?;

    let root = document
        .get_element_by_id(MOUNT_POINT_ID)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or(StartupError::MissingMountPoint(MOUNT_POINT_ID))?;

    Ok(Mount {
        root,
        config: resolve_config(&window, &document),
    })
}

/// API origin from `data-api-url`, falling back to the page origin.
fn resolve_config(window: &Window, document: &Document) -> PortalConfig {
    let configured = document
        .document_element()
        .and_then(|el| el.get_attribute(API_URL_ATTRIBUTE))
        .filter(|url| !url.trim().is_empty());

    match configured {
        Some(url) => PortalConfig::for_origin(url),
        None => window
            .location()
            .origin()
            .map(PortalConfig::for_origin)
            .unwrap_or_default(),
    }
}

/// Log the failure and, when there is a body to draw on, show it.
pub fn report(error: &StartupError) {
    log_error!("[startup] cannot start the portal: {}", error);

    let has_body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
        .is_some();
    if has_body {
        let detail = error.to_string();
        leptos::mount::mount_to_body(move || view! { <StartupFailure detail=detail /> });
    }
}

#[component]
fn StartupFailure(detail: String) -> impl IntoView {
    view! {
        <div class="flex items-center justify-center min-h-screen bg-base-200 p-4">
            <div role="alert" class="alert alert-error max-w-lg flex-col items-start">
                <span class="font-bold">
                    "Error al cargar la aplicación. Por favor, contacta a soporte."
                </span>
                <code class="text-xs opacity-70">{detail}</code>
            </div>
        </div>
    }
}
