//! View outlet
//!
//! Renders exactly one page for the current `ViewKind`. The page is rebuilt
//! only when the kind changes, so a dashboard refresh does not remount it.

use crate::components::dashboard::DashboardPage;
use crate::components::login::LoginPage;
use crate::components::register::RegisterPage;
use crate::components::vehicle_detail::VehicleDetailPage;
use crate::controller::use_portal;
use leptos::prelude::*;
use tallerportal::ViewKind;

fn page(kind: ViewKind) -> AnyView {
    match kind {
        ViewKind::Login => view! { <LoginPage /> }.into_any(),
        ViewKind::Register => view! { <RegisterPage /> }.into_any(),
        ViewKind::Dashboard => view! { <DashboardPage /> }.into_any(),
        ViewKind::VehicleDetail => view! { <VehicleDetailPage /> }.into_any(),
    }
}

#[component]
pub fn ViewOutlet() -> impl IntoView {
    let portal = use_portal();

    let current = Memo::new(move |_| {
        portal.state.with(|s| {
            let kind = s.view_kind();
            if kind.requires_auth() && !s.is_authenticated() {
                ViewKind::Login
            } else {
                kind
            }
        })
    });

    Effect::new(move |_| {
        log_info!("[outlet] showing {}", current.get().name());
    });

    move || page(current.get())
}
