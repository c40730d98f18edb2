//! Portal controller
//!
//! Owns the one `PortalState` of the page. Views read it through the
//! `state` signal and change it only via `dispatch`, which runs the core
//! transition and then executes the effect it returns.

use crate::web::FetchClient;
use leptos::prelude::*;
use leptos::task::spawn_local;
use tallerportal::{PortalApi, PortalConfig, PortalEffect, PortalEvent, PortalState};

pub type Api = PortalApi<FetchClient>;

#[derive(Clone, Copy)]
pub struct PortalContext {
    pub state: RwSignal<PortalState>,
    api: StoredValue<Api>,
}

impl PortalContext {
    pub fn new(config: PortalConfig) -> Self {
        Self {
            state: RwSignal::new(PortalState::starting()),
            api: StoredValue::new(PortalApi::new(config, FetchClient)),
        }
    }

    /// A handle to the API for use inside spawned tasks.
    pub fn api(&self) -> Api {
        self.api.get_value()
    }

    pub fn config(&self) -> PortalConfig {
        self.api.with_value(|api| api.config().clone())
    }

    /// Apply an event and run its side effect.
    ///
    /// Safe to call from late async callbacks: once the owner is gone the
    /// event is dropped.
    pub fn dispatch(&self, event: PortalEvent) {
        let Some(effect) = self.state.try_update(|state| state.apply(event)) else {
            log_warn!("[controller] portal disposed, dropping event");
            return;
        };
        if let Some(effect) = effect {
            self.run(effect);
        }
    }

    fn run(&self, effect: PortalEffect) {
        let portal = *self;
        match effect {
            PortalEffect::FetchDashboard(epoch) => {
                let api = self.api();
                spawn_local(async move {
                    let result = api.dashboard().await;
                    portal.dispatch(PortalEvent::DashboardLoaded { epoch, result });
                });
            }
            PortalEffect::CallLogout => {
                // Local state is already cleared, the answer does not matter
                let api = self.api();
                spawn_local(async move {
                    let _ = api.logout().await;
                });
            }
            PortalEffect::ScheduleLoginRedirect(epoch) => {
                // Not cancellable; a timer from an earlier visit is ignored by epoch
                let delay = self.config().register_redirect_delay;
                set_timeout(
                    move || portal.dispatch(PortalEvent::RegisterRedirectElapsed(epoch)),
                    delay,
                );
            }
        }
    }

    /// Ask the backend whether a session cookie is still valid.
    pub fn check_session(&self) {
        let portal = *self;
        let api = self.api();
        spawn_local(async move {
            let result = api.check_session().await;
            portal.dispatch(PortalEvent::SessionChecked(result));
        });
    }
}

pub fn use_portal() -> PortalContext {
    use_context::<PortalContext>().expect("PortalContext should be provided by App")
}
