mod form_state;

use self::form_state::RegisterForm;
use crate::controller::use_portal;
use leptos::prelude::*;
use leptos::task::spawn_local;
use tallerportal::state::{AnonymousView, PortalState};
use tallerportal::PortalEvent;

const MSG_LOGIN_HINT: &str = " Ahora puedes iniciar sesión.";

/// Banner text and whether it reports a success.
type Notice = (String, bool);

#[component]
pub fn RegisterPage() -> impl IntoView {
    let portal = use_portal();
    let form = RegisterForm::new();

    let is_submitting = RwSignal::new(false);
    let notice = RwSignal::new(Option::<Notice>::None);

    // Set once a registration went through; the switch to login is pending
    let redirect_pending = move || {
        portal.state.with(|s| {
            matches!(
                s,
                PortalState::Anonymous {
                    view: AnonymousView::Register {
                        redirect_pending: true
                    },
                    ..
                }
            )
        })
    };

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get_untracked() || redirect_pending() {
            return;
        }
        is_submitting.set(true);
        notice.set(None);

        let request = form.to_request();
        let api = portal.api();
        spawn_local(async move {
            match api.register(&request).await {
                Ok(message) => {
                    // Only touch the fields while the page is still mounted
                    if notice
                        .try_set(Some((format!("{}{}", message, MSG_LOGIN_HINT), true)))
                        .is_none()
                    {
                        form.reset();
                    }
                    portal.dispatch(PortalEvent::RegisterSucceeded);
                }
                Err(e) => {
                    log_warn!("[register] {}", e);
                    let _ = notice.try_set(Some((e.user_message(), false)));
                }
            }
            let _ = is_submitting.try_set(false);
        });
    };

    view! {
        <div class="hero min-h-screen">
            <div class="hero-content flex-col w-full max-w-md">
                <h1 class="text-3xl font-bold text-center">"Registrar Cliente"</h1>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        {move || notice.get().map(|(msg, ok)| view! {
                            <div
                                role="alert"
                                class=if ok { "alert alert-success text-sm py-2" } else { "alert alert-error text-sm py-2" }
                            >
                                <span>{msg}</span>
                            </div>
                        })}

                        <div class="form-control">
                            <label class="label" for="reg-username">
                                <span class="label-text">"Usuario:"</span>
                            </label>
                            <input
                                id="reg-username"
                                type="text"
                                on:input=move |ev| form.username.set(event_target_value(&ev))
                                prop:value=form.username
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="reg-password">
                                <span class="label-text">"Contraseña:"</span>
                            </label>
                            <input
                                id="reg-password"
                                type="password"
                                autocomplete="new-password"
                                on:input=move |ev| form.password.set(event_target_value(&ev))
                                prop:value=form.password
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="cliente-nombre">
                                <span class="label-text">"Tu Nombre (como en el taller):"</span>
                            </label>
                            <input
                                id="cliente-nombre"
                                type="text"
                                placeholder="Ej. Juan"
                                on:input=move |ev| form.first_name.set(event_target_value(&ev))
                                prop:value=form.first_name
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="cliente-apellido">
                                <span class="label-text">"Tu Apellido (como en el taller):"</span>
                            </label>
                            <input
                                id="cliente-apellido"
                                type="text"
                                placeholder="Ej. Pérez"
                                on:input=move |ev| form.last_name.set(event_target_value(&ev))
                                prop:value=form.last_name
                                class="input input-bordered"
                                required
                            />
                            <span class="label-text-alt text-base-content/60 mt-1">
                                "Asegúrate de usar el mismo nombre y apellido que tienes registrado en el taller."
                            </span>
                        </div>
                        <div class="form-control">
                            <label class="label" for="cliente-dni">
                                <span class="label-text">"DNI (opcional):"</span>
                            </label>
                            <input
                                id="cliente-dni"
                                type="text"
                                on:input=move |ev| form.national_id.set(event_target_value(&ev))
                                prop:value=form.national_id
                                class="input input-bordered"
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button
                                class="btn btn-success"
                                disabled=move || is_submitting.get() || redirect_pending()
                            >
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Registrando..." }.into_any()
                                } else {
                                    "Registrar".into_any()
                                }}
                            </button>
                        </div>
                    </form>
                </div>

                <p class="text-center text-base-content/70">
                    "¿Ya tienes cuenta? "
                    <button
                        class="link link-primary"
                        on:click=move |_| portal.dispatch(PortalEvent::NavigateToLogin)
                    >
                        "Inicia Sesión"
                    </button>
                </p>
            </div>
        </div>
    }
}
