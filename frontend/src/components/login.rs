use crate::controller::use_portal;
use crate::web::LocalStorage;
use leptos::prelude::*;
use leptos::task::spawn_local;
use tallerportal::{PortalEvent, SessionInfo};

/// Last username that logged in successfully. The password is never stored.
const STORAGE_USERNAME_KEY: &str = "tallerportal_username";

#[component]
pub fn LoginPage() -> impl IntoView {
    let portal = use_portal();

    let username = RwSignal::new(LocalStorage::get(STORAGE_USERNAME_KEY).unwrap_or_default());
    let password = RwSignal::new(String::new());
    let is_submitting = RwSignal::new(false);
    let error_msg = RwSignal::new(Option::<String>::None);

    let is_checking = move || portal.state.with(|s| s.is_checking());

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get_untracked() {
            return;
        }
        is_submitting.set(true);
        error_msg.set(None);

        let user = username.get_untracked();
        let pass = password.get_untracked();
        let api = portal.api();
        spawn_local(async move {
            match api.login(&user, &pass).await {
                Ok(customer_id) => {
                    LocalStorage::set(STORAGE_USERNAME_KEY, user.trim());
                    portal.dispatch(PortalEvent::LoginSucceeded(SessionInfo {
                        customer_id,
                        username: Some(user),
                    }));
                }
                Err(e) => {
                    log_warn!("[login] {}", e);
                    let _ = error_msg.try_set(Some(e.user_message()));
                    let _ = is_submitting.try_set(false);
                }
            }
        });
    };

    view! {
        <Show
            when=move || !is_checking()
            fallback=|| view! {
                <div class="flex items-center justify-center min-h-screen">
                    <span class="loading loading-spinner loading-lg text-primary"></span>
                </div>
            }
        >
            <div class="hero min-h-screen">
                <div class="hero-content flex-col w-full max-w-md">
                    <h1 class="text-3xl font-bold text-center">"Iniciar Sesión Cliente"</h1>

                    <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                        <form class="card-body" on:submit=on_submit>
                            {move || error_msg.get().map(|msg| view! {
                                <div role="alert" class="alert alert-error text-sm py-2">
                                    <span>{msg}</span>
                                </div>
                            })}

                            <div class="form-control">
                                <label class="label" for="username">
                                    <span class="label-text">"Usuario:"</span>
                                </label>
                                <input
                                    id="username"
                                    type="text"
                                    autocomplete="username"
                                    on:input=move |ev| username.set(event_target_value(&ev))
                                    prop:value=username
                                    class="input input-bordered"
                                    required
                                />
                            </div>
                            <div class="form-control">
                                <label class="label" for="password">
                                    <span class="label-text">"Contraseña:"</span>
                                </label>
                                <input
                                    id="password"
                                    type="password"
                                    autocomplete="current-password"
                                    on:input=move |ev| password.set(event_target_value(&ev))
                                    prop:value=password
                                    class="input input-bordered"
                                    required
                                />
                            </div>
                            <div class="form-control mt-6">
                                <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                    {move || if is_submitting.get() {
                                        view! { <span class="loading loading-spinner"></span> "Entrando..." }.into_any()
                                    } else {
                                        "Entrar".into_any()
                                    }}
                                </button>
                            </div>
                        </form>
                    </div>

                    <p class="text-center text-base-content/70">
                        "¿No tienes cuenta? "
                        <button
                            class="link link-primary"
                            on:click=move |_| portal.dispatch(PortalEvent::NavigateToRegister)
                        >
                            "Regístrate aquí"
                        </button>
                    </p>
                </div>
            </div>
        </Show>
    }
}
