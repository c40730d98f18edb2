use crate::controller::use_portal;
use leptos::prelude::*;
use tallerportal::PortalEvent;
use tallerportal_shared::{Customer, Vehicle};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let portal = use_portal();

    // Derived straight from the portal state, so a refreshed session shows up
    // without remounting the page
    let customer = Memo::new(move |_| {
        portal
            .state
            .with(|s| s.session().and_then(|session| session.customer.clone()))
    });
    let vehicles = Memo::new(move |_| {
        portal.state.with(|s| {
            s.session()
                .map(|session| session.vehicles.clone())
                .unwrap_or_default()
        })
    });
    let username = Memo::new(move |_| {
        portal
            .state
            .with(|s| s.session().and_then(|session| session.username.clone()))
    });

    let on_logout = move |_| portal.dispatch(PortalEvent::Logout);

    view! {
        <div class="min-h-screen p-4 md:p-8">
            <div class="max-w-7xl mx-auto space-y-8">
                <div class="navbar bg-base-100 rounded-box shadow-xl">
                    <div class="flex-1 gap-2">
                        <span class="text-xl font-bold px-2">
                            {move || match customer.get() {
                                Some(c) => greeting(&c),
                                None => "Portal del Cliente".to_string(),
                            }}
                        </span>
                        {move || username.get().map(|name| view! {
                            <span class="badge badge-neutral hidden md:inline-flex">{name}</span>
                        })}
                    </div>
                    <div class="flex-none">
                        <button on:click=on_logout class="btn btn-outline btn-error">
                            "Cerrar Sesión"
                        </button>
                    </div>
                </div>

                <Show
                    when=move || customer.with(Option::is_some)
                    fallback=|| view! {
                        <div class="text-center p-8 text-base-content/70">
                            <span class="loading loading-spinner mr-2"></span>
                            "Cargando datos del cliente..."
                        </div>
                    }
                >
                    <div class="card bg-base-100 shadow-xl">
                        <div class="card-body">
                            <h3 class="card-title">"Tus Vehículos:"</h3>
                            <Show
                                when=move || !vehicles.with(Vec::is_empty)
                                fallback=|| view! {
                                    <p class="text-base-content/70">
                                        "No tienes vehículos registrados. Contacta al taller."
                                    </p>
                                }
                            >
                                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                                    <For
                                        each=move || vehicles.get()
                                        key=|vehicle| vehicle.id
                                        children=move |vehicle| view! { <VehicleCard vehicle=vehicle /> }
                                    />
                                </div>
                            </Show>
                        </div>
                    </div>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn VehicleCard(vehicle: Vehicle) -> impl IntoView {
    let portal = use_portal();
    let title = vehicle.title();
    let plate = vehicle.plate.clone();
    let year = vehicle.year_display();
    let odometer = vehicle.initial_odometer_display();

    let on_select = move |_| {
        log_info!("[dashboard] vehicle {} selected", vehicle.id);
        portal.dispatch(PortalEvent::VehicleSelected(vehicle.clone()));
    };

    view! {
        <div
            class="card bg-base-200 shadow-md hover:shadow-lg transition cursor-pointer"
            on:click=on_select
        >
            <div class="card-body">
                <h4 class="card-title text-primary">{title}</h4>
                <p>"Patente: " <span class="font-semibold">{plate}</span></p>
                <p class="text-sm text-base-content/70">"Año: " {year}</p>
                <p class="text-sm text-base-content/70">"KM inicial: " {odometer}</p>
                <div class="card-actions justify-end">
                    <button class="btn btn-primary btn-sm">"Ver Detalles"</button>
                </div>
            </div>
        </div>
    }
}

fn greeting(customer: &Customer) -> String {
    format!("Bienvenido, {}", customer.full_name())
}
