use crate::controller::{PortalContext, use_portal};
use crate::web::{BrowserScheduler, alert};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;
use tallerportal::watch::fetch_cycle;
use tallerportal::{PollTask, PortalEvent, VehicleWatch};
use tallerportal_shared::{ActiveRepair, Amount, RepairRecord, VehicleId, text_or_na};

/// Run one refresh for `vehicle_id` and fold it into `watch`.
///
/// A late answer after the page is gone is dropped.
fn run_cycle(portal: PortalContext, watch: RwSignal<Option<VehicleWatch>>, vehicle_id: VehicleId) {
    let api = portal.api();
    spawn_local(async move {
        let outcome = fetch_cycle(&api, vehicle_id).await;
        let report = watch
            .try_update(|w| w.as_mut().map(|w| w.apply(outcome)))
            .flatten();

        match report {
            Some(report) => {
                if let Some(notification) = report.notification {
                    alert(&notification.text());
                }
            }
            None => log_warn!("[detail] page gone, dropping cycle for vehicle {}", vehicle_id),
        }
    });
}

#[component]
pub fn VehicleDetailPage() -> impl IntoView {
    let portal = use_portal();

    let selected = Memo::new(move |_| portal.state.with(|s| s.selected_vehicle().cloned()));
    let watch = RwSignal::new(Option::<VehicleWatch>::None);
    let poll = StoredValue::new_local(PollTask::new(
        BrowserScheduler,
        portal.config().poll_interval,
    ));

    // Re-armed whenever the vehicle on screen changes
    Effect::new(move |_| {
        let Some(vehicle) = selected.get() else {
            poll.update_value(|task| task.stop());
            return;
        };
        let vehicle_id = vehicle.id;

        let is_new = watch.with_untracked(|w| w.as_ref().map(|w| w.vehicle().id) != Some(vehicle_id));
        if is_new {
            watch.set(Some(VehicleWatch::new(vehicle)));
        }

        let tick: Rc<dyn Fn()> = Rc::new(move || run_cycle(portal, watch, vehicle_id));
        poll.update_value(|task| {
            task.retarget(vehicle_id, tick);
        });
    });

    on_cleanup(move || {
        poll.try_update_value(|task| task.stop());
    });

    let active = Memo::new(move |_| watch.with(|w| w.as_ref().and_then(|w| w.active().cloned())));
    let history = Memo::new(move |_| {
        watch.with(|w| w.as_ref().map(|w| w.history().to_vec()).unwrap_or_default())
    });
    let message = Memo::new(move |_| {
        watch.with(|w| w.as_ref().and_then(|w| w.message().map(str::to_string)))
    });
    let is_loading = move || watch.with(|w| w.as_ref().is_none_or(VehicleWatch::is_loading));
    let cycles = move || watch.with(|w| w.as_ref().map_or(0, VehicleWatch::cycles));

    let on_back = move |_| portal.dispatch(PortalEvent::BackToDashboard);

    view! {
        <div class="min-h-screen p-4 md:p-8">
            <div class="max-w-5xl mx-auto card bg-base-100 shadow-xl">
                <div class="card-body space-y-4">
                    <div class="flex items-center justify-between">
                        <button on:click=on_back class="btn btn-ghost">"← Volver al Dashboard"</button>
                        <span class="text-xs text-base-content/50">
                            {move || format!("Actualizaciones: {}", cycles())}
                        </span>
                    </div>

                    {move || match selected.get() {
                        Some(vehicle) => view! {
                            <div>
                                <h2 class="text-3xl font-bold">
                                    {format!("Detalles del Vehículo: {}", vehicle.plate)}
                                </h2>
                                <p class="text-xl text-base-content/70">
                                    {format!("{} ({})", vehicle.title(), vehicle.year_display())}
                                </p>
                            </div>
                        }.into_any(),
                        None => view! { <p class="text-center p-8">"Seleccione un vehículo."</p> }.into_any(),
                    }}

                    {move || message.get().map(|msg| view! {
                        <div role="alert" class="alert alert-warning text-sm py-2">
                            <span>{msg}</span>
                        </div>
                    })}

                    <Show
                        when=move || !is_loading()
                        fallback=|| view! {
                            <div class="flex justify-center p-8">
                                <span class="loading loading-spinner loading-lg text-primary"></span>
                            </div>
                        }
                    >
                        <h3 class="text-2xl font-semibold">"Estado Actual en Taller:"</h3>
                        {move || match active.get() {
                            Some(repair) => view! { <ActiveRepairPanel repair=repair /> }.into_any(),
                            None => view! {
                                <p class="text-base-content/70">
                                    "Este vehículo no tiene una reparación activa en este momento."
                                </p>
                            }
                            .into_any(),
                        }}

                        <h3 class="text-2xl font-semibold">"Historial de Reparaciones:"</h3>
                        {move || {
                            let records = history.get();
                            if records.is_empty() {
                                view! {
                                    <p class="text-base-content/70">
                                        "No hay historial de reparaciones para este vehículo."
                                    </p>
                                }
                                .into_any()
                            } else {
                                view! {
                                    <div class="space-y-4">
                                        {records
                                            .into_iter()
                                            .map(|record| view! { <RepairRecordCard record=record /> })
                                            .collect_view()}
                                    </div>
                                }
                                .into_any()
                            }
                        }}
                    </Show>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ActiveRepairPanel(repair: ActiveRepair) -> impl IntoView {
    view! {
        <div class="alert alert-warning flex-col items-start shadow-md">
            <p class="text-lg font-bold">{format!("Estado: {}", repair.status)}</p>
            <p>{format!("Fecha de Ingreso: {}", repair.intake_date.display())}</p>
            <p>{format!("Problema Reportado: {}", text_or_na(repair.reported_problem.as_deref()))}</p>
            <p>{format!("Trabajos Realizados: {}", text_or_na(repair.work_performed.as_deref()))}</p>
            <p>{format!("Repuestos Usados: {}", text_or_na(repair.parts_used.as_deref()))}</p>
            <p>{format!("Costo Acumulado: ${}", Amount::display_or_zero(repair.accumulated_cost))}</p>
            <p>{format!("Mecánico: {}", repair.mechanic())}</p>
        </div>
    }
}

#[component]
fn RepairRecordCard(record: RepairRecord) -> impl IntoView {
    let odometer = record
        .intake_odometer
        .map(|km| format!("{km} km"))
        .unwrap_or_else(|| text_or_na(None).to_string());
    let exit_date = record.exit_date.as_ref().map(|date| date.display());

    view! {
        <div class="card bg-base-200 shadow-md">
            <div class="card-body py-4">
                <p class="text-lg font-bold text-primary">
                    {format!("ID Reparación: {} - Estado: {}", record.id, record.status)}
                </p>
                <p>{format!("Fecha de Ingreso: {}", record.intake_date.display())}</p>
                {exit_date.map(|date| view! { <p>{format!("Fecha de Salida: {date}")}</p> })}
                <p>{format!("Kilometraje Ingreso: {odometer}")}</p>
                <p>{format!("Problema Reportado: {}", text_or_na(record.reported_problem.as_deref()))}</p>
                <p>{format!("Trabajos Realizados: {}", text_or_na(record.work_performed.as_deref()))}</p>
                <p>{format!("Repuestos Usados: {}", text_or_na(record.parts_used.as_deref()))}</p>
                <p>{format!("Costo Total: ${}", Amount::display_or_zero(record.total_cost))}</p>
                <p>{format!("Mecánico: {}", record.mechanic())}</p>
            </div>
        </div>
    }
}
