use std::collections::HashSet;
use std::time::Duration;

use dioxus::prelude::*;
use time::OffsetDateTime;
use tokio::time::sleep;

use crate::app::{load_integrations, ActionError, Backend};
use crate::domain::{
    format_timestamp, ApiIntegration, AppState, IntegrationForm, IntegrationType, NewIntegration,
    RecordId,
};
use crate::ui::{
    components::{
        badge::Badge,
        toast::{push_toast, ToastKind, ToastMessage},
    },
    theme::{self, Tone},
};

const SIMULATED_SYNC: Duration = Duration::from_secs(2);

async fn connect(backend: Backend, form: IntegrationForm) -> Result<ApiIntegration, ActionError> {
    let client = backend.client()?;
    let user_id = client.require_user().await?;
    let payload = NewIntegration::from_form(user_id, &form)?;
    Ok(client.insert_integration(&payload).await?)
}

async fn toggle(backend: Backend, id: RecordId, is_active: bool) -> Result<(), ActionError> {
    Ok(backend.client()?.set_integration_active(&id, is_active).await?)
}

async fn sync(backend: Backend, id: RecordId) -> Result<OffsetDateTime, ActionError> {
    let client = backend.client()?;
    client.require_user().await?;
    sleep(SIMULATED_SYNC).await;
    let at = OffsetDateTime::now_utc();
    client.mark_integration_synced(&id, at).await?;
    Ok(at)
}

#[component]
pub fn IntegrationsPage() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let backend = use_context::<Backend>();
    let mut form = use_signal(IntegrationForm::default);
    let mut connecting = use_signal(|| false);
    let mut syncing = use_signal(HashSet::<RecordId>::new);

    let _load = use_future({
        let backend = backend.clone();
        move || {
            let backend = backend.clone();
            async move { load_integrations(state, toasts, backend, false).await }
        }
    });

    let current = form();
    let integrations = state.with(|s| s.integrations.clone());

    let on_connect = {
        let backend = backend.clone();
        move |_: MouseEvent| {
            if connecting() {
                return;
            }
            let backend = backend.clone();
            let snapshot = form.peek().clone();
            connecting.set(true);
            spawn(async move {
                match connect(backend, snapshot).await {
                    Ok(integration) => {
                        tracing::info!(integration = %integration.id, kind = %integration.integration_type, "integration added");
                        state.with_mut(|s| s.prepend_integration(integration));
                        form.set(IntegrationForm::default());
                        push_toast(toasts, ToastKind::Success, "Integration connected.");
                    }
                    Err(error) => push_toast(toasts, ToastKind::Error, format!("Could not add integration: {error}")),
                }
                connecting.set(false);
            });
        }
    };

    let on_toggle = {
        let backend = backend.clone();
        move |(id, is_active): (RecordId, bool)| {
            let backend = backend.clone();
            spawn(async move {
                match toggle(backend, id.clone(), is_active).await {
                    Ok(()) => {
                        state.with_mut(|s| s.set_integration_active(&id, is_active));
                        let verb = if is_active { "enabled" } else { "disabled" };
                        push_toast(toasts, ToastKind::Info, format!("Integration {verb}."));
                    }
                    Err(error) => push_toast(toasts, ToastKind::Error, format!("Could not update integration: {error}")),
                }
            });
        }
    };

    let on_sync = move |id: RecordId| {
        if !syncing.with_mut(|ids| ids.insert(id.clone())) {
            return;
        }
        let backend = backend.clone();
        spawn(async move {
            match sync(backend, id.clone()).await {
                Ok(at) => {
                    state.with_mut(|s| s.mark_integration_synced(&id, at));
                    push_toast(toasts, ToastKind::Success, "Sync completed.");
                }
                Err(error) => push_toast(toasts, ToastKind::Error, format!("Sync failed: {error}")),
            }
            syncing.with_mut(|ids| ids.remove(&id));
        });
    };

    let rows: Vec<(ApiIntegration, bool)> = syncing.with(|ids| {
        integrations
            .into_iter()
            .map(|integration| {
                let busy = ids.contains(&integration.id);
                (integration, busy)
            })
            .collect()
    });

    rsx! {
        div { class: "space-y-8",
            div {
                h2 { class: "{theme::PAGE_TITLE}", "API Integrations" }
                p { class: "mt-1 text-sm {theme::TEXT_MUTED}",
                    "Connect transport management, ERP and GPS systems to feed live shipment data."
                }
            }

            div { class: "grid gap-6 lg:grid-cols-3",
                section { class: "{theme::PANEL} p-5 space-y-4",
                    h3 { class: "{theme::SECTION_TITLE}", "Add Integration" }
                    label {
                        span { class: "{theme::LABEL}", "Type" }
                        select {
                            class: "{theme::INPUT}",
                            value: "{current.integration_type}",
                            onchange: move |evt| form.with_mut(|f| f.integration_type = evt.value()),
                            option { value: "", "Select type" }
                            for kind in IntegrationType::ALL {
                                option { key: "{kind.as_str()}", value: kind.as_str(), {format!("{} {}", kind.icon(), kind.label())} }
                            }
                        }
                    }
                    label {
                        span { class: "{theme::LABEL}", "Name" }
                        input {
                            class: "{theme::INPUT}",
                            value: "{current.integration_name}",
                            oninput: move |evt| form.with_mut(|f| f.integration_name = evt.value()),
                        }
                    }
                    label {
                        span { class: "{theme::LABEL}", "API Endpoint" }
                        input {
                            class: "{theme::INPUT}",
                            placeholder: "https://api.example.com/v1",
                            value: "{current.api_endpoint}",
                            oninput: move |evt| form.with_mut(|f| f.api_endpoint = evt.value()),
                        }
                    }
                    label {
                        span { class: "{theme::LABEL}", "API Key" }
                        input {
                            class: "{theme::INPUT}",
                            r#type: "password",
                            value: "{current.api_key}",
                            oninput: move |evt| form.with_mut(|f| f.api_key = evt.value()),
                        }
                    }
                    button {
                        class: "{theme::BTN_PRIMARY} w-full",
                        disabled: connecting(),
                        onclick: on_connect,
                        if connecting() { "Connecting…" } else { "Connect" }
                    }
                }

                section { class: "{theme::PANEL} p-5 space-y-3 lg:col-span-2",
                    h3 { class: "{theme::SECTION_TITLE}", "Connected Systems" }
                    if rows.is_empty() {
                        p { class: "text-sm {theme::TEXT_MUTED}", "No integrations yet." }
                    }
                    for (integration, busy) in rows {
                        IntegrationRow {
                            key: "{integration.id}",
                            syncing: busy,
                            integration,
                            on_toggle: on_toggle.clone(),
                            on_sync: on_sync.clone(),
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn IntegrationRow(
    integration: ApiIntegration,
    syncing: bool,
    on_toggle: EventHandler<(RecordId, bool)>,
    on_sync: EventHandler<RecordId>,
) -> Element {
    let kind = IntegrationType::parse(&integration.integration_type);
    let last_sync = integration
        .last_sync
        .map(format_timestamp)
        .unwrap_or_else(|| "Never".to_string());
    let is_active = integration.is_active;
    let toggle_id = integration.id.clone();
    let sync_id = integration.id.clone();
    let (status, tone) = if is_active {
        ("Active", Tone::Positive)
    } else {
        ("Inactive", Tone::Neutral)
    };

    rsx! {
        article { class: "flex flex-wrap items-center justify-between gap-3 rounded-lg border border-slate-800 bg-slate-950/60 p-4",
            div { class: "flex items-center gap-3",
                span { class: "text-2xl", "{kind.icon()}" }
                div {
                    h4 { class: "text-sm font-semibold text-slate-100", "{integration.integration_name}" }
                    p { class: "text-xs {theme::TEXT_MUTED}", "{kind.label()}" }
                    if let Some(endpoint) = integration.api_endpoint.clone().filter(|e| !e.is_empty()) {
                        p { class: "text-xs {theme::TEXT_MUTED} font-mono", "{endpoint}" }
                    }
                    p { class: "text-xs {theme::TEXT_MUTED}", "Last sync: {last_sync}" }
                }
            }
            div { class: "flex items-center gap-3",
                Badge { label: status.to_string(), tone }
                button {
                    class: "{theme::toggle(is_active)}",
                    title: "Toggle integration",
                    onclick: move |_| on_toggle.call((toggle_id.clone(), !is_active)),
                    span { class: if is_active { "toggle-knob toggle-knob-on" } else { "toggle-knob" } }
                }
                button {
                    class: "{theme::BTN_SMALL}",
                    disabled: syncing || !is_active,
                    onclick: move |_| on_sync.call(sync_id.clone()),
                    if syncing { "Syncing…" } else { "🔄 Sync" }
                }
            }
        }
    }
}
