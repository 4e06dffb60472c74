//! Scenario simulator: live impact estimate plus saved scenarios.

use dioxus::prelude::*;

use crate::app::{load_scenarios, ActionError, Backend};
use crate::domain::{
    format_timestamp, AppState, FreightType, ImpactDimension, NewScenario, RouteType, Scenario,
    ScenarioForm, SupplierRating,
};
use crate::ui::{
    components::{
        impact_tile::ImpactTile,
        toast::{push_toast, ToastKind, ToastMessage},
    },
    theme,
};

async fn save_scenario(backend: Backend, form: ScenarioForm) -> Result<Scenario, ActionError> {
    form.validate()?;
    let client = backend.client()?;
    let user_id = client.require_user().await?;
    let payload = NewScenario::from_form(user_id, &form)?;
    Ok(client.insert_scenario(&payload).await?)
}

#[component]
pub fn ScenariosPage() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let backend = use_context::<Backend>();
    let mut form = use_signal(ScenarioForm::default);
    let mut saving = use_signal(|| false);

    let _load = use_future({
        let backend = backend.clone();
        move || {
            let backend = backend.clone();
            async move { load_scenarios(state, toasts, backend, false).await }
        }
    });

    let estimate = form.with(|f| f.estimate());
    let current = form();
    let scenarios = state.with(|s| s.scenarios.clone());
    let signed_in = state.with(|s| s.is_signed_in());

    let on_save = move |_: MouseEvent| {
        if saving() {
            return;
        }
        let backend = backend.clone();
        let snapshot = form.peek().clone();
        saving.set(true);
        spawn(async move {
            match save_scenario(backend, snapshot).await {
                Ok(scenario) => {
                    tracing::info!(scenario = %scenario.id, "scenario saved");
                    state.with_mut(|s| s.prepend_scenario(scenario));
                    form.set(ScenarioForm::default());
                    push_toast(toasts, ToastKind::Success, "Scenario saved.");
                }
                Err(error) => push_toast(toasts, ToastKind::Error, format!("Could not save scenario: {error}")),
            }
            saving.set(false);
        });
    };

    rsx! {
        div { class: "space-y-8",
            div {
                h2 { class: "{theme::PAGE_TITLE}", "Scenario Simulator" }
                p { class: "mt-1 text-sm {theme::TEXT_MUTED}",
                    "Model how route, freight and supplier choices change carbon, cost and time."
                }
            }

            div { class: "grid gap-6 lg:grid-cols-2",
                section { class: "{theme::PANEL} p-5 space-y-4",
                    h3 { class: "{theme::SECTION_TITLE}", "New Scenario" }
                    label {
                        span { class: "{theme::LABEL}", "Name" }
                        input {
                            class: "{theme::INPUT}",
                            value: "{current.name}",
                            oninput: move |evt| form.with_mut(|f| f.name = evt.value()),
                        }
                    }
                    label {
                        span { class: "{theme::LABEL}", "Description" }
                        textarea {
                            class: "{theme::INPUT}",
                            rows: "2",
                            value: "{current.description}",
                            oninput: move |evt| form.with_mut(|f| f.description = evt.value()),
                        }
                    }
                    div { class: "grid grid-cols-3 gap-3",
                        label {
                            span { class: "{theme::LABEL}", "Route" }
                            select {
                                class: "{theme::INPUT}",
                                value: "{current.route_type}",
                                onchange: move |evt| form.with_mut(|f| f.route_type = evt.value()),
                                option { value: "", "Select" }
                                for route in RouteType::ALL {
                                    option { key: "{route.as_str()}", value: route.as_str(), "{route.label()}" }
                                }
                            }
                        }
                        label {
                            span { class: "{theme::LABEL}", "Freight" }
                            select {
                                class: "{theme::INPUT}",
                                value: "{current.freight_type}",
                                onchange: move |evt| form.with_mut(|f| f.freight_type = evt.value()),
                                option { value: "", "Select" }
                                for freight in FreightType::ALL {
                                    option { key: "{freight.as_str()}", value: freight.as_str(), "{freight.label()}" }
                                }
                            }
                        }
                        label {
                            span { class: "{theme::LABEL}", "Supplier" }
                            select {
                                class: "{theme::INPUT}",
                                value: "{current.supplier_rating}",
                                onchange: move |evt| form.with_mut(|f| f.supplier_rating = evt.value()),
                                option { value: "", "Select" }
                                for rating in SupplierRating::ALL {
                                    option { key: "{rating.as_str()}", value: rating.as_str(), "{rating.label()}" }
                                }
                            }
                        }
                    }
                    div { class: "grid grid-cols-2 gap-3",
                        label {
                            span { class: "{theme::LABEL}", "Distance (km)" }
                            input {
                                class: "{theme::INPUT}",
                                r#type: "number",
                                min: "0",
                                value: "{current.distance}",
                                oninput: move |evt| form.with_mut(|f| f.distance = evt.value()),
                            }
                        }
                        label {
                            span { class: "{theme::LABEL}", "Weight (tons)" }
                            input {
                                class: "{theme::INPUT}",
                                r#type: "number",
                                min: "0",
                                value: "{current.weight}",
                                oninput: move |evt| form.with_mut(|f| f.weight = evt.value()),
                            }
                        }
                    }

                    h4 { class: "{theme::LABEL}", "Estimated Impact" }
                    div { class: "grid grid-cols-3 gap-3",
                        ImpactTile { dimension: ImpactDimension::Carbon, value: estimate.carbon_impact }
                        ImpactTile { dimension: ImpactDimension::Cost, value: estimate.cost_impact }
                        ImpactTile { dimension: ImpactDimension::Time, value: estimate.time_impact }
                    }

                    button {
                        class: "{theme::BTN_PRIMARY} w-full",
                        disabled: saving(),
                        onclick: on_save,
                        if saving() { "Saving…" } else { "Save Scenario" }
                    }
                    if !signed_in {
                        p { class: "text-xs {theme::TEXT_MUTED}", "Sign in from the account page to save scenarios." }
                    }
                }

                section { class: "{theme::PANEL} p-5 space-y-3",
                    h3 { class: "{theme::SECTION_TITLE}", "Saved Scenarios" }
                    if scenarios.is_empty() {
                        p { class: "text-sm {theme::TEXT_MUTED}", "No scenarios yet." }
                    }
                    for scenario in scenarios {
                        ScenarioCard { key: "{scenario.id}", scenario }
                    }
                }
            }
        }
    }
}

#[component]
fn ScenarioCard(scenario: Scenario) -> Element {
    let created = format_timestamp(scenario.created_at);
    rsx! {
        article { class: "rounded-lg border border-slate-800 bg-slate-950/60 p-4 space-y-3",
            div { class: "flex items-start justify-between gap-3",
                div {
                    h4 { class: "text-sm font-semibold text-slate-100", "{scenario.name}" }
                    if let Some(description) = scenario.description.clone().filter(|d| !d.is_empty()) {
                        p { class: "text-xs {theme::TEXT_MUTED}", "{description}" }
                    }
                }
                span { class: "text-xs {theme::TEXT_MUTED}", "{created}" }
            }
            div { class: "grid grid-cols-3 gap-2",
                ImpactTile { dimension: ImpactDimension::Carbon, value: scenario.carbon_impact }
                ImpactTile { dimension: ImpactDimension::Cost, value: scenario.cost_impact }
                ImpactTile { dimension: ImpactDimension::Time, value: scenario.time_impact }
            }
        }
    }
}
