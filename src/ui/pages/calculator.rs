use dioxus::prelude::*;

use crate::domain::{
    calculate_emissions, EmissionResult, FuelType, ShipmentInputs, TransportMode, RECOMMENDATIONS,
};
use crate::ui::{
    components::{kpi_card::KpiCard, progress_bar::ProgressBar},
    theme::{self, Tone},
};

#[derive(Clone, Default, PartialEq)]
struct CalculatorFields {
    origin: String,
    destination: String,
    distance: String,
    weight: String,
    transport_mode: String,
    fuel_type: String,
}

impl CalculatorFields {
    fn inputs(&self) -> ShipmentInputs {
        ShipmentInputs::from_raw(&self.distance, &self.weight, &self.transport_mode, &self.fuel_type)
    }

    fn lane(&self) -> Option<String> {
        let origin = self.origin.trim();
        let destination = self.destination.trim();
        (!origin.is_empty() && !destination.is_empty()).then(|| format!("{origin} → {destination}"))
    }
}

#[component]
pub fn CalculatorPage() -> Element {
    let mut fields = use_signal(CalculatorFields::default);
    let mut result = use_signal(|| None::<EmissionResult>);

    let inputs = fields.with(|f| f.inputs());
    let ready = inputs.is_complete();
    let lane = fields.with(|f| f.lane());
    let current = fields();

    rsx! {
        div { class: "space-y-8",
            div {
                h2 { class: "{theme::PAGE_TITLE}", "Emission Calculator" }
                p { class: "mt-1 text-sm {theme::TEXT_MUTED}",
                    "Estimate the CO₂ footprint of a single shipment and what optimization could save."
                }
            }

            div { class: "grid gap-6 lg:grid-cols-2",
                section { class: "{theme::PANEL} p-5 space-y-4",
                    h3 { class: "{theme::SECTION_TITLE}", "Shipment Details" }
                    div { class: "grid grid-cols-2 gap-4",
                        label {
                            span { class: "{theme::LABEL}", "Origin" }
                            input {
                                class: "{theme::INPUT}",
                                placeholder: "Los Angeles, CA",
                                value: "{current.origin}",
                                oninput: move |evt| fields.with_mut(|f| f.origin = evt.value()),
                            }
                        }
                        label {
                            span { class: "{theme::LABEL}", "Destination" }
                            input {
                                class: "{theme::INPUT}",
                                placeholder: "New York, NY",
                                value: "{current.destination}",
                                oninput: move |evt| fields.with_mut(|f| f.destination = evt.value()),
                            }
                        }
                        label {
                            span { class: "{theme::LABEL}", "Distance (km)" }
                            input {
                                class: "{theme::INPUT}",
                                r#type: "number",
                                min: "0",
                                value: "{current.distance}",
                                oninput: move |evt| fields.with_mut(|f| f.distance = evt.value()),
                            }
                        }
                        label {
                            span { class: "{theme::LABEL}", "Weight (tons)" }
                            input {
                                class: "{theme::INPUT}",
                                r#type: "number",
                                min: "0",
                                value: "{current.weight}",
                                oninput: move |evt| fields.with_mut(|f| f.weight = evt.value()),
                            }
                        }
                        label {
                            span { class: "{theme::LABEL}", "Transport Mode" }
                            select {
                                class: "{theme::INPUT}",
                                value: "{current.transport_mode}",
                                onchange: move |evt| fields.with_mut(|f| f.transport_mode = evt.value()),
                                option { value: "", "Select mode" }
                                for mode in TransportMode::ALL {
                                    option { key: "{mode.as_str()}", value: mode.as_str(), {format!("{} {}", mode.icon(), mode.label())} }
                                }
                            }
                        }
                        label {
                            span { class: "{theme::LABEL}", "Fuel Type" }
                            select {
                                class: "{theme::INPUT}",
                                value: "{current.fuel_type}",
                                onchange: move |evt| fields.with_mut(|f| f.fuel_type = evt.value()),
                                option { value: "", "Select fuel" }
                                for fuel in FuelType::ALL {
                                    option { key: "{fuel.as_str()}", value: fuel.as_str(), "{fuel.label()}" }
                                }
                            }
                        }
                    }
                    div { class: "flex gap-3",
                        button {
                            class: "{theme::BTN_PRIMARY}",
                            disabled: !ready,
                            onclick: move |_| {
                                let inputs = fields.with_peek(|f| f.inputs());
                                result.set(calculate_emissions(&inputs));
                            },
                            "Calculate Emissions"
                        }
                        button {
                            class: "{theme::BTN_OUTLINE}",
                            onclick: move |_| {
                                fields.set(CalculatorFields::default());
                                result.set(None);
                            },
                            "Reset"
                        }
                    }
                }

                section { class: "{theme::PANEL_ACCENT} p-5 space-y-4",
                    h3 { class: "{theme::SECTION_TITLE}", "Results" }
                    match result() {
                        Some(outcome) => rsx! {
                            ResultView { outcome, lane: lane.clone() }
                        },
                        None => rsx! {
                            p { class: "text-sm {theme::TEXT_MUTED}",
                                "Enter distance, weight, transport mode and fuel type, then calculate."
                            }
                        },
                    }
                }
            }
        }
    }
}

#[component]
fn ResultView(outcome: EmissionResult, lane: Option<String>) -> Element {
    let emissions = format!("{:.2} kg", outcome.emissions);
    let optimized = format!("{:.2} kg", outcome.optimized_emissions);
    let savings = format!("{:.1}%", outcome.savings);

    rsx! {
        if let Some(lane) = lane {
            p { class: "text-sm {theme::TEXT_SECONDARY}", "📍 {lane}" }
        }
        div { class: "grid gap-4 sm:grid-cols-3",
            KpiCard { title: "Current", value: emissions, description: "kg CO₂".to_string(), tone: Tone::Negative }
            KpiCard { title: "Optimized", value: optimized, description: "kg CO₂".to_string(), tone: Tone::Positive }
            KpiCard { title: "Potential Savings", value: savings, tone: Tone::Accent }
        }
        ProgressBar { value: outcome.savings }
        div {
            h4 { class: "{theme::LABEL}", "Recommendations" }
            ul { class: "mt-2 space-y-1 text-sm {theme::TEXT_SECONDARY}",
                for tip in RECOMMENDATIONS {
                    li { key: "{tip}", "{tip}" }
                }
            }
        }
    }
}
