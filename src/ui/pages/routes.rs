//! Route optimizer: original vs AI-optimized route and live progress.

use dioxus::prelude::*;

use crate::domain::dashboard::{route_comparison, route_steps, RouteFigures, StepStatus};
use crate::ui::{
    components::{
        badge::Badge,
        kpi_card::KpiCard,
        toast::{push_toast, ToastKind, ToastMessage},
    },
    theme::{self, Tone},
};

#[component]
pub fn RoutesPage() -> Element {
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let comparison = route_comparison();
    let steps = route_steps();
    let leg_total: f64 = steps.iter().map(|step| step.emissions).sum();
    let leg_total = format!("{leg_total:.1} t CO₂ so far");

    rsx! {
        div { class: "space-y-8",
            div { class: "flex flex-wrap items-end justify-between gap-4",
                div {
                    h2 { class: "{theme::PAGE_TITLE}", "Route Optimizer" }
                    p { class: "mt-1 text-sm {theme::TEXT_MUTED}", "Los Angeles → New York, freight corridor I-40" }
                }
                button {
                    class: "{theme::BTN_PRIMARY}",
                    onclick: move |_| push_toast(
                        toasts,
                        ToastKind::Success,
                        "Optimized route applied to the active shipment.",
                    ),
                    "Apply Optimized Route"
                }
            }

            div { class: "grid gap-4 sm:grid-cols-3",
                KpiCard {
                    title: "Emissions Saved",
                    value: format!("{:.1}%", comparison.emissions_saved),
                    icon: "🌱",
                    tone: Tone::Positive,
                }
                KpiCard {
                    title: "Cost Saved",
                    value: format!("{:.1}%", comparison.cost_saved),
                    icon: "💰",
                    tone: Tone::Accent,
                }
                KpiCard {
                    title: "Time Saved",
                    value: format!("{:.1}%", comparison.time_saved),
                    icon: "⏱️",
                    tone: Tone::Caution,
                }
            }

            div { class: "grid gap-6 lg:grid-cols-2",
                RouteCard { title: "Original Route", figures: comparison.original.clone(), optimized: false }
                RouteCard { title: "AI-Optimized Route", figures: comparison.optimized.clone(), optimized: true }
            }

            section { class: "{theme::PANEL} p-5",
                div { class: "flex items-center justify-between",
                    h3 { class: "{theme::SECTION_TITLE}", "Live Route Progress" }
                    span { class: "text-xs {theme::TEXT_MUTED}", "{leg_total}" }
                }
                ol { class: "mt-4 space-y-2",
                    for step in steps {
                        li {
                            key: "{step.city}",
                            class: "flex items-center justify-between rounded-lg border border-slate-800 bg-slate-950/60 px-3 py-2",
                            div { class: "flex items-center gap-3",
                                span { class: "text-lg", {step_marker(step.status)} }
                                span { class: "text-sm text-slate-200", "{step.city}" }
                            }
                            div { class: "flex items-center gap-3",
                                if step.emissions > 0.0 {
                                    span { class: "text-xs {theme::TEXT_MUTED}", {format!("{:.1} t CO₂", step.emissions)} }
                                }
                                Badge { label: step.status.label().to_string(), tone: Tone::from(step.status) }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn step_marker(status: StepStatus) -> &'static str {
    match status {
        StepStatus::Completed => "✅",
        StepStatus::Current => "🚚",
        StepStatus::Pending => "⚪",
    }
}

#[component]
fn RouteCard(title: &'static str, figures: RouteFigures, optimized: bool) -> Element {
    let panel = if optimized { theme::PANEL_ACCENT } else { theme::PANEL };
    let rows = [
        ("Distance", figures.distance),
        ("Emissions", figures.emissions),
        ("Cost", figures.cost),
        ("Duration", figures.duration),
    ];
    rsx! {
        section { class: "{panel} p-5",
            div { class: "flex items-center justify-between",
                h3 { class: "{theme::SECTION_TITLE}", "{title}" }
                if optimized {
                    Badge { label: "Recommended", tone: Tone::Positive }
                }
            }
            dl { class: "mt-4 grid grid-cols-2 gap-4",
                for (label, value) in rows {
                    div { key: "{label}",
                        dt { class: "{theme::LABEL}", "{label}" }
                        dd { class: "mt-1 text-lg font-semibold text-slate-100", "{value}" }
                    }
                }
            }
        }
    }
}
