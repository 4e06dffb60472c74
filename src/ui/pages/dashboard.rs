use dioxus::prelude::*;

use crate::domain::dashboard::{carbon_snapshot, recent_optimizations};
use crate::app::Backend;
use crate::domain::AppState;
use crate::ui::{
    components::{
        badge::Badge,
        kpi_card::KpiCard,
        progress_bar::ProgressBar,
        toast::{push_toast, ToastKind, ToastMessage},
    },
    theme::{self, Tone},
};

#[component]
pub fn DashboardPage() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let backend = use_context::<Backend>();
    let snapshot = carbon_snapshot();
    let optimizations = recent_optimizations();

    let (scenario_count, report_count, active_integrations, signed_in) = state.with(|s| {
        (
            s.scenarios.len(),
            s.reports.len(),
            s.integrations.iter().filter(|i| i.is_active).count(),
            s.is_signed_in(),
        )
    });

    let trend = format!("{:+.1}%", snapshot.monthly_trend);
    let progress = format!("{:.1}%", snapshot.current_reduction);
    let target = format!("{:.0}%", snapshot.target_reduction);
    let remaining = format!("{:.1}% to go", snapshot.remaining_reduction());

    rsx! {
        div { class: "space-y-8",
            div { class: "flex flex-wrap items-end justify-between gap-4",
                div {
                    h2 { class: "{theme::PAGE_TITLE}", "Carbon Overview" }
                    p { class: "mt-1 text-sm {theme::TEXT_MUTED}",
                        "Monthly emissions across your logistics network."
                    }
                }
                div { class: "flex gap-2",
                    button {
                        class: "{theme::BTN_SMALL}",
                        onclick: move |_| push_toast(
                            toasts,
                            ToastKind::Info,
                            "Use the tabs above to optimize routes, score suppliers, model scenarios and offset what remains.",
                        ),
                        "❔ Help"
                    }
                    button {
                        class: "{theme::BTN_SMALL}",
                        onclick: move |_| {
                            state.with_mut(|s| s.cache.clear());
                            if let Ok(client) = backend.client() {
                                spawn(async move { client.clear_cache().await });
                            }
                            push_toast(toasts, ToastKind::Info, "Cached data cleared; pages will refetch on next visit.");
                        },
                        "🧹 Clear cache"
                    }
                    button {
                        class: "{theme::BTN_SMALL}",
                        onclick: move |_| {
                            state.with_mut(|s| s.show_hero = true);
                            crate::app::persist_user_state(&state);
                        },
                        "↺ Show welcome"
                    }
                }
            }

            div { class: "grid gap-4 sm:grid-cols-2 lg:grid-cols-4",
                KpiCard {
                    title: "Total Emissions",
                    value: format!("{} t", snapshot.total_emissions),
                    description: format!("{trend} vs last month"),
                    icon: "🏭",
                }
                KpiCard {
                    title: "Reduced",
                    value: format!("{} t", snapshot.reduced_emissions),
                    description: "CO₂ avoided this month".to_string(),
                    icon: "📉",
                    tone: Tone::Positive,
                }
                KpiCard {
                    title: "Optimized Routes",
                    value: snapshot.optimized_routes.to_string(),
                    description: "AI-optimized this month".to_string(),
                    icon: "🛣️",
                    tone: Tone::Accent,
                }
                KpiCard {
                    title: "Carbon Credits",
                    value: snapshot.carbon_credits.to_string(),
                    description: "Verified credits held".to_string(),
                    icon: "🌿",
                    tone: Tone::Positive,
                }
            }

            div { class: "grid gap-6 lg:grid-cols-2",
                section { class: "{theme::PANEL} p-5 space-y-4",
                    h3 { class: "{theme::SECTION_TITLE}", "Reduction Target" }
                    div { class: "flex items-baseline justify-between",
                        span { class: "text-3xl font-semibold text-emerald-300", "{progress}" }
                        span { class: "text-sm {theme::TEXT_MUTED}", "Target {target}" }
                    }
                    ProgressBar { value: snapshot.progress_pct() / snapshot.target_reduction * 100.0 }
                    p { class: "text-xs {theme::TEXT_MUTED}", "{remaining}" }
                }

                section { class: "{theme::PANEL} p-5 space-y-3",
                    h3 { class: "{theme::SECTION_TITLE}", "Recent Optimizations" }
                    for optimization in optimizations {
                        div {
                            key: "{optimization.route}",
                            class: "flex items-center justify-between rounded-lg border border-slate-800 bg-slate-950/60 px-3 py-2",
                            div {
                                p { class: "text-sm font-medium text-slate-200", "{optimization.route}" }
                                p { class: "text-xs {theme::TEXT_MUTED}", "Saved {optimization.savings}" }
                            }
                            Badge {
                                label: format!("{}% efficient", optimization.efficiency),
                                tone: if optimization.is_highly_efficient() { Tone::Positive } else { Tone::Caution },
                            }
                        }
                    }
                }
            }

            if signed_in {
                section { class: "{theme::PANEL_ACCENT} p-5",
                    h3 { class: "{theme::SECTION_TITLE}", "Your Workspace" }
                    div { class: "mt-3 grid gap-4 sm:grid-cols-3 text-sm",
                        p { class: "{theme::TEXT_SECONDARY}", "🧪 {scenario_count} saved scenarios" }
                        p { class: "{theme::TEXT_SECONDARY}", "📄 {report_count} audit reports" }
                        p { class: "{theme::TEXT_SECONDARY}", "🔌 {active_integrations} active integrations" }
                    }
                }
            }
        }
    }
}
