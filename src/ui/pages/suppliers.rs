use dioxus::prelude::*;

use crate::domain::dashboard::{supplier_overview, suppliers, Supplier, SupplierStatus};
use crate::ui::{
    components::{badge::{Badge, ScoreBadge}, kpi_card::KpiCard, progress_bar::ProgressBar},
    theme::{self, Tone},
};

#[component]
pub fn SuppliersPage() -> Element {
    let suppliers = suppliers();
    let overview = supplier_overview(&suppliers);

    rsx! {
        div { class: "space-y-8",
            div {
                h2 { class: "{theme::PAGE_TITLE}", "Supplier Scoring" }
                p { class: "mt-1 text-sm {theme::TEXT_MUTED}",
                    "Carriers ranked by carbon performance, reliability and cost efficiency."
                }
            }

            div { class: "grid gap-4 sm:grid-cols-2 lg:grid-cols-4",
                KpiCard { title: "Verified Suppliers", value: overview.verified.to_string(), icon: "✅", tone: Tone::Positive }
                KpiCard { title: "Avg Carbon Score", value: overview.average_carbon_score.to_string(), icon: "🌱" }
                KpiCard { title: "Avg Reliability", value: format!("{}%", overview.average_reliability), icon: "📈", tone: Tone::Accent }
                KpiCard { title: "Certifications", value: overview.total_certifications.to_string(), icon: "🏅" }
            }

            div { class: "grid gap-6 lg:grid-cols-2",
                for supplier in suppliers {
                    SupplierCard { key: "{supplier.id}", supplier }
                }
            }
        }
    }
}

#[component]
fn SupplierCard(supplier: Supplier) -> Element {
    let (status_label, status_tone) = match supplier.status {
        SupplierStatus::Verified => ("Verified", Tone::Positive),
        SupplierStatus::Pending => ("Pending review", Tone::Caution),
    };
    let metrics = [
        ("Carbon", supplier.carbon_score),
        ("Reliability", supplier.reliability_score),
        ("Cost efficiency", supplier.cost_efficiency),
    ];

    rsx! {
        section { class: "{theme::PANEL} p-5 space-y-4",
            div { class: "flex items-start justify-between gap-3",
                div {
                    h3 { class: "text-base font-semibold text-slate-100", "{supplier.name}" }
                    p { class: "text-xs {theme::TEXT_MUTED}", "📍 {supplier.location} · {supplier.emission_rate}" }
                }
                div { class: "flex items-center gap-2",
                    Badge { label: status_label.to_string(), tone: status_tone }
                    ScoreBadge { score: supplier.carbon_score }
                }
            }
            div { class: "space-y-2",
                for (label, score) in metrics {
                    div { key: "{label}",
                        div { class: "flex justify-between text-xs {theme::TEXT_SECONDARY}",
                            span { "{label}" }
                            span { "{score}" }
                        }
                        ProgressBar { value: score as f64, tone: Tone::from(crate::domain::dashboard::score_tier(score)) }
                    }
                }
            }
            div { class: "flex flex-wrap gap-2",
                for certification in supplier.certifications.iter().copied() {
                    Badge { key: "{certification}", label: certification.to_string(), tone: Tone::Accent }
                }
            }
        }
    }
}
