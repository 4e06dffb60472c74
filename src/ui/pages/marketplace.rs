//! Carbon offset marketplace with type, certification and price filters.

use dioxus::prelude::*;

use crate::domain::{
    apply_filters,
    marketplace::{CERTIFICATIONS, OFFSET_TYPES, PRICE_RANGES},
    total_available_tons, AppState, CarbonOffset, OffsetFilter,
};
use crate::ui::{
    components::{
        kpi_card::KpiCard,
        offset_card::OffsetCard,
        toast::{push_toast, ToastKind, ToastMessage},
    },
    theme::{self, Tone},
};

const OFFSET_FACTS: [(&str, &str); 3] = [
    (
        "What is a carbon offset?",
        "One credit represents one metric ton of CO₂ removed or avoided by a verified project.",
    ),
    (
        "Why certification matters",
        "Gold Standard, Verra VCS, CDM and Plan Vivo audit projects for additionality and permanence.",
    ),
    (
        "Reduce first, offset the rest",
        "Offsets complement route and supplier optimization; they do not replace it.",
    ),
];

#[component]
pub fn MarketplacePage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let mut filter = use_signal(OffsetFilter::default);

    let current = filter();
    let visible = state.with(|s| apply_filters(&s.offsets, &current));
    let total_tons = format!("{:.0}", total_available_tons(&visible));
    let listing_count = visible.len().to_string();
    let cheapest = visible
        .iter()
        .map(|offset| offset.price_per_ton)
        .fold(None, |best: Option<f64>, price| Some(best.map_or(price, |b| b.min(price))))
        .map(|price| format!("${price:.2}"))
        .unwrap_or_else(|| "n/a".to_string());

    let on_purchase = move |offset: CarbonOffset| {
        tracing::info!(offset = %offset.id, provider = %offset.provider_name, "purchase requested");
        push_toast(
            toasts,
            ToastKind::Success,
            format!("Purchase request sent to {}. A specialist will follow up.", offset.provider_name),
        );
    };

    rsx! {
        div { class: "space-y-8",
            div {
                h2 { class: "{theme::PAGE_TITLE}", "Carbon Offset Marketplace" }
                p { class: "mt-1 text-sm {theme::TEXT_MUTED}",
                    "Offset remaining emissions with verified projects."
                }
            }

            div { class: "grid gap-4 sm:grid-cols-3",
                KpiCard { title: "Listings", value: listing_count, icon: "🗂️" }
                KpiCard { title: "Available", value: format!("{total_tons} t"), icon: "🌍", tone: Tone::Positive }
                KpiCard { title: "From", value: cheapest, description: "per ton CO₂".to_string(), icon: "💲", tone: Tone::Accent }
            }

            section { class: "{theme::PANEL} p-5",
                div { class: "grid gap-4 sm:grid-cols-4 items-end",
                    label {
                        span { class: "{theme::LABEL}", "Project Type" }
                        select {
                            class: "{theme::INPUT}",
                            value: "{current.offset_type}",
                            onchange: move |evt| filter.with_mut(|f| f.offset_type = evt.value()),
                            option { value: "", "All types" }
                            for kind in OFFSET_TYPES {
                                option { key: "{kind}", value: kind, "{kind}" }
                            }
                        }
                    }
                    label {
                        span { class: "{theme::LABEL}", "Certification" }
                        select {
                            class: "{theme::INPUT}",
                            value: "{current.certification}",
                            onchange: move |evt| filter.with_mut(|f| f.certification = evt.value()),
                            option { value: "", "All certifications" }
                            for certification in CERTIFICATIONS {
                                option { key: "{certification}", value: certification, "{certification}" }
                            }
                        }
                    }
                    label {
                        span { class: "{theme::LABEL}", "Price Range" }
                        select {
                            class: "{theme::INPUT}",
                            value: "{current.price_range}",
                            onchange: move |evt| filter.with_mut(|f| f.price_range = evt.value()),
                            option { value: "", "Any price" }
                            for (value, label) in PRICE_RANGES {
                                option { key: "{value}", value, "{label}" }
                            }
                        }
                    }
                    button {
                        class: "{theme::BTN_OUTLINE}",
                        disabled: current.is_empty(),
                        onclick: move |_| filter.set(OffsetFilter::default()),
                        "Clear Filters"
                    }
                }
            }

            if visible.is_empty() {
                p { class: "text-sm {theme::TEXT_MUTED}", "No listings match these filters." }
            }
            div { class: "grid gap-6 md:grid-cols-2 xl:grid-cols-3",
                for offset in visible {
                    OffsetCard { key: "{offset.id}", offset, on_purchase }
                }
            }

            section { class: "{theme::PANEL_ACCENT} p-5",
                h3 { class: "{theme::SECTION_TITLE}", "Understanding Offsets" }
                div { class: "mt-4 grid gap-4 md:grid-cols-3",
                    for (title, body) in OFFSET_FACTS {
                        div { key: "{title}",
                            h4 { class: "text-sm font-semibold text-emerald-300", "{title}" }
                            p { class: "mt-1 text-sm {theme::TEXT_SECONDARY}", "{body}" }
                        }
                    }
                }
            }
        }
    }
}
