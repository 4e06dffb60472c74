use dioxus::prelude::*;

use crate::domain::{marketplace::offset_type_icon, CarbonOffset};
use crate::ui::{
    components::badge::Badge,
    theme::{self, Tone},
};

#[component]
pub fn OffsetCard(offset: CarbonOffset, on_purchase: EventHandler<CarbonOffset>) -> Element {
    let icon = offset_type_icon(&offset.offset_type);
    let price = format!("${:.2}", offset.price_per_ton);
    let tons = format!("{:.0}", offset.available_tons);
    let purchased = offset.clone();

    rsx! {
        div { class: "{theme::PANEL} flex flex-col gap-3 p-5",
            div { class: "flex items-start justify-between gap-3",
                div { class: "flex items-center gap-3",
                    span { class: "text-2xl", "{icon}" }
                    div {
                        h3 { class: "text-sm font-semibold text-slate-100", "{offset.provider_name}" }
                        p { class: "text-xs {theme::TEXT_MUTED}", "{offset.offset_type}" }
                    }
                }
                if let Some(certification) = offset.certification.clone() {
                    Badge { label: certification, tone: Tone::Positive }
                }
            }
            if let Some(description) = offset.project_description.clone() {
                p { class: "text-sm {theme::TEXT_SECONDARY}", "{description}" }
            }
            div { class: "grid grid-cols-2 gap-3 text-sm",
                div {
                    p { class: "{theme::LABEL}", "Price per ton" }
                    p { class: "mt-1 font-semibold text-emerald-300", "{price}" }
                }
                div {
                    p { class: "{theme::LABEL}", "Available" }
                    p { class: "mt-1 font-semibold text-slate-200", "{tons} tons" }
                }
            }
            button {
                class: "{theme::BTN_PRIMARY}",
                onclick: move |_| on_purchase.call(purchased.clone()),
                "Purchase Credits"
            }
        }
    }
}
