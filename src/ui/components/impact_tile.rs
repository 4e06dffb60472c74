use dioxus::prelude::*;

use crate::domain::{impact_tone, ImpactDimension};
use crate::ui::theme::{self, Tone};

#[component]
pub fn ImpactTile(dimension: ImpactDimension, value: f64) -> Element {
    let impact = impact_tone(value, dimension);
    let (label, unit) = match dimension {
        ImpactDimension::Carbon => ("Carbon", "kg CO₂"),
        ImpactDimension::Cost => ("Cost", "$"),
        ImpactDimension::Time => ("Time", "h"),
    };
    let trend = if impact.is_good() { "↘" } else { "↗" };
    let value_display = format!("{value:.1}");

    rsx! {
        div {
            class: "rounded-xl border px-3 py-2 {theme::tile(Tone::from(impact))}",
            div { class: "flex items-center justify-between",
                span { class: "text-xs font-semibold uppercase tracking-wide", "{label}" }
                span { class: "text-sm", "{trend}" }
            }
            p { class: "mt-1 text-lg font-semibold", "{value_display}" }
            p { class: "text-xs opacity-80", "{unit}" }
        }
    }
}
