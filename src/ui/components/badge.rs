use dioxus::prelude::*;

use crate::domain::dashboard::score_tier;
use crate::ui::theme::{self, Tone};

#[component]
pub fn Badge(label: String, tone: Tone) -> Element {
    rsx! {
        span {
            class: "inline-flex items-center rounded-full border px-2 py-0.5 text-xs font-medium {theme::badge(tone)}",
            "{label}"
        }
    }
}

/// Supplier score out of 100, coloured by tier.
#[component]
pub fn ScoreBadge(score: u8) -> Element {
    rsx! {
        Badge { label: format!("{score}/100"), tone: Tone::from(score_tier(score)) }
    }
}
