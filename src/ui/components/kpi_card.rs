use dioxus::prelude::*;

use crate::ui::theme::{self, Tone};

#[component]
pub fn KpiCard(
    title: String,
    value: String,
    description: Option<String>,
    icon: Option<&'static str>,
    #[props(default = Tone::Neutral)] tone: Tone,
) -> Element {
    let value_class = match tone {
        Tone::Neutral => theme::TEXT_SECONDARY,
        other => theme::text(other),
    };
    rsx! {
        div {
            class: "{theme::PANEL} p-4 shadow-sm",
            div { class: "flex items-center justify-between",
                h3 { class: "{theme::LABEL}", "{title}" }
                if let Some(icon) = icon {
                    span { class: "text-lg", "{icon}" }
                }
            }
            p { class: "mt-2 text-2xl font-semibold {value_class}", "{value}" }
            if let Some(desc) = description {
                p { class: "mt-1 text-xs {theme::TEXT_MUTED}", "{desc}" }
            }
        }
    }
}
