use dioxus::prelude::*;

use crate::ui::theme::{self, Tone};

/// Horizontal bar; `value` is a percentage and is clamped to 0..=100.
#[component]
pub fn ProgressBar(value: f64, #[props(default = Tone::Positive)] tone: Tone) -> Element {
    let width = if value.is_finite() {
        value.clamp(0.0, 100.0)
    } else {
        0.0
    };
    let style = format!("width: {width:.1}%");
    rsx! {
        div { class: "h-2 w-full overflow-hidden rounded-full bg-slate-800",
            div {
                class: "h-full rounded-full {theme::bar_fill(tone)}",
                style: "{style}",
            }
        }
    }
}
