//! Landing screen shown until the visitor enters the platform.

use dioxus::prelude::*;

use crate::app::persist_user_state;
use crate::domain::AppState;
use crate::ui::theme;
use crate::util::version::{APP_NAME, APP_SHORT_NAME};

#[component]
pub fn HeroPage() -> Element {
    let mut state = use_context::<Signal<AppState>>();

    rsx! {
        div { class: "hero-backdrop min-h-screen flex items-center justify-center p-8",
            div { class: "max-w-4xl w-full text-center",
                span {
                    class: "inline-flex items-center gap-2 rounded-full border border-emerald-500/40 bg-emerald-500/10 px-3 py-1 text-xs font-semibold text-emerald-300",
                    span { class: "pulse-dot" }
                    "AI-powered logistics optimization"
                }
                h1 { class: "hero-title mt-6 text-5xl font-bold tracking-tight", "{APP_SHORT_NAME}" }
                p { class: "mt-3 text-xl text-slate-300", "{APP_NAME}" }
                p { class: "mx-auto mt-4 max-w-2xl text-slate-400",
                    "Cut supply-chain emissions with route optimization, supplier scoring and verified carbon offsets, all from one dashboard."
                }

                div { class: "mt-10 grid grid-cols-1 gap-6 md:grid-cols-3",
                    HeroStat { value: "40%", caption: "Average emission reduction" }
                    HeroStat { value: "500+", caption: "Companies optimizing routes" }
                    HeroStat { value: "2.5M", caption: "Tons of CO₂ saved" }
                }

                button {
                    class: "{theme::BTN_PRIMARY} mt-12 px-8 py-3 text-base",
                    onclick: move |_| {
                        state.with_mut(|s| s.show_hero = false);
                        persist_user_state(&state);
                    },
                    "Enter CEOE Platform →"
                }
            }
        }
    }
}

#[component]
fn HeroStat(value: &'static str, caption: &'static str) -> Element {
    rsx! {
        div { class: "{theme::PANEL_ACCENT} p-6",
            p { class: "text-3xl font-bold text-emerald-300", "{value}" }
            p { class: "mt-2 text-sm {theme::TEXT_MUTED}", "{caption}" }
        }
    }
}
