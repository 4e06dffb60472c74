use dioxus::prelude::*;

use crate::app::Route;
use crate::domain::AppState;
use crate::ui::pages::HeroPage;
use crate::ui::theme;
use crate::util::version::{version_label, APP_NAME, APP_SHORT_NAME};

fn tabs() -> [(&'static str, &'static str, Route); 8] {
    [
        ("Dashboard", "📊", Route::Dashboard {}),
        ("Route Optimizer", "🛣️", Route::RouteOptimizer {}),
        ("Supplier Scoring", "🏢", Route::Suppliers {}),
        ("Calculator", "🧮", Route::Calculator {}),
        ("Scenarios", "🧪", Route::Scenarios {}),
        ("Reports", "📄", Route::Reports {}),
        ("Integrations", "🔌", Route::Integrations {}),
        ("Offsets", "🌿", Route::Marketplace {}),
    ]
}

#[component]
pub fn Shell(children: Element) -> Element {
    let state = use_context::<Signal<AppState>>();
    let current_route = use_route::<Route>();
    let nav = use_navigator();

    if state.with(|s| s.show_hero) {
        return rsx! {
            div { class: "app-shell min-h-screen bg-slate-950 text-slate-100 font-sans",
                HeroPage {}
            }
        };
    }

    let account_label = state.with(|s| {
        s.user_email()
            .map(str::to_string)
            .unwrap_or_else(|| "Sign in".to_string())
    });
    let on_dashboard = current_route == Route::Dashboard {};

    rsx! {
        div { class: "app-shell min-h-screen bg-slate-950 text-slate-100 font-sans",
            header {
                class: "border-b border-slate-900/60 bg-slate-950/90 backdrop-blur px-6 py-4",
                div { class: "mx-auto flex max-w-7xl flex-wrap items-center justify-between gap-4",
                    div { class: "flex items-center gap-3",
                        span { class: "text-2xl", "🌱" }
                        div {
                            h1 { class: "text-xl font-semibold tracking-tight text-emerald-300", "{APP_SHORT_NAME}" }
                            p { class: "text-xs text-slate-500", "{APP_NAME}" }
                        }
                        if !on_dashboard {
                            button {
                                class: "{theme::BTN_SMALL}",
                                onclick: move |_| { nav.push(Route::Dashboard {}); },
                                "🏠 Home"
                            }
                        }
                    }
                    nav { class: "flex flex-wrap gap-1",
                        for (label, icon, route) in tabs() {
                            NavButton {
                                key: "{label}",
                                active: current_route == route,
                                onclick: move |_| { nav.push(route.clone()); },
                                label: label.to_string(),
                                icon,
                            }
                        }
                    }
                    div { class: "flex items-center gap-2",
                        span {
                            class: "inline-flex items-center gap-1 rounded-full border border-emerald-500/40 bg-emerald-500/10 px-2 py-0.5 text-xs font-medium text-emerald-300",
                            span { class: "pulse-dot" }
                            "AI Active"
                        }
                        NavButton {
                            active: current_route == Route::Account {},
                            onclick: move |_| { nav.push(Route::Account {}); },
                            label: account_label,
                            icon: "👤",
                        }
                    }
                }
            }
            main { class: "mx-auto max-w-7xl px-6 py-8",
                {children}
            }
            footer { class: "mx-auto max-w-7xl px-6 pb-6 text-right text-xs text-slate-600",
                "{version_label()}"
            }
        }
    }
}

#[component]
fn NavButton(
    active: bool,
    onclick: EventHandler<()>,
    label: String,
    icon: &'static str,
) -> Element {
    rsx! {
        button {
            class: "{theme::nav_button(active)}",
            onclick: move |_| onclick.call(()),
            span { class: "mr-1", "{icon}" }
            "{label}"
        }
    }
}
