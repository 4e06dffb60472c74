//! Shared class helpers so panels, badges and forms look the same on every page.

use crate::domain::{
    dashboard::{ScoreTier, StepStatus},
    ImpactTone, StrengthLevel,
};

/// Semantic colour of a badge, tile or bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Caution,
    Negative,
    Accent,
    Neutral,
}

impl From<ImpactTone> for Tone {
    fn from(tone: ImpactTone) -> Self {
        match tone {
            ImpactTone::Good => Tone::Positive,
            ImpactTone::Warning => Tone::Caution,
            ImpactTone::Bad => Tone::Negative,
        }
    }
}

impl From<ScoreTier> for Tone {
    fn from(tier: ScoreTier) -> Self {
        match tier {
            ScoreTier::High => Tone::Positive,
            ScoreTier::Medium => Tone::Caution,
            ScoreTier::Low => Tone::Negative,
        }
    }
}

impl From<StrengthLevel> for Tone {
    fn from(level: StrengthLevel) -> Self {
        match level {
            StrengthLevel::Strong => Tone::Positive,
            StrengthLevel::Fair => Tone::Accent,
            StrengthLevel::Moderate => Tone::Caution,
            StrengthLevel::Weak => Tone::Negative,
        }
    }
}

impl From<StepStatus> for Tone {
    fn from(status: StepStatus) -> Self {
        match status {
            StepStatus::Completed => Tone::Positive,
            StepStatus::Current => Tone::Accent,
            StepStatus::Pending => Tone::Neutral,
        }
    }
}

/// Badge tone for a stored report type; unknown types stay neutral.
pub fn report_type_tone(report_type: &str) -> Tone {
    match report_type {
        "annual" => Tone::Accent,
        "quarterly" => Tone::Positive,
        "monthly" => Tone::Caution,
        "scope3" => Tone::Negative,
        _ => Tone::Neutral,
    }
}

pub fn badge(tone: Tone) -> &'static str {
    match tone {
        Tone::Positive => "border-emerald-500/40 bg-emerald-500/10 text-emerald-300",
        Tone::Caution => "border-amber-500/40 bg-amber-500/10 text-amber-300",
        Tone::Negative => "border-rose-500/40 bg-rose-500/10 text-rose-300",
        Tone::Accent => "border-sky-500/40 bg-sky-500/10 text-sky-300",
        Tone::Neutral => "border-slate-600/60 bg-slate-700/40 text-slate-300",
    }
}

pub fn tile(tone: Tone) -> &'static str {
    match tone {
        Tone::Positive => "border-emerald-500/40 bg-emerald-500/10 text-emerald-200",
        Tone::Caution => "border-amber-500/40 bg-amber-500/10 text-amber-200",
        Tone::Negative => "border-rose-500/40 bg-rose-500/10 text-rose-200",
        Tone::Accent => "border-sky-500/40 bg-sky-500/10 text-sky-200",
        Tone::Neutral => "border-slate-800 bg-slate-900/60 text-slate-200",
    }
}

pub fn bar_fill(tone: Tone) -> &'static str {
    match tone {
        Tone::Positive => "bg-emerald-500",
        Tone::Caution => "bg-amber-500",
        Tone::Negative => "bg-rose-500",
        Tone::Accent => "bg-sky-500",
        Tone::Neutral => "bg-slate-500",
    }
}

pub fn text(tone: Tone) -> &'static str {
    match tone {
        Tone::Positive => "text-emerald-400",
        Tone::Caution => "text-amber-400",
        Tone::Negative => "text-rose-400",
        Tone::Accent => "text-sky-400",
        Tone::Neutral => "text-slate-400",
    }
}

pub const PANEL: &str = "rounded-xl border border-slate-800 bg-slate-900/40";
pub const PANEL_ACCENT: &str = "rounded-xl border border-emerald-800/50 bg-slate-900/40";
pub const SECTION_TITLE: &str = "text-sm font-semibold uppercase tracking-wide text-slate-500";
pub const PAGE_TITLE: &str = "text-2xl font-semibold tracking-tight text-slate-100";
pub const LABEL: &str = "block text-xs font-semibold uppercase text-slate-500";
pub const INPUT: &str = "mt-1 w-full rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-emerald-500 focus:outline-none";
pub const TEXT_MUTED: &str = "text-slate-500";
pub const TEXT_SECONDARY: &str = "text-slate-300";

pub const BTN_PRIMARY: &str = "rounded-lg bg-emerald-500 px-4 py-2 text-sm font-semibold text-white hover:bg-emerald-400 disabled:cursor-not-allowed disabled:opacity-50";
pub const BTN_OUTLINE: &str = "rounded-lg border border-slate-600 px-4 py-2 text-sm font-semibold text-slate-200 hover:bg-slate-800 disabled:cursor-not-allowed disabled:opacity-50";
pub const BTN_DANGER: &str = "rounded-lg border border-rose-500/40 px-4 py-2 text-sm font-semibold text-rose-200 hover:bg-rose-500/10";
pub const BTN_SMALL: &str = "rounded px-2 py-1 text-xs font-semibold border border-slate-700 text-slate-300 hover:border-emerald-600 hover:text-emerald-300 disabled:cursor-not-allowed disabled:opacity-50";

pub fn nav_button(active: bool) -> &'static str {
    if active {
        "rounded-lg border border-emerald-500/60 bg-emerald-500/15 px-3 py-2 text-sm font-semibold text-emerald-300 nav-glow"
    } else {
        "rounded-lg border border-transparent px-3 py-2 text-sm text-slate-400 transition hover:border-slate-700 hover:bg-slate-900/80 hover:text-slate-200"
    }
}

pub fn toggle(active: bool) -> &'static str {
    if active {
        "relative inline-flex h-5 w-9 items-center rounded-full bg-emerald-500 transition"
    } else {
        "relative inline-flex h-5 w-9 items-center rounded-full bg-slate-700 transition"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_report_types_are_neutral() {
        assert_eq!(report_type_tone("scope3"), Tone::Negative);
        assert_eq!(report_type_tone("weekly"), Tone::Neutral);
    }

    #[test]
    fn impact_tones_map_to_semantic_colours() {
        assert_eq!(Tone::from(ImpactTone::Good), Tone::Positive);
        assert_eq!(Tone::from(ImpactTone::Bad), Tone::Negative);
        assert!(badge(Tone::Positive).contains("emerald"));
    }
}
