use std::time::Duration;

use dioxus::prelude::*;
use uuid::Uuid;

const MAX_TOASTS: usize = 5;
const TOAST_AUTO_DISMISS: Duration = Duration::from_secs(6);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastKind {
    /// Border/background/text classes and the leading icon.
    fn style(&self) -> (&'static str, &'static str) {
        match self {
            ToastKind::Info => ("border-sky-500/40 bg-sky-500/10 text-sky-100", "ℹ️"),
            ToastKind::Success => ("border-emerald-500/40 bg-emerald-500/10 text-emerald-100", "✅"),
            ToastKind::Warning => ("border-amber-500/40 bg-amber-500/10 text-amber-100", "⚠️"),
            ToastKind::Error => ("border-rose-500/40 bg-rose-500/10 text-rose-100", "⛔"),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ToastKind::Info => "Notice",
            ToastKind::Success => "Success",
            ToastKind::Warning => "Warning",
            ToastKind::Error => "Error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    pub id: Uuid,
    pub kind: ToastKind,
    pub text: String,
}

impl ToastMessage {
    pub fn new(kind: ToastKind, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            text: text.into(),
        }
    }
}

/// Appends a toast, dropping the oldest once `MAX_TOASTS` are shown.
fn enqueue(entries: &mut Vec<ToastMessage>, message: ToastMessage) {
    if entries.len() >= MAX_TOASTS {
        entries.remove(0);
    }
    entries.push(message);
}

pub fn push_toast(
    mut toasts: Signal<Vec<ToastMessage>>,
    kind: ToastKind,
    message: impl Into<String>,
) {
    let text = message.into();
    if kind == ToastKind::Error {
        tracing::warn!(message = %text, "error toast");
    }
    toasts.with_mut(|entries| enqueue(entries, ToastMessage::new(kind, text)));
}

fn dismiss(mut toasts: Signal<Vec<ToastMessage>>, id: Uuid) {
    toasts.with_mut(|entries| entries.retain(|toast| toast.id != id));
}

/// Bottom-centred stack of the queued notifications.
#[component]
pub fn Toast() -> Element {
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let queued = toasts();
    if queued.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { class: "pointer-events-none fixed inset-x-0 bottom-4 flex justify-center",
            ul { class: "space-y-3",
                for message in queued {
                    ToastCard { key: "{message.id}", message, toasts }
                }
            }
        }
    }
}

#[component]
fn ToastCard(message: ToastMessage, toasts: Signal<Vec<ToastMessage>>) -> Element {
    let id = message.id;
    let _expire = use_future(move || async move {
        tokio::time::sleep(TOAST_AUTO_DISMISS).await;
        dismiss(toasts, id);
    });
    let (palette, icon) = message.kind.style();

    rsx! {
        li {
            class: "pointer-events-auto flex items-start gap-3 rounded-xl border px-4 py-3 shadow-lg backdrop-blur {palette}",
            span { class: "text-lg", "{icon}" }
            div {
                p { class: "text-sm font-semibold", "{message.kind.title()}" }
                p { class: "text-sm", "{message.text}" }
            }
            button {
                class: "ml-3 text-xs uppercase tracking-wide text-slate-300 hover:text-white",
                onclick: move |_| dismiss(toasts, id),
                "Dismiss"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_keeps_the_newest_five() {
        let mut entries = Vec::new();
        for i in 0..7 {
            enqueue(&mut entries, ToastMessage::new(ToastKind::Info, format!("#{i}")));
        }
        assert_eq!(entries.len(), MAX_TOASTS);
        assert_eq!(entries[0].text, "#2");
        assert_eq!(entries[4].text, "#6");
    }

    #[test]
    fn error_toasts_are_red() {
        let message = ToastMessage::new(ToastKind::Error, "User not authenticated");
        assert_eq!(message.kind.title(), "Error");
        assert!(message.kind.style().0.contains("rose"));
    }
}
