//! Sign-in, sign-up and company profile.

use dioxus::prelude::*;

use crate::app::{self, load_user_data, persist_user_state, ActionError, Backend};
use crate::domain::{password_strength, AppState, UserProfile};
use crate::infra::SignUpOutcome;
use crate::ui::{
    components::{
        badge::Badge,
        progress_bar::ProgressBar,
        toast::{push_toast, ToastKind, ToastMessage},
    },
    theme::{self, Tone},
};

#[derive(Clone, Copy, PartialEq, Eq)]
enum AuthMode {
    SignIn,
    SignUp,
}

#[derive(Clone, Debug, Default, PartialEq)]
struct ProfileFields {
    company_name: String,
    industry: String,
    role: String,
}

impl ProfileFields {
    fn from_profile(profile: Option<&UserProfile>) -> Self {
        let field = |value: Option<&String>| value.cloned().unwrap_or_default();
        match profile {
            Some(profile) => Self {
                company_name: field(profile.company_name.as_ref()),
                industry: field(profile.industry.as_ref()),
                role: field(profile.role.as_ref()),
            },
            None => Self::default(),
        }
    }

    fn apply_to(&self, base: Option<UserProfile>) -> UserProfile {
        let non_empty = |value: &str| {
            let value = value.trim();
            (!value.is_empty()).then(|| value.to_string())
        };
        UserProfile {
            company_name: non_empty(&self.company_name),
            industry: non_empty(&self.industry),
            role: non_empty(&self.role),
            ..base.unwrap_or_default()
        }
    }
}

async fn save_profile(backend: Backend, profile: UserProfile) -> Result<UserProfile, ActionError> {
    Ok(backend.client()?.save_profile(&profile).await?)
}

#[component]
pub fn AccountPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let signed_in = state.with(|s| s.is_signed_in());
    // Remount the profile form when a stored profile arrives.
    let profile_key = state.with(|s| {
        s.profile
            .as_ref()
            .and_then(|profile| profile.id.clone())
            .unwrap_or_default()
    });

    rsx! {
        div { class: "mx-auto max-w-xl space-y-8",
            if signed_in {
                ProfilePanel { key: "{profile_key}" }
            } else {
                AuthPanel {}
            }
        }
    }
}

#[component]
fn AuthPanel() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let backend = use_context::<Backend>();
    let mut mode = use_signal(|| AuthMode::SignIn);
    let mut email = use_signal(|| state.peek().last_email.clone().unwrap_or_default());
    let mut password = use_signal(String::new);
    let mut busy = use_signal(|| false);

    let strength = password.with(|p| password_strength(p));
    let strength_tone = Tone::from(strength.level);
    let configured = backend.is_configured();
    let is_sign_up = mode() == AuthMode::SignUp;

    let on_submit = move |_: MouseEvent| {
        if busy() {
            return;
        }
        let backend = backend.clone();
        let address = email.peek().trim().to_string();
        let secret = password.peek().clone();
        let current_mode = mode();
        if address.is_empty() || secret.is_empty() {
            push_toast(toasts, ToastKind::Warning, "Enter your e-mail and password.");
            return;
        }
        busy.set(true);
        spawn(async move {
            let client = match backend.client() {
                Ok(client) => client,
                Err(error) => {
                    push_toast(toasts, ToastKind::Error, error.to_string());
                    busy.set(false);
                    return;
                }
            };
            let session = match current_mode {
                AuthMode::SignIn => client.sign_in(&address, &secret).await.map(Some),
                AuthMode::SignUp => client.sign_up(&address, &secret).await.map(|outcome| match outcome {
                    SignUpOutcome::SignedIn(session) => Some(session),
                    SignUpOutcome::ConfirmationRequired(_) => None,
                }),
            };
            match session {
                Ok(Some(session)) => {
                    state.with_mut(|s| s.sign_in(session));
                    persist_user_state(&state);
                    password.set(String::new());
                    push_toast(toasts, ToastKind::Success, "Welcome back.");
                    load_user_data(state, toasts, backend).await;
                }
                Ok(None) => {
                    state.with_mut(|s| s.last_email = Some(address));
                    persist_user_state(&state);
                    mode.set(AuthMode::SignIn);
                    push_toast(toasts, ToastKind::Info, "Check your inbox to confirm your e-mail, then sign in.");
                }
                Err(error) => push_toast(toasts, ToastKind::Error, format!("Authentication failed: {error}")),
            }
            busy.set(false);
        });
    };

    rsx! {
        section { class: "{theme::PANEL} p-6 space-y-5",
            div { class: "flex gap-2",
                button {
                    class: "{theme::nav_button(!is_sign_up)}",
                    onclick: move |_| mode.set(AuthMode::SignIn),
                    "Sign In"
                }
                button {
                    class: "{theme::nav_button(is_sign_up)}",
                    onclick: move |_| mode.set(AuthMode::SignUp),
                    "Create Account"
                }
            }
            if !configured {
                p { class: "rounded-lg border border-amber-500/40 bg-amber-500/10 p-3 text-sm text-amber-200",
                    "No backend is configured. Set CEOE_SUPABASE_URL and CEOE_SUPABASE_ANON_KEY to enable accounts."
                }
            }
            label {
                span { class: "{theme::LABEL}", "E-mail" }
                input {
                    class: "{theme::INPUT}",
                    r#type: "email",
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
                }
            }
            label {
                span { class: "{theme::LABEL}", "Password" }
                input {
                    class: "{theme::INPUT}",
                    r#type: "password",
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value()),
                }
            }
            if is_sign_up && !password.read().is_empty() {
                div { class: "space-y-2",
                    div { class: "flex items-center justify-between",
                        span { class: "{theme::LABEL}", "Password strength" }
                        Badge { label: strength.level.label().to_string(), tone: strength_tone }
                    }
                    ProgressBar { value: strength.score as f64, tone: strength_tone }
                    ul { class: "space-y-1 text-xs {theme::TEXT_MUTED}",
                        for hint in strength.feedback.iter().copied() {
                            li { key: "{hint}", "• {hint}" }
                        }
                    }
                }
            }
            button {
                class: "{theme::BTN_PRIMARY} w-full",
                disabled: busy() || !configured,
                onclick: on_submit,
                if busy() { "Please wait…" } else if is_sign_up { "Create Account" } else { "Sign In" }
            }
        }
    }
}

#[component]
fn ProfilePanel() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let backend = use_context::<Backend>();
    let mut fields = use_signal(|| ProfileFields::from_profile(state.peek().profile.as_ref()));
    let mut saving = use_signal(|| false);

    let email = state.with(|s| s.user_email().unwrap_or("unknown").to_string());
    let current = fields();

    let on_save = {
        let backend = backend.clone();
        move |_: MouseEvent| {
            if saving() {
                return;
            }
            let backend = backend.clone();
            let profile = fields.peek().apply_to(state.peek().profile.clone());
            saving.set(true);
            spawn(async move {
                match save_profile(backend, profile).await {
                    Ok(saved) => {
                        state.with_mut(|s| s.profile = Some(saved));
                        push_toast(toasts, ToastKind::Success, "Profile saved.");
                    }
                    Err(error) => push_toast(toasts, ToastKind::Error, format!("Could not save profile: {error}")),
                }
                saving.set(false);
            });
        }
    };

    let on_sign_out = move |_: MouseEvent| {
        let backend = backend.clone();
        spawn(async move { app::sign_out(state, toasts, backend).await });
    };

    rsx! {
        section { class: "{theme::PANEL} p-6 space-y-5",
            div { class: "flex items-center justify-between",
                div {
                    h2 { class: "{theme::PAGE_TITLE}", "Account" }
                    p { class: "text-sm {theme::TEXT_MUTED}", "{email}" }
                }
                Badge { label: "Signed in", tone: Tone::Positive }
            }
            label {
                span { class: "{theme::LABEL}", "Company" }
                input {
                    class: "{theme::INPUT}",
                    value: "{current.company_name}",
                    oninput: move |evt| fields.with_mut(|f| f.company_name = evt.value()),
                }
            }
            label {
                span { class: "{theme::LABEL}", "Industry" }
                input {
                    class: "{theme::INPUT}",
                    value: "{current.industry}",
                    oninput: move |evt| fields.with_mut(|f| f.industry = evt.value()),
                }
            }
            label {
                span { class: "{theme::LABEL}", "Role" }
                input {
                    class: "{theme::INPUT}",
                    value: "{current.role}",
                    oninput: move |evt| fields.with_mut(|f| f.role = evt.value()),
                }
            }
            div { class: "flex justify-between gap-3",
                button {
                    class: "{theme::BTN_PRIMARY}",
                    disabled: saving(),
                    onclick: on_save,
                    if saving() { "Saving…" } else { "Save Profile" }
                }
                button {
                    class: "{theme::BTN_DANGER}",
                    onclick: on_sign_out,
                    "Sign Out"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn blank_profile_fields_are_stored_as_null() {
        let base = UserProfile {
            id: Some("p-1".into()),
            user_id: Uuid::nil(),
            company_name: Some("Old Co".into()),
            industry: Some("Retail".into()),
            role: None,
        };
        let fields = ProfileFields {
            company_name: "  Acme Freight ".into(),
            industry: "   ".into(),
            role: "Ops lead".into(),
        };
        let profile = fields.apply_to(Some(base));
        assert_eq!(profile.id.as_deref(), Some("p-1"));
        assert_eq!(profile.company_name.as_deref(), Some("Acme Freight"));
        assert_eq!(profile.industry, None);
        assert_eq!(profile.role.as_deref(), Some("Ops lead"));
    }

    #[test]
    fn fields_seed_from_profile() {
        assert_eq!(ProfileFields::from_profile(None), ProfileFields::default());
        let profile = UserProfile {
            company_name: Some("Acme".into()),
            ..UserProfile::default()
        };
        assert_eq!(ProfileFields::from_profile(Some(&profile)).company_name, "Acme");
    }
}
