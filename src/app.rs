use std::time::{Duration, SystemTime};

use dioxus::{prelude::*, signals::Signal};

use crate::{
    domain::{
        AppState, CacheResource, IntegrationFormError, PersistedState, ReportFormError,
        ScenarioFormError,
    },
    infra::{CacheStatus, SupabaseClient, SupabaseError},
    ui::{
        components::toast::{push_toast, Toast, ToastKind, ToastMessage},
        pages::{
            AccountPage, CalculatorPage, DashboardPage, IntegrationsPage, MarketplacePage,
            ReportsPage, RoutesPage, ScenariosPage, SuppliersPage,
        },
        shell::Shell,
    },
    util::{
        assets,
        export::ExportError,
        persistence::{load_persisted_state, save_persisted_state},
    },
};

/// How long a loaded collection is trusted before a page refetches it.
pub const CACHE_TTL: Duration = Duration::from_secs(15 * 60);

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Dashboard {},
    #[route("/routes")]
    RouteOptimizer {},
    #[route("/suppliers")]
    Suppliers {},
    #[route("/calculator")]
    Calculator {},
    #[route("/scenarios")]
    Scenarios {},
    #[route("/reports")]
    Reports {},
    #[route("/integrations")]
    Integrations {},
    #[route("/marketplace")]
    Marketplace {},
    #[route("/account")]
    Account {},
}

/// Remote store handle shared through context. Without configuration the
/// app still runs on sample data and every remote action reports why.
#[derive(Clone)]
pub struct Backend {
    client: Option<SupabaseClient>,
    unavailable: Option<String>,
}

impl Backend {
    pub fn from_env() -> Self {
        match SupabaseClient::from_env().map(|client| client.with_ttl(CACHE_TTL)) {
            Ok(client) => Self {
                client: Some(client),
                unavailable: None,
            },
            Err(error) => {
                tracing::warn!(%error, "remote store unavailable; running with sample data");
                Self {
                    client: None,
                    unavailable: Some(error.to_string()),
                }
            }
        }
    }

    pub fn client(&self) -> Result<SupabaseClient, SupabaseError> {
        self.client.clone().ok_or_else(|| {
            SupabaseError::Config(
                self.unavailable
                    .clone()
                    .unwrap_or_else(|| "remote store unavailable".into()),
            )
        })
    }

    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }
}

/// Anything a page action can fail with; shown to the user as a toast.
#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    #[error(transparent)]
    Store(#[from] SupabaseError),
    #[error(transparent)]
    Scenario(#[from] ScenarioFormError),
    #[error(transparent)]
    Report(#[from] ReportFormError),
    #[error(transparent)]
    Integration(#[from] IntegrationFormError),
    #[error(transparent)]
    Export(#[from] ExportError),
}

#[component]
pub fn App() -> Element {
    let persisted = use_hook(|| load_persisted_state().unwrap_or_default());
    let state = use_signal({
        let persisted = persisted.clone();
        move || {
            let mut st = AppState::default();
            st.apply_persisted(&persisted);
            st
        }
    });
    use_context_provider(|| state.clone());

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts.clone());

    let backend = use_hook(Backend::from_env);
    use_context_provider(|| backend.clone());

    let _session = use_future({
        let backend = backend.clone();
        let refresh_token = persisted.refresh_token.clone();
        move || {
            let backend = backend.clone();
            let refresh_token = refresh_token.clone();
            async move { restore_session(state, toasts, backend, refresh_token).await }
        }
    });

    let _offsets = use_future({
        let backend = backend.clone();
        move || {
            let backend = backend.clone();
            async move { load_offsets(state, toasts, backend).await }
        }
    });

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        document::Style { "{assets::tailwind_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

pub fn persist_user_state(state: &Signal<AppState>) {
    let snapshot: PersistedState = state.with_peek(|st| st.to_persisted());
    if let Err(error) = save_persisted_state(&snapshot) {
        tracing::warn!(%error, "failed to persist user state");
    }
}

fn should_load(state: &Signal<AppState>, resource: CacheResource, force: bool) -> bool {
    state.with_peek(|st| st.is_signed_in() && (force || st.is_stale(&resource, CACHE_TTL)))
}

async fn restore_session(
    mut state: Signal<AppState>,
    toasts: Signal<Vec<ToastMessage>>,
    backend: Backend,
    refresh_token: Option<String>,
) {
    let Some(refresh_token) = refresh_token else {
        return;
    };
    let Ok(client) = backend.client() else {
        return;
    };

    match client.refresh_session(&refresh_token).await {
        Ok(session) => {
            state.with_mut(|st| st.sign_in(session));
            persist_user_state(&state);
            load_user_data(state, toasts, backend).await;
        }
        Err(error) => {
            tracing::warn!(%error, "could not restore session");
            persist_user_state(&state);
            push_toast(
                toasts,
                ToastKind::Warning,
                "Your session has expired. Please sign in again.",
            );
        }
    }
}

/// Loads everything owned by the signed-in user.
pub async fn load_user_data(
    state: Signal<AppState>,
    toasts: Signal<Vec<ToastMessage>>,
    backend: Backend,
) {
    load_profile(state, toasts, backend.clone(), true).await;
    load_scenarios(state, toasts, backend.clone(), true).await;
    load_reports(state, toasts, backend.clone(), true).await;
    load_integrations(state, toasts, backend, true).await;
}

pub async fn load_scenarios(
    mut state: Signal<AppState>,
    toasts: Signal<Vec<ToastMessage>>,
    backend: Backend,
    force: bool,
) {
    if !should_load(&state, CacheResource::Scenarios, force) {
        return;
    }
    let result = match backend.client() {
        Ok(client) => client.list_scenarios().await,
        Err(error) => Err(error),
    };
    match result {
        Ok(scenarios) => state.with_mut(|st| {
            st.scenarios = scenarios;
            st.cache
                .record_fetch(CacheResource::Scenarios, SystemTime::now());
        }),
        Err(error) => push_toast(
            toasts,
            ToastKind::Error,
            format!("Failed to fetch scenarios: {error}"),
        ),
    }
}

pub async fn load_reports(
    mut state: Signal<AppState>,
    toasts: Signal<Vec<ToastMessage>>,
    backend: Backend,
    force: bool,
) {
    if !should_load(&state, CacheResource::Reports, force) {
        return;
    }
    let result = match backend.client() {
        Ok(client) => client.list_reports().await,
        Err(error) => Err(error),
    };
    match result {
        Ok(reports) => state.with_mut(|st| {
            st.reports = reports;
            st.cache.record_fetch(CacheResource::Reports, SystemTime::now());
        }),
        Err(error) => push_toast(
            toasts,
            ToastKind::Error,
            format!("Failed to fetch reports: {error}"),
        ),
    }
}

pub async fn load_integrations(
    mut state: Signal<AppState>,
    toasts: Signal<Vec<ToastMessage>>,
    backend: Backend,
    force: bool,
) {
    if !should_load(&state, CacheResource::Integrations, force) {
        return;
    }
    let result = match backend.client() {
        Ok(client) => client.list_integrations().await,
        Err(error) => Err(error),
    };
    match result {
        Ok(integrations) => state.with_mut(|st| {
            st.integrations = integrations;
            st.cache
                .record_fetch(CacheResource::Integrations, SystemTime::now());
        }),
        Err(error) => push_toast(
            toasts,
            ToastKind::Error,
            format!("Failed to fetch integrations: {error}"),
        ),
    }
}

pub async fn load_profile(
    mut state: Signal<AppState>,
    toasts: Signal<Vec<ToastMessage>>,
    backend: Backend,
    force: bool,
) {
    if !should_load(&state, CacheResource::Profile, force) {
        return;
    }
    let result = match backend.client() {
        Ok(client) => client.get_profile().await,
        Err(error) => Err(error),
    };
    match result {
        Ok(profile) => state.with_mut(|st| {
            st.profile = profile;
            st.cache.record_fetch(CacheResource::Profile, SystemTime::now());
        }),
        Err(error) => push_toast(
            toasts,
            ToastKind::Error,
            format!("Failed to load profile: {error}"),
        ),
    }
}

/// Samples stay on screen unless the store returns at least one listing.
async fn load_offsets(
    mut state: Signal<AppState>,
    toasts: Signal<Vec<ToastMessage>>,
    backend: Backend,
) {
    let Ok(client) = backend.client() else {
        return;
    };
    match client.get_offsets().await {
        Ok(payload) => {
            let replaced = state.with_mut(|st| {
                let replaced = st.replace_offsets(payload.data.clone());
                st.cache.record_fetch(CacheResource::Offsets, payload.fetched_at);
                replaced
            });
            tracing::debug!(replaced, status = ?payload.status, "offsets loaded");
            if replaced && payload.status == CacheStatus::Stale {
                push_toast(
                    toasts,
                    ToastKind::Warning,
                    "Showing cached offset listings; prices might be out of date.",
                );
            }
        }
        Err(error) => {
            tracing::warn!(%error, "failed to load offsets; keeping sample listings");
        }
    }
}

pub async fn sign_out(
    mut state: Signal<AppState>,
    toasts: Signal<Vec<ToastMessage>>,
    backend: Backend,
) {
    if let Ok(client) = backend.client() {
        if let Err(error) = client.sign_out().await {
            push_toast(
                toasts,
                ToastKind::Warning,
                format!("Signed out locally; the server reported: {error}"),
            );
        }
    }
    state.with_mut(|st| st.sign_out());
    persist_user_state(&state);
    push_toast(toasts, ToastKind::Info, "Signed out.");
}

#[component]
pub fn Dashboard() -> Element {
    rsx! { Shell { DashboardPage {} } }
}

#[component]
pub fn RouteOptimizer() -> Element {
    rsx! { Shell { RoutesPage {} } }
}

#[component]
pub fn Suppliers() -> Element {
    rsx! { Shell { SuppliersPage {} } }
}

#[component]
pub fn Calculator() -> Element {
    rsx! { Shell { CalculatorPage {} } }
}

#[component]
pub fn Scenarios() -> Element {
    rsx! { Shell { ScenariosPage {} } }
}

#[component]
pub fn Reports() -> Element {
    rsx! { Shell { ReportsPage {} } }
}

#[component]
pub fn Integrations() -> Element {
    rsx! { Shell { IntegrationsPage {} } }
}

#[component]
pub fn Marketplace() -> Element {
    rsx! { Shell { MarketplacePage {} } }
}

#[component]
pub fn Account() -> Element {
    rsx! { Shell { AccountPage {} } }
}
