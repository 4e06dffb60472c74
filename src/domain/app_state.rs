use std::{
    collections::HashMap,
    time::{Duration, SystemTime},
};

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::entities::{
    ApiIntegration, AuditReport, CarbonOffset, RecordId, Scenario, Session, UserProfile,
};
use super::marketplace::sample_offsets;

#[derive(Clone, Debug)]
pub struct AppState {
    pub session: Option<Session>,
    /// Hero landing shown until the user enters the dashboard.
    pub show_hero: bool,
    pub last_email: Option<String>,
    /// Newest first.
    pub scenarios: Vec<Scenario>,
    /// Newest first.
    pub reports: Vec<AuditReport>,
    pub integrations: Vec<ApiIntegration>,
    pub offsets: Vec<CarbonOffset>,
    pub profile: Option<UserProfile>,
    pub cache: CacheTimestamps,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            session: None,
            show_hero: true,
            last_email: None,
            scenarios: Vec::new(),
            reports: Vec::new(),
            integrations: Vec::new(),
            offsets: sample_offsets(),
            profile: None,
            cache: CacheTimestamps::default(),
        }
    }
}

impl AppState {
    pub fn is_stale(&self, resource: &CacheResource, ttl: Duration) -> bool {
        self.cache.is_stale(resource, ttl)
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }

    pub fn user_email(&self) -> Option<&str> {
        self.session
            .as_ref()
            .and_then(|session| session.user.email.as_deref())
    }

    pub fn sign_in(&mut self, session: Session) {
        if let Some(email) = session.user.email.clone() {
            self.last_email = Some(email);
        }
        self.session = Some(session);
        self.cache.clear();
    }

    /// Drops the session and everything loaded on behalf of the user.
    pub fn sign_out(&mut self) {
        self.session = None;
        self.scenarios.clear();
        self.reports.clear();
        self.integrations.clear();
        self.profile = None;
        self.cache.clear();
    }

    /// Newly created rows go to the front so lists stay newest-first.
    pub fn prepend_scenario(&mut self, scenario: Scenario) {
        self.scenarios.insert(0, scenario);
    }

    pub fn prepend_report(&mut self, report: AuditReport) {
        self.reports.insert(0, report);
    }

    pub fn prepend_integration(&mut self, integration: ApiIntegration) {
        self.integrations.insert(0, integration);
    }

    /// Returns false when no integration has that id.
    pub fn set_integration_active(&mut self, id: &RecordId, is_active: bool) -> bool {
        match self.integrations.iter_mut().find(|row| &row.id == id) {
            Some(row) => {
                row.is_active = is_active;
                true
            }
            None => false,
        }
    }

    pub fn mark_integration_synced(&mut self, id: &RecordId, at: OffsetDateTime) -> bool {
        match self.integrations.iter_mut().find(|row| &row.id == id) {
            Some(row) => {
                row.last_sync = Some(at);
                true
            }
            None => false,
        }
    }

    /// Remote listings replace the samples only when there are any.
    pub fn replace_offsets(&mut self, offsets: Vec<CarbonOffset>) -> bool {
        if offsets.is_empty() {
            return false;
        }
        self.offsets = offsets;
        true
    }

    pub fn apply_persisted(&mut self, persisted: &PersistedState) {
        self.last_email = persisted.last_email.clone();
        self.show_hero = !persisted.hero_dismissed;
    }

    pub fn to_persisted(&self) -> PersistedState {
        PersistedState {
            refresh_token: self
                .session
                .as_ref()
                .map(|session| session.refresh_token.clone()),
            last_email: self.last_email.clone(),
            hero_dismissed: !self.show_hero,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct CacheTimestamps {
    entries: HashMap<CacheResource, SystemTime>,
}

impl CacheTimestamps {
    pub fn record_fetch(&mut self, resource: CacheResource, fetched_at: SystemTime) {
        self.entries.insert(resource, fetched_at);
    }

    pub fn fetched_at(&self, resource: &CacheResource) -> Option<SystemTime> {
        self.entries.get(resource).copied()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_stale(&self, resource: &CacheResource, ttl: Duration) -> bool {
        self.fetched_at(resource)
            .map(|time| time.elapsed().map(|elapsed| elapsed > ttl).unwrap_or(true))
            .unwrap_or(true)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CacheResource {
    Scenarios,
    Reports,
    Integrations,
    Offsets,
    Profile,
}

/// Written to `state.json` between launches.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub last_email: Option<String>,
    #[serde(default)]
    pub hero_dismissed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::AuthUser;
    use time::macros::datetime;
    use uuid::Uuid;

    fn session() -> Session {
        Session {
            access_token: "access".into(),
            refresh_token: "refresh".into(),
            expires_at: None,
            user: AuthUser {
                id: Uuid::nil(),
                email: Some("ops@example.com".into()),
            },
        }
    }

    fn integration(id: &str) -> ApiIntegration {
        ApiIntegration {
            id: id.into(),
            integration_type: "tms".into(),
            integration_name: "Fleet".into(),
            api_endpoint: None,
            is_active: true,
            last_sync: None,
            created_at: datetime!(2024-05-01 12:00:00 UTC),
        }
    }

    #[test]
    fn starts_with_hero_and_sample_offsets() {
        let state = AppState::default();
        assert!(state.show_hero);
        assert!(!state.is_signed_in());
        assert_eq!(state.offsets.len(), 5);
    }

    #[test]
    fn empty_remote_offsets_keep_samples() {
        let mut state = AppState::default();
        assert!(!state.replace_offsets(Vec::new()));
        assert_eq!(state.offsets.len(), 5);
    }

    #[test]
    fn sign_out_clears_user_data() {
        let mut state = AppState::default();
        state.sign_in(session());
        state.prepend_integration(integration("a"));
        state
            .cache
            .record_fetch(CacheResource::Integrations, SystemTime::now());

        state.sign_out();
        assert!(state.session.is_none());
        assert!(state.integrations.is_empty());
        assert!(state.is_stale(&CacheResource::Integrations, Duration::from_secs(60)));
        assert_eq!(state.last_email.as_deref(), Some("ops@example.com"));
    }

    #[test]
    fn integration_updates_are_local() {
        let mut state = AppState::default();
        state.prepend_integration(integration("a"));
        state.prepend_integration(integration("b"));
        assert_eq!(state.integrations[0].id, "b");

        assert!(state.set_integration_active(&"a".to_string(), false));
        assert!(!state.integrations[1].is_active);

        let at = datetime!(2024-06-01 10:00:00 UTC);
        assert!(state.mark_integration_synced(&"b".to_string(), at));
        assert_eq!(state.integrations[0].last_sync, Some(at));
        assert!(!state.mark_integration_synced(&"missing".to_string(), at));
    }

    #[test]
    fn persisted_state_round_trips_session_token() {
        let mut state = AppState::default();
        state.sign_in(session());
        state.show_hero = false;

        let persisted = state.to_persisted();
        assert_eq!(persisted.refresh_token.as_deref(), Some("refresh"));
        assert!(persisted.hero_dismissed);

        let mut restored = AppState::default();
        restored.apply_persisted(&persisted);
        assert!(!restored.show_hero);
        assert_eq!(restored.last_email.as_deref(), Some("ops@example.com"));
    }
}
