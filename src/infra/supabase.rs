//! Thin asynchronous client for the Supabase REST (PostgREST) API.
//!
//! - Typed accessors for scenarios, audit reports, integrations, offsets and profiles.
//! - Holds the signed-in session; mutations fail with `NotAuthenticated` without one.
//! - Keeps offset listings in memory with stale and on-disk fallbacks.

use std::{
    sync::Arc,
    time::{Duration, SystemTime},
};

use reqwest::{Client, Method, RequestBuilder, Url};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use time::{format_description::well_known::Rfc3339, Date, OffsetDateTime};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::domain::{
    ApiIntegration, AuditReport, CarbonOffset, NewAuditReport, NewIntegration, NewScenario,
    RecordId, Scenario, Session, UserProfile,
};
use crate::infra::cache::{load_offsets_cache, save_offsets_cache, OffsetsCache};

const URL_ENV: &str = "CEOE_SUPABASE_URL";
const ANON_KEY_ENV: &str = "CEOE_SUPABASE_ANON_KEY";
const DEFAULT_TTL: Duration = Duration::from_secs(60 * 60);
const USER_AGENT: &str = concat!("ceoe-dashboard/", env!("CARGO_PKG_VERSION"));

pub const SCENARIOS: &str = "scenarios";
pub const AUDIT_REPORTS: &str = "audit_reports";
pub const API_INTEGRATIONS: &str = "api_integrations";
pub const CARBON_OFFSETS: &str = "carbon_offsets";
pub const PROFILES: &str = "profiles";

#[derive(Debug, Error)]
pub enum SupabaseError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{message} (HTTP {status})")]
    Api { status: u16, message: String },
    #[error("User not authenticated")]
    NotAuthenticated,
    #[error("backend not configured: {0}")]
    Config(String),
    #[error("invalid timestamp: {0}")]
    Timestamp(#[from] time::error::Format),
}

/// Project URL and public anon key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackendConfig {
    pub url: Url,
    pub anon_key: String,
}

impl BackendConfig {
    /// Runtime environment first, then values baked in at build time.
    pub fn from_env() -> Result<Self, SupabaseError> {
        let url = std::env::var(URL_ENV)
            .ok()
            .or_else(|| option_env!("CEOE_SUPABASE_URL").map(str::to_string));
        let anon_key = std::env::var(ANON_KEY_ENV)
            .ok()
            .or_else(|| option_env!("CEOE_SUPABASE_ANON_KEY").map(str::to_string));

        match (url, anon_key) {
            (Some(url), Some(key)) => Self::from_parts(&url, &key),
            (None, _) => Err(SupabaseError::Config(format!("{URL_ENV} is not set"))),
            (_, None) => Err(SupabaseError::Config(format!("{ANON_KEY_ENV} is not set"))),
        }
    }

    pub fn from_parts(url: &str, anon_key: &str) -> Result<Self, SupabaseError> {
        let anon_key = anon_key.trim();
        if anon_key.is_empty() {
            return Err(SupabaseError::Config("anon key is empty".into()));
        }
        // `Url::join` drops the last segment unless the base ends with a slash.
        let mut url = url.trim().to_string();
        if !url.ends_with('/') {
            url.push('/');
        }
        Ok(Self {
            url: Url::parse(&url)?,
            anon_key: anon_key.to_string(),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CacheStatus {
    Fresh,
    Cached,
    Stale,
}

#[derive(Clone, Debug)]
pub struct CachedPayload<T> {
    pub data: T,
    pub fetched_at: SystemTime,
    pub status: CacheStatus,
}

impl<T> CachedPayload<T> {
    fn new(data: T, fetched_at: SystemTime, status: CacheStatus) -> Self {
        Self {
            data,
            fetched_at,
            status,
        }
    }
}

#[derive(Default)]
struct ClientState {
    session: Option<Session>,
    offsets: Option<Cached<Vec<CarbonOffset>>>,
}

#[derive(Clone)]
pub struct SupabaseClient {
    pub(super) http: Client,
    pub(super) config: BackendConfig,
    state: Arc<Mutex<ClientState>>,
    ttl: Duration,
}

impl SupabaseClient {
    pub fn new(config: BackendConfig) -> Result<Self, SupabaseError> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            http,
            config,
            state: Arc::new(Mutex::new(ClientState::default())),
            ttl: DEFAULT_TTL,
        })
    }

    pub fn from_env() -> Result<Self, SupabaseError> {
        Self::new(BackendConfig::from_env()?)
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub async fn session(&self) -> Option<Session> {
        self.state.lock().await.session.clone()
    }

    pub(super) async fn set_session(&self, session: Option<Session>) {
        self.state.lock().await.session = session;
    }

    /// Id of the signed-in user, or `NotAuthenticated` when there is no
    /// session or its access token has expired.
    pub async fn require_user(&self) -> Result<Uuid, SupabaseError> {
        let now = OffsetDateTime::now_utc();
        self.state
            .lock()
            .await
            .session
            .as_ref()
            .filter(|session| !session.is_expired(now))
            .map(|session| session.user.id)
            .ok_or(SupabaseError::NotAuthenticated)
    }

    pub async fn list_scenarios(&self) -> Result<Vec<Scenario>, SupabaseError> {
        let rows: Vec<ScenarioRow> = self
            .select(SCENARIOS, &[("select", "*"), ("order", "created_at.desc")])
            .await?;
        Ok(rows.into_iter().map(Scenario::from).collect())
    }

    pub async fn insert_scenario(&self, payload: &NewScenario) -> Result<Scenario, SupabaseError> {
        self.require_user().await?;
        let row: ScenarioRow = self.insert(SCENARIOS, payload).await?;
        tracing::info!(id = %row.id, name = %row.name, "scenario saved");
        Ok(row.into())
    }

    pub async fn list_reports(&self) -> Result<Vec<AuditReport>, SupabaseError> {
        let rows: Vec<AuditReportRow> = self
            .select(AUDIT_REPORTS, &[("select", "*"), ("order", "generated_at.desc")])
            .await?;
        Ok(rows.into_iter().map(AuditReport::from).collect())
    }

    pub async fn insert_report(
        &self,
        payload: &NewAuditReport,
    ) -> Result<AuditReport, SupabaseError> {
        self.require_user().await?;
        let row: AuditReportRow = self.insert(AUDIT_REPORTS, payload).await?;
        tracing::info!(
            id = %row.id,
            shipments = row.total_shipments.unwrap_or_default(),
            "audit report generated"
        );
        Ok(row.into())
    }

    pub async fn list_integrations(&self) -> Result<Vec<ApiIntegration>, SupabaseError> {
        let rows: Vec<IntegrationRow> = self
            .select(API_INTEGRATIONS, &[("select", "*"), ("order", "created_at.desc")])
            .await?;
        Ok(rows.into_iter().map(ApiIntegration::from).collect())
    }

    pub async fn insert_integration(
        &self,
        payload: &NewIntegration,
    ) -> Result<ApiIntegration, SupabaseError> {
        self.require_user().await?;
        let row: IntegrationRow = self.insert(API_INTEGRATIONS, payload).await?;
        tracing::info!(id = %row.id, kind = %row.integration_type, "integration added");
        Ok(row.into())
    }

    pub async fn set_integration_active(
        &self,
        id: &RecordId,
        is_active: bool,
    ) -> Result<(), SupabaseError> {
        self.require_user().await?;
        self.update(
            API_INTEGRATIONS,
            id,
            &serde_json::json!({ "is_active": is_active }),
        )
        .await
    }

    pub async fn mark_integration_synced(
        &self,
        id: &RecordId,
        at: OffsetDateTime,
    ) -> Result<(), SupabaseError> {
        self.require_user().await?;
        let at = at.format(&Rfc3339)?;
        self.update(API_INTEGRATIONS, id, &serde_json::json!({ "last_sync": at }))
            .await
    }

    /// Available listings, cheapest first. Falls back to the last good
    /// result (in memory, then on disk) when the store cannot be reached.
    pub async fn get_offsets(&self) -> Result<CachedPayload<Vec<CarbonOffset>>, SupabaseError> {
        if let Some(payload) = self.cached_offsets().await {
            return Ok(payload);
        }

        let query = [
            ("select", "*"),
            ("is_available", "eq.true"),
            ("order", "price_per_ton.asc"),
        ];
        match self.select::<OffsetRow>(CARBON_OFFSETS, &query).await {
            Ok(rows) => {
                let data: Vec<CarbonOffset> = rows.into_iter().map(CarbonOffset::from).collect();
                if !data.is_empty() {
                    if let Err(error) = save_offsets_cache(&OffsetsCache::new(data.clone())) {
                        tracing::warn!(%error, "failed to write offsets cache");
                    }
                }
                Ok(self.store_offsets(data).await)
            }
            Err(error) => {
                if let Some(stale) = self.cached_offsets_stale().await {
                    tracing::warn!(%error, "serving stale offsets from memory");
                    return Ok(stale);
                }
                if let Some(disk) = load_offsets_cache() {
                    tracing::warn!(%error, age = %disk.age_string(), "serving offsets from disk cache");
                    let fetched_at = disk.fetched_at();
                    return Ok(CachedPayload::new(disk.offsets, fetched_at, CacheStatus::Stale));
                }
                Err(error)
            }
        }
    }

    pub async fn get_profile(&self) -> Result<Option<UserProfile>, SupabaseError> {
        let user_id = self.require_user().await?.to_string();
        let filter = format!("eq.{user_id}");
        let rows: Vec<UserProfile> = self
            .select(
                PROFILES,
                &[("select", "*"), ("user_id", filter.as_str()), ("limit", "1")],
            )
            .await?;
        Ok(rows.into_iter().next())
    }

    /// Inserts or updates the profile keyed by `user_id`.
    pub async fn save_profile(&self, profile: &UserProfile) -> Result<UserProfile, SupabaseError> {
        let user_id = self.require_user().await?;
        let body = UserProfile {
            id: None,
            user_id,
            ..profile.clone()
        };
        let mut url = self.rest_url(PROFILES)?;
        url.query_pairs_mut().append_pair("on_conflict", "user_id");
        let builder = self
            .authorized(self.http.request(Method::POST, url))
            .await
            .header("Prefer", "resolution=merge-duplicates,return=representation")
            .json(&body);
        let rows: Vec<UserProfile> = self.send_json(builder).await?;
        rows.into_iter().next().ok_or_else(|| SupabaseError::Api {
            status: 200,
            message: "profile upsert returned no rows".into(),
        })
    }

    pub async fn clear_cache(&self) {
        self.state.lock().await.offsets = None;
    }

    async fn cached_offsets(&self) -> Option<CachedPayload<Vec<CarbonOffset>>> {
        let state = self.state.lock().await;
        state
            .offsets
            .as_ref()
            .and_then(|entry| entry.if_fresh(self.ttl))
    }

    async fn cached_offsets_stale(&self) -> Option<CachedPayload<Vec<CarbonOffset>>> {
        let state = self.state.lock().await;
        state.offsets.as_ref().map(Cached::stale)
    }

    async fn store_offsets(&self, data: Vec<CarbonOffset>) -> CachedPayload<Vec<CarbonOffset>> {
        let fetched_at = SystemTime::now();
        let payload = CachedPayload::new(data.clone(), fetched_at, CacheStatus::Fresh);
        self.state.lock().await.offsets = Some(Cached::new(data, fetched_at));
        payload
    }

    async fn select<T>(&self, table: &str, query: &[(&str, &str)]) -> Result<Vec<T>, SupabaseError>
    where
        T: DeserializeOwned,
    {
        let mut url = self.rest_url(table)?;
        url.query_pairs_mut().extend_pairs(query);
        let builder = self.authorized(self.http.get(url)).await;
        let rows: Vec<T> = self.send_json(builder).await.inspect_err(|error| {
            tracing::warn!(table, %error, "select failed");
        })?;
        tracing::debug!(table, rows = rows.len(), "select");
        Ok(rows)
    }

    async fn insert<B, T>(&self, table: &str, body: &B) -> Result<T, SupabaseError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = self.rest_url(table)?;
        let builder = self
            .authorized(self.http.post(url))
            .await
            .header("Prefer", "return=representation")
            .json(body);
        let rows: Vec<T> = self.send_json(builder).await.inspect_err(|error| {
            tracing::warn!(table, %error, "insert failed");
        })?;
        rows.into_iter().next().ok_or_else(|| SupabaseError::Api {
            status: 201,
            message: format!("insert into {table} returned no rows"),
        })
    }

    async fn update<B>(&self, table: &str, id: &str, body: &B) -> Result<(), SupabaseError>
    where
        B: Serialize,
    {
        let mut url = self.rest_url(table)?;
        url.query_pairs_mut().append_pair("id", &format!("eq.{id}"));
        let builder = self.authorized(self.http.patch(url)).await.json(body);
        let response = builder.send().await?;
        check_status(response).await.inspect_err(|error| {
            tracing::warn!(table, id, %error, "update failed");
        })?;
        tracing::debug!(table, id, "update");
        Ok(())
    }

    /// Adds the anon key and, when signed in, the user's bearer token.
    pub(super) async fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        let token = self
            .state
            .lock()
            .await
            .session
            .as_ref()
            .map(|session| session.access_token.clone())
            .unwrap_or_else(|| self.config.anon_key.clone());
        builder
            .header("apikey", &self.config.anon_key)
            .bearer_auth(token)
    }

    pub(super) async fn send_json<T>(&self, builder: RequestBuilder) -> Result<T, SupabaseError>
    where
        T: DeserializeOwned,
    {
        let response = check_status(builder.send().await?).await?;
        Ok(response.json().await?)
    }

    fn rest_url(&self, table: &str) -> Result<Url, url::ParseError> {
        self.config.url.join(&format!("rest/v1/{table}"))
    }

    pub(super) fn auth_url(&self, path: &str) -> Result<Url, url::ParseError> {
        self.config.url.join(&format!("auth/v1/{path}"))
    }
}

/// Turns a non-success response into `SupabaseError::Api`.
pub(super) async fn check_status(
    response: reqwest::Response,
) -> Result<reqwest::Response, SupabaseError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(SupabaseError::Api {
        status: status.as_u16(),
        message: error_message(&body).unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string()
        }),
    })
}

/// PostgREST reports `message`; the auth service uses `msg`,
/// `error_description` or `error` depending on the endpoint.
#[derive(Debug, Default, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    error_description: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

fn error_message(body: &str) -> Option<String> {
    let parsed: ApiErrorBody = serde_json::from_str(body).ok()?;
    parsed
        .message
        .or(parsed.msg)
        .or(parsed.error_description)
        .or(parsed.error)
        .filter(|message| !message.trim().is_empty())
}

struct Cached<T> {
    value: T,
    fetched_at: SystemTime,
}

impl<T: Clone> Cached<T> {
    fn new(value: T, fetched_at: SystemTime) -> Self {
        Self { value, fetched_at }
    }

    fn if_fresh(&self, ttl: Duration) -> Option<CachedPayload<T>> {
        if self
            .fetched_at
            .elapsed()
            .map(|elapsed| elapsed <= ttl)
            .unwrap_or(false)
        {
            Some(CachedPayload::new(
                self.value.clone(),
                self.fetched_at,
                CacheStatus::Cached,
            ))
        } else {
            None
        }
    }

    fn stale(&self) -> CachedPayload<T> {
        CachedPayload::new(self.value.clone(), self.fetched_at, CacheStatus::Stale)
    }
}

#[derive(Debug, Deserialize)]
struct ScenarioRow {
    id: RecordId,
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    route_data: Option<Value>,
    #[serde(default)]
    freight_data: Option<Value>,
    #[serde(default)]
    supplier_data: Option<Value>,
    #[serde(default)]
    carbon_impact: Option<f64>,
    #[serde(default)]
    cost_impact: Option<f64>,
    #[serde(default)]
    time_impact: Option<f64>,
    #[serde(default)]
    created_at: Option<String>,
}

impl From<ScenarioRow> for Scenario {
    fn from(row: ScenarioRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description.filter(|text| !text.is_empty()),
            route_data: row.route_data,
            freight_data: row.freight_data,
            supplier_data: row.supplier_data,
            carbon_impact: row.carbon_impact.unwrap_or_default(),
            cost_impact: row.cost_impact.unwrap_or_default(),
            time_impact: row.time_impact.unwrap_or_default(),
            created_at: parse_timestamp(row.created_at.as_deref()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct AuditReportRow {
    id: RecordId,
    report_name: String,
    report_type: String,
    #[serde(default)]
    period_start: Option<String>,
    #[serde(default)]
    period_end: Option<String>,
    #[serde(default)]
    total_emissions: Option<f64>,
    #[serde(default)]
    total_shipments: Option<u32>,
    #[serde(default)]
    report_data: Option<Value>,
    #[serde(default)]
    generated_at: Option<String>,
}

impl From<AuditReportRow> for AuditReport {
    fn from(row: AuditReportRow) -> Self {
        Self {
            id: row.id,
            report_name: row.report_name,
            report_type: row.report_type,
            period_start: parse_date(row.period_start.as_deref()),
            period_end: parse_date(row.period_end.as_deref()),
            total_emissions: row.total_emissions.unwrap_or_default(),
            total_shipments: row.total_shipments.unwrap_or_default(),
            report_data: row.report_data,
            generated_at: parse_timestamp(row.generated_at.as_deref()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct IntegrationRow {
    id: RecordId,
    integration_type: String,
    integration_name: String,
    #[serde(default)]
    api_endpoint: Option<String>,
    #[serde(default)]
    is_active: Option<bool>,
    #[serde(default)]
    last_sync: Option<String>,
    #[serde(default)]
    created_at: Option<String>,
}

impl From<IntegrationRow> for ApiIntegration {
    fn from(row: IntegrationRow) -> Self {
        Self {
            id: row.id,
            integration_type: row.integration_type,
            integration_name: row.integration_name,
            api_endpoint: row.api_endpoint.filter(|url| !url.is_empty()),
            is_active: row.is_active.unwrap_or(false),
            last_sync: row
                .last_sync
                .as_deref()
                .and_then(|raw| OffsetDateTime::parse(raw, &Rfc3339).ok()),
            created_at: parse_timestamp(row.created_at.as_deref()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct OffsetRow {
    id: RecordId,
    provider_name: String,
    offset_type: String,
    price_per_ton: f64,
    #[serde(default)]
    available_tons: Option<f64>,
    #[serde(default)]
    certification: Option<String>,
    #[serde(default)]
    project_description: Option<String>,
    #[serde(default)]
    is_available: Option<bool>,
}

impl From<OffsetRow> for CarbonOffset {
    fn from(row: OffsetRow) -> Self {
        Self {
            id: row.id,
            provider_name: row.provider_name,
            offset_type: row.offset_type,
            price_per_ton: row.price_per_ton,
            available_tons: row.available_tons.unwrap_or_default(),
            certification: row.certification,
            project_description: row.project_description,
            is_available: row.is_available.unwrap_or(true),
        }
    }
}

fn parse_timestamp(raw: Option<&str>) -> OffsetDateTime {
    raw.and_then(|value| OffsetDateTime::parse(value, &Rfc3339).ok())
        .unwrap_or_else(OffsetDateTime::now_utc)
}

fn parse_date(raw: Option<&str>) -> Option<Date> {
    raw.and_then(|value| {
        Date::parse(
            value.get(..10).unwrap_or(value),
            time::macros::format_description!("[year]-[month]-[day]"),
        )
        .ok()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ScenarioForm;
    use time::macros::{date, datetime};

    #[test]
    fn config_normalizes_trailing_slash() {
        let config = BackendConfig::from_parts("https://abc.supabase.co", " key ").expect("config");
        assert_eq!(config.anon_key, "key");
        assert_eq!(
            config.url.join("rest/v1/scenarios").expect("join").as_str(),
            "https://abc.supabase.co/rest/v1/scenarios"
        );
    }

    #[test]
    fn empty_anon_key_is_a_config_error() {
        assert!(matches!(
            BackendConfig::from_parts("https://abc.supabase.co", "  "),
            Err(SupabaseError::Config(_))
        ));
        assert!(matches!(
            BackendConfig::from_parts("not a url", "key"),
            Err(SupabaseError::InvalidUrl(_))
        ));
    }

    #[test]
    fn stored_impacts_survive_round_trip_exactly() {
        let form = ScenarioForm {
            name: "Ocean lane".into(),
            route_type: "alternative".into(),
            freight_type: "ocean".into(),
            supplier_rating: "average".into(),
            distance: "1234.567".into(),
            weight: "3.3".into(),
            ..ScenarioForm::default()
        };
        let payload = NewScenario::from_form(Uuid::nil(), &form).expect("valid form");

        let mut json = serde_json::to_value(&payload).expect("serialize");
        json["id"] = "s-1".into();
        json["created_at"] = "2024-05-01T12:00:00.123456+00:00".into();
        let text = serde_json::to_string(&json).expect("encode");
        let row: ScenarioRow = serde_json::from_str(&text).expect("decode");
        let scenario = Scenario::from(row);

        let expected = payload.impacts();
        assert_eq!(scenario.carbon_impact.to_bits(), expected.carbon_impact.to_bits());
        assert_eq!(scenario.cost_impact.to_bits(), expected.cost_impact.to_bits());
        assert_eq!(scenario.time_impact.to_bits(), expected.time_impact.to_bits());
        assert_eq!(scenario.created_at.date(), date!(2024 - 05 - 01));
    }

    #[test]
    fn null_impacts_read_as_zero() {
        let row: ScenarioRow = serde_json::from_str(
            r#"{"id":"s-2","name":"Draft","carbon_impact":null,"created_at":"2024-01-02T03:04:05Z"}"#,
        )
        .expect("decode");
        let scenario = Scenario::from(row);
        assert_eq!(scenario.carbon_impact, 0.0);
        assert_eq!(scenario.created_at, datetime!(2024-01-02 03:04:05 UTC));
        assert!(scenario.description.is_none());
    }

    #[test]
    fn report_row_parses_dates() {
        let row: AuditReportRow = serde_json::from_str(
            r#"{"id":"r-1","report_name":"Q2","report_type":"quarterly",
                "period_start":"2024-04-01","period_end":"2024-06-30",
                "total_emissions":812.25,"total_shipments":650,
                "generated_at":"2024-07-01T08:00:00+00:00"}"#,
        )
        .expect("decode");
        let report = AuditReport::from(row);
        assert_eq!(report.period_start, Some(date!(2024 - 04 - 01)));
        assert_eq!(report.period_end, Some(date!(2024 - 06 - 30)));
        assert_eq!(report.total_shipments, 650);
    }

    #[test]
    fn integration_row_defaults() {
        let row: IntegrationRow = serde_json::from_str(
            r#"{"id":"i-1","integration_type":"erp","integration_name":"SAP",
                "api_endpoint":"","is_active":null,"last_sync":"2024-03-03T10:00:00Z"}"#,
        )
        .expect("decode");
        let integration = ApiIntegration::from(row);
        assert!(!integration.is_active);
        assert!(integration.api_endpoint.is_none());
        assert_eq!(integration.last_sync, Some(datetime!(2024-03-03 10:00:00 UTC)));
    }

    #[test]
    fn error_message_prefers_postgrest_message() {
        assert_eq!(
            error_message(r#"{"message":"permission denied","code":"42501"}"#).as_deref(),
            Some("permission denied")
        );
        assert_eq!(
            error_message(r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#)
                .as_deref(),
            Some("Invalid login credentials")
        );
        assert_eq!(error_message("<html>"), None);
    }

    #[test]
    fn not_authenticated_message() {
        assert_eq!(SupabaseError::NotAuthenticated.to_string(), "User not authenticated");
    }

    #[tokio::test]
    async fn mutations_require_a_session() {
        let config = BackendConfig::from_parts("http://127.0.0.1:9", "key").expect("config");
        let client = SupabaseClient::new(config).expect("client");
        let payload = NewScenario::from_form(
            Uuid::nil(),
            &ScenarioForm {
                name: "x".into(),
                ..ScenarioForm::default()
            },
        )
        .expect("valid form");
        assert!(matches!(
            client.insert_scenario(&payload).await,
            Err(SupabaseError::NotAuthenticated)
        ));
        assert!(matches!(
            client.require_user().await,
            Err(SupabaseError::NotAuthenticated)
        ));
    }
}
