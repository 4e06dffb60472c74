use serde::{Deserialize, Serialize};
use serde_json::Value;
use time::{macros::format_description, Date, OffsetDateTime};
use uuid::Uuid;

/// Identifier of a row in the remote store.
pub type RecordId = String;

/// Authenticated user as reported by the auth service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: Uuid,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    /// Unix seconds.
    pub expires_at: Option<i64>,
    pub user: AuthUser,
}

impl Session {
    pub fn is_expired(&self, now: OffsetDateTime) -> bool {
        self.expires_at
            .map(|expiry| now.unix_timestamp() >= expiry)
            .unwrap_or(false)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scenario {
    pub id: RecordId,
    pub name: String,
    pub description: Option<String>,
    pub route_data: Option<Value>,
    pub freight_data: Option<Value>,
    pub supplier_data: Option<Value>,
    pub carbon_impact: f64,
    pub cost_impact: f64,
    pub time_impact: f64,
    pub created_at: OffsetDateTime,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AuditReport {
    pub id: RecordId,
    pub report_name: String,
    pub report_type: String,
    pub period_start: Option<Date>,
    pub period_end: Option<Date>,
    pub total_emissions: f64,
    pub total_shipments: u32,
    pub report_data: Option<Value>,
    pub generated_at: OffsetDateTime,
}

impl AuditReport {
    /// kg CO₂ per shipment; totals are stored in tons.
    pub fn average_emissions_kg(&self) -> f64 {
        if self.total_shipments == 0 {
            0.0
        } else {
            self.total_emissions * 1000.0 / self.total_shipments as f64
        }
    }

    pub fn period_label(&self) -> String {
        format!(
            "{} - {}",
            self.period_start.map(format_date).unwrap_or_else(|| "?".into()),
            self.period_end.map(format_date).unwrap_or_else(|| "?".into())
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ApiIntegration {
    pub id: RecordId,
    pub integration_type: String,
    pub integration_name: String,
    pub api_endpoint: Option<String>,
    pub is_active: bool,
    pub last_sync: Option<OffsetDateTime>,
    pub created_at: OffsetDateTime,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CarbonOffset {
    pub id: RecordId,
    pub provider_name: String,
    pub offset_type: String,
    pub price_per_ton: f64,
    #[serde(default)]
    pub available_tons: f64,
    #[serde(default)]
    pub certification: Option<String>,
    #[serde(default)]
    pub project_description: Option<String>,
    #[serde(default)]
    pub is_available: bool,
}

/// Company details attached to a user account.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub user_id: Uuid,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

pub fn format_date(date: Date) -> String {
    date.format(format_description!("[year]-[month]-[day]"))
        .unwrap_or_else(|_| date.to_string())
}

pub fn format_timestamp(timestamp: OffsetDateTime) -> String {
    timestamp
        .format(format_description!(
            "[year]-[month]-[day] [hour]:[minute]:[second] UTC"
        ))
        .unwrap_or_else(|_| timestamp.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, datetime};

    fn report(total_emissions: f64, total_shipments: u32) -> AuditReport {
        AuditReport {
            id: "r-1".into(),
            report_name: "Q1".into(),
            report_type: "quarterly".into(),
            period_start: Some(date!(2024 - 01 - 01)),
            period_end: Some(date!(2024 - 03 - 31)),
            total_emissions,
            total_shipments,
            report_data: None,
            generated_at: datetime!(2024-04-02 09:30:00 UTC),
        }
    }

    #[test]
    fn average_emissions_converts_tons_to_kg() {
        assert!((report(250.0, 200).average_emissions_kg() - 1250.0).abs() < 1e-9);
        assert_eq!(report(12.0, 0).average_emissions_kg(), 0.0);
    }

    #[test]
    fn period_label_uses_iso_dates() {
        assert_eq!(report(1.0, 1).period_label(), "2024-01-01 - 2024-03-31");
    }

    #[test]
    fn session_expiry_is_inclusive() {
        let session = Session {
            access_token: "a".into(),
            refresh_token: "r".into(),
            expires_at: Some(1_700_000_000),
            user: AuthUser {
                id: Uuid::nil(),
                email: None,
            },
        };
        let at = OffsetDateTime::from_unix_timestamp(1_700_000_000).expect("valid timestamp");
        assert!(session.is_expired(at));
        assert!(!session.is_expired(at - time::Duration::seconds(1)));
    }
}
