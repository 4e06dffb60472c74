//! Supabase auth (GoTrue) endpoints on top of [`SupabaseClient`].

use reqwest::RequestBuilder;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::{AuthUser, Session};

use super::supabase::{check_status, SupabaseClient, SupabaseError};

#[derive(Debug, Serialize)]
struct PasswordGrant<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct RefreshGrant<'a> {
    refresh_token: &'a str,
}

#[derive(Debug, Deserialize)]
struct SessionDto {
    access_token: String,
    refresh_token: String,
    #[serde(default)]
    expires_in: Option<i64>,
    #[serde(default)]
    expires_at: Option<i64>,
    user: AuthUser,
}

impl SessionDto {
    fn into_session(self, now: OffsetDateTime) -> Session {
        let expires_at = self.expires_at.or_else(|| {
            self.expires_in
                .map(|seconds| now.unix_timestamp() + seconds)
        });
        Session {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            expires_at,
            user: self.user,
        }
    }
}

/// Sign-up returns a session when e-mail confirmation is disabled and the
/// bare user otherwise.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SignUpDto {
    Session(SessionDto),
    User(AuthUser),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignUpOutcome {
    SignedIn(Session),
    ConfirmationRequired(AuthUser),
}

impl SupabaseClient {
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session, SupabaseError> {
        let mut url = self.auth_url("token")?;
        url.query_pairs_mut().append_pair("grant_type", "password");
        let builder = self.anonymous(self.http.post(url)).json(&PasswordGrant {
            email: email.trim(),
            password,
        });
        let dto: SessionDto = self.send_json(builder).await.inspect_err(|error| {
            tracing::warn!(%error, "sign-in failed");
        })?;
        let session = dto.into_session(OffsetDateTime::now_utc());
        tracing::info!(user = %session.user.id, "signed in");
        self.set_session(Some(session.clone())).await;
        Ok(session)
    }

    pub async fn sign_up(&self, email: &str, password: &str) -> Result<SignUpOutcome, SupabaseError> {
        let url = self.auth_url("signup")?;
        let builder = self.anonymous(self.http.post(url)).json(&PasswordGrant {
            email: email.trim(),
            password,
        });
        let dto: SignUpDto = self.send_json(builder).await.inspect_err(|error| {
            tracing::warn!(%error, "sign-up failed");
        })?;
        match dto {
            SignUpDto::Session(dto) => {
                let session = dto.into_session(OffsetDateTime::now_utc());
                tracing::info!(user = %session.user.id, "signed up");
                self.set_session(Some(session.clone())).await;
                Ok(SignUpOutcome::SignedIn(session))
            }
            SignUpDto::User(user) => {
                tracing::info!(user = %user.id, "sign-up awaiting e-mail confirmation");
                Ok(SignUpOutcome::ConfirmationRequired(user))
            }
        }
    }

    /// Exchanges a persisted refresh token for a new session.
    pub async fn refresh_session(&self, refresh_token: &str) -> Result<Session, SupabaseError> {
        let mut url = self.auth_url("token")?;
        url.query_pairs_mut().append_pair("grant_type", "refresh_token");
        let builder = self
            .anonymous(self.http.post(url))
            .json(&RefreshGrant { refresh_token });
        let dto: SessionDto = self.send_json(builder).await?;
        let session = dto.into_session(OffsetDateTime::now_utc());
        tracing::info!(user = %session.user.id, "session restored");
        self.set_session(Some(session.clone())).await;
        Ok(session)
    }

    #[allow(dead_code)]
    pub async fn current_user(&self) -> Result<AuthUser, SupabaseError> {
        self.require_user().await?;
        let url = self.auth_url("user")?;
        let builder = self.authorized(self.http.get(url)).await;
        self.send_json(builder).await
    }

    /// Revokes the session remotely; the local session is dropped either way.
    pub async fn sign_out(&self) -> Result<(), SupabaseError> {
        if self.session().await.is_none() {
            return Ok(());
        }
        let url = self.auth_url("logout")?;
        let builder = self.authorized(self.http.post(url)).await;
        let result = match builder.send().await {
            Ok(response) => check_status(response).await.map(|_| ()),
            Err(error) => Err(error.into()),
        };
        self.set_session(None).await;
        if let Err(error) = &result {
            tracing::warn!(%error, "remote sign-out failed");
        } else {
            tracing::info!("signed out");
        }
        result
    }

    fn anonymous(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("apikey", &self.config.anon_key)
            .bearer_auth(&self.config.anon_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;
    use uuid::Uuid;

    const SESSION_JSON: &str = r#"{
        "access_token": "eyJ.access",
        "token_type": "bearer",
        "expires_in": 3600,
        "refresh_token": "r-123",
        "user": { "id": "7c9e6679-7425-40de-944b-e07fc1f90ae7", "email": "ops@example.com", "role": "authenticated" }
    }"#;

    #[test]
    fn session_expiry_derived_from_expires_in() {
        let dto: SessionDto = serde_json::from_str(SESSION_JSON).expect("decode");
        let now = datetime!(2024-05-01 12:00:00 UTC);
        let session = dto.into_session(now);
        assert_eq!(session.expires_at, Some(now.unix_timestamp() + 3600));
        assert_eq!(session.refresh_token, "r-123");
        assert_eq!(session.user.email.as_deref(), Some("ops@example.com"));
    }

    #[test]
    fn explicit_expires_at_wins() {
        let json = SESSION_JSON.replace("\"expires_in\": 3600", "\"expires_at\": 1714568400");
        let dto: SessionDto = serde_json::from_str(&json).expect("decode");
        let session = dto.into_session(datetime!(2020-01-01 00:00:00 UTC));
        assert_eq!(session.expires_at, Some(1_714_568_400));
    }

    #[test]
    fn sign_up_without_session_requires_confirmation() {
        let dto: SignUpDto = serde_json::from_str(
            r#"{"id":"7c9e6679-7425-40de-944b-e07fc1f90ae7","email":"new@example.com","confirmation_sent_at":"2024-05-01T12:00:00Z"}"#,
        )
        .expect("decode");
        match dto {
            SignUpDto::User(user) => {
                assert_eq!(
                    user.id,
                    Uuid::parse_str("7c9e6679-7425-40de-944b-e07fc1f90ae7").expect("uuid")
                );
            }
            SignUpDto::Session(_) => panic!("expected bare user"),
        }

        let dto: SignUpDto = serde_json::from_str(SESSION_JSON).expect("decode");
        assert!(matches!(dto, SignUpDto::Session(_)));
    }

    #[tokio::test]
    async fn sign_out_without_session_is_a_no_op() {
        let config = crate::infra::supabase::BackendConfig::from_parts("http://127.0.0.1:9", "key")
            .expect("config");
        let client = SupabaseClient::new(config).expect("client");
        assert!(client.sign_out().await.is_ok());
    }
}
