use crate::client::{BlinkClient, Session};
use crate::constants::{CLIENT_SPECIFIER, LOGIN_HOST};
use crate::error::{BlinkError, Result};
use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::debug;

#[async_trait]
pub trait Authentication: Send + Sync {
    /// Login to the Blink cloud
    async fn login(&mut self) -> Result<Session>;

    /// Check if a session is held
    fn is_authenticated(&self) -> bool;

    /// Get the current session
    fn session(&self) -> Option<&Session>;
}

#[async_trait]
impl Authentication for BlinkClient {
    async fn login(&mut self) -> Result<Session> {
        let data = json!({
            "email": self.email,
            "password": self.password,
            "client_specifier": CLIENT_SPECIFIER,
        });

        let response = self
            .http
            .post(&self.login_endpoint)
            .header("Host", LOGIN_HOST)
            .json(&data)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| BlinkError::FetchError(format!("Login request failed: {}", e)))?;

        let reply: Value = response.json().await.map_err(|e| {
            BlinkError::AuthenticationError(format!("Malformed login response: {}", e))
        })?;

        let session = parse_login_reply(&reply)?;
        debug!(region = %session.region, "region retrieved");
        debug!("auth token received");

        self.session = Some(session.clone());
        Ok(session)
    }

    fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }
}

/// Extract the region id and auth token from one login reply.
///
/// The region arrives as a one-entry map whose single key names the
/// regional host the account is provisioned in.
fn parse_login_reply(reply: &Value) -> Result<Session> {
    let region = reply
        .get("region")
        .and_then(|r| r.as_object())
        .and_then(|r| r.keys().next())
        .ok_or_else(|| {
            BlinkError::AuthenticationError("Login response carries no region".to_string())
        })?
        .to_string();

    let token = reply
        .get("authtoken")
        .and_then(|t| t.get("authtoken"))
        .and_then(|t| t.as_str())
        .ok_or_else(|| {
            BlinkError::AuthenticationError("Login response carries no authtoken".to_string())
        })?
        .to_string();

    Ok(Session { token, region })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_region_and_token_from_one_reply() {
        let reply = json!({
            "region": { "e006": { "tier": "prod" } },
            "authtoken": { "authtoken": "abc123" },
        });

        let session = parse_login_reply(&reply).unwrap();
        assert_eq!(session.region, "e006");
        assert_eq!(session.token, "abc123");
    }

    #[test]
    fn missing_region_is_an_authentication_error() {
        let reply = json!({
            "authtoken": { "authtoken": "abc123" },
        });

        let err = parse_login_reply(&reply).unwrap_err();
        assert!(matches!(err, BlinkError::AuthenticationError(_)));
    }

    #[test]
    fn missing_token_is_an_authentication_error() {
        let reply = json!({
            "region": { "e006": {} },
            "message": "invalid credentials",
        });

        let err = parse_login_reply(&reply).unwrap_err();
        assert!(matches!(err, BlinkError::AuthenticationError(_)));
    }

    #[test]
    fn empty_region_map_is_rejected() {
        let reply = json!({
            "region": {},
            "authtoken": { "authtoken": "abc123" },
        });

        assert!(parse_login_reply(&reply).is_err());
    }
}
