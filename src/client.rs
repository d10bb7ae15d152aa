use crate::clock::{Clock, SystemClock};
use crate::constants::{API_DOMAIN, DEFAULT_REQUEST_TIMEOUT, LOGIN_ENDPOINT};
use std::sync::Arc;
use std::time::Duration;

/// Short-lived API session issued at login.
///
/// The region names the vendor host serving this account; the token must
/// accompany every subsequent call.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub region: String,
}

pub struct BlinkClient {
    pub(crate) http: reqwest::Client,
    pub(crate) email: String,
    pub(crate) password: String,
    pub(crate) timeout: Duration,

    pub(crate) login_endpoint: String,
    pub(crate) rest_base: Option<String>,

    pub(crate) clock: Arc<dyn Clock>,
    pub(crate) session: Option<Session>,
}

impl BlinkClient {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            email: email.into(),
            password: password.into(),
            timeout: DEFAULT_REQUEST_TIMEOUT,
            login_endpoint: LOGIN_ENDPOINT.to_string(),
            rest_base: None,
            clock: Arc::new(SystemClock),
            session: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Replace the login endpoint, e.g. to route through a proxy
    pub fn with_login_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.login_endpoint = endpoint.into();
        self
    }

    /// Replace the regional REST base URL instead of deriving it from the region
    pub fn with_rest_base(mut self, base: impl Into<String>) -> Self {
        self.rest_base = Some(base.into());
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Base URL of the REST host serving the given region
    pub fn regional_base(&self, region: &str) -> String {
        match &self.rest_base {
            Some(base) => base.clone(),
            None => format!("https://rest-{}.{}", region, API_DOMAIN),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regional_base_derives_from_region() {
        let client = BlinkClient::new("user", "pass");
        assert_eq!(
            client.regional_base("e006"),
            "https://rest-e006.immedia-semi.com"
        );
    }

    #[test]
    fn regional_base_honors_override() {
        let client = BlinkClient::new("user", "pass").with_rest_base("http://127.0.0.1:9000");
        assert_eq!(client.regional_base("e006"), "http://127.0.0.1:9000");
    }
}
