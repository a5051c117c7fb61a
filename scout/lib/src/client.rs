//! Request execution with tracing instrumentation.
//!
//! [`ScoutClient`] sends one GET per [`fetch`](ScoutClient::fetch) call and
//! classifies the response by status code. It never retries and keeps no
//! state between calls.

use std::time::Instant;

use reqwest::Client;
use reqwest::header::ACCEPT;
use serde_json::Value;
use tracing::{Span, debug, info, instrument, warn};

use crate::config::ScoutConfig;
use crate::error::{Result, ScoutError};
use crate::outcome::QueryOutcome;
use crate::query::ProfileQuery;

/// Async client for the ScrapingDog LinkedIn endpoint.
///
/// ## Examples
///
/// ```rust,no_run
/// use scout_lib::{ProfileQuery, ScoutClient, ScoutConfig};
///
/// # async fn example() -> Result<(), scout_lib::ScoutError> {
/// let client = ScoutClient::new(ScoutConfig::from_env()?)?;
/// let outcome = client
///     .fetch(&ProfileQuery::new("deepak-kumar-mohanty-09aa59230"))
///     .await?;
/// println!("{}", outcome.render(Default::default()));
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ScoutClient {
    config: ScoutConfig,
    client: Client,
}

impl ScoutClient {
    /// Create a client from configuration.
    ///
    /// ## Errors
    ///
    /// - `ScoutError::MissingApiKey` if the API key is blank
    /// - `ScoutError::Http` if the HTTP client cannot be constructed
    pub fn new(config: ScoutConfig) -> Result<Self> {
        if config.api_key().trim().is_empty() {
            return Err(ScoutError::MissingApiKey);
        }

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { config, client })
    }

    /// Send the lookup and classify the response.
    ///
    /// Status 200 yields [`QueryOutcome::Success`] with the parsed body; any
    /// other status yields [`QueryOutcome::Failed`] without reading the body.
    ///
    /// ## Errors
    ///
    /// - `ScoutError::InvalidConfig` if the query has a blank `linkId`
    /// - `ScoutError::Http` if the request cannot complete
    /// - `ScoutError::InvalidJson` if a 200 body is not JSON
    #[instrument(
        name = "scrapingdog_request",
        skip(self, query),
        fields(
            http.method = "GET",
            http.status_code = tracing::field::Empty,
            scout.link_id = %query.link_id(),
            scout.resource_type = %query.resource_type(),
            otel.kind = "client",
        )
    )]
    pub async fn fetch(&self, query: &ProfileQuery) -> Result<QueryOutcome> {
        let start = Instant::now();
        query.validate()?;

        debug!(
            endpoint = %self.config.endpoint(),
            private = query.is_private(),
            "Sending lookup"
        );

        let response = self
            .client
            .get(self.config.endpoint())
            .header(ACCEPT, "application/json")
            .query(&[("api_key", self.config.api_key())])
            .query(query)
            .send()
            .await
            // The request URL carries the API key; keep it out of the error.
            .map_err(|e| {
                let e = e.without_url();
                warn!(error = %e, "Lookup request failed");
                ScoutError::Http(e)
            })?;

        let status = response.status().as_u16();
        Span::current().record("http.status_code", status);

        if status != 200 {
            warn!(status, "API returned non-success status");
            return Ok(QueryOutcome::Failed { status });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ScoutError::Http(e.without_url()))?;

        let value: Value = serde_json::from_slice(&body).map_err(|e| {
            warn!(error = %e, body_len = body.len(), "Response body is not valid JSON");
            ScoutError::InvalidJson(e)
        })?;

        info!(
            duration_ms = start.elapsed().as_millis() as u64,
            "Lookup completed"
        );

        Ok(QueryOutcome::Success(value))
    }
}

impl std::fmt::Debug for ScoutClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScoutClient")
            .field("endpoint", &self.config.endpoint())
            .finish_non_exhaustive()
    }
}

/// Run a single lookup against `endpoint` with `api_key`.
///
/// Builds a fresh client for the call; use [`ScoutClient`] directly to
/// reuse connections across lookups.
pub async fn execute(
    endpoint: &str,
    api_key: &str,
    query: &ProfileQuery,
) -> Result<QueryOutcome> {
    let config = ScoutConfig::new(api_key).with_endpoint(endpoint);
    ScoutClient::new(config)?.fetch(query).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_new_rejects_blank_api_key() {
        let result = ScoutClient::new(ScoutConfig::new(""));
        assert!(matches!(result, Err(ScoutError::MissingApiKey)));
    }

    #[test]
    fn test_client_debug_hides_key() {
        let client = ScoutClient::new(ScoutConfig::new("hidden-key")).unwrap();
        let debug = format!("{:?}", client);
        assert!(debug.contains("ScoutClient"));
        assert!(debug.contains("endpoint"));
        assert!(!debug.contains("hidden-key"));
    }

    #[tokio::test]
    async fn test_blank_link_id_never_sends() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .expect(0)
            .mount(&mock_server)
            .await;

        let result = execute(
            &format!("{}/linkedin", mock_server.uri()),
            "test-key",
            &ProfileQuery::new(""),
        )
        .await;

        assert!(matches!(result, Err(ScoutError::InvalidConfig(_))));
    }

    #[tokio::test]
    async fn test_connection_refused_is_http_error() {
        let result = execute(
            "http://127.0.0.1:1/linkedin",
            "test-key",
            &ProfileQuery::new("someone"),
        )
        .await;

        match result {
            Err(ScoutError::Http(e)) => {
                assert!(e.url().is_none());
                assert!(!e.to_string().contains("test-key"));
            }
            other => panic!("Expected Http error, got {other:?}"),
        }
    }

    // ===========================================
    // Tracing tests
    // ===========================================

    #[tokio::test]
    #[tracing_test::traced_test]
    async fn test_fetch_emits_tracing_events() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/linkedin"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"name": "x"})))
            .mount(&mock_server)
            .await;

        let _ = execute(
            &format!("{}/linkedin", mock_server.uri()),
            "log-secret-key",
            &ProfileQuery::new("someone"),
        )
        .await;

        assert!(logs_contain("scrapingdog_request"));
        assert!(logs_contain("Lookup completed"));
        assert!(!logs_contain("log-secret-key"));
    }

    #[tokio::test]
    #[tracing_test::traced_test]
    async fn test_fetch_emits_warning_on_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/linkedin"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Invalid API key"))
            .mount(&mock_server)
            .await;

        let _ = execute(
            &format!("{}/linkedin", mock_server.uri()),
            "log-secret-key",
            &ProfileQuery::new("someone"),
        )
        .await;

        assert!(logs_contain("API returned non-success status"));
        assert!(!logs_contain("log-secret-key"));
    }
}
