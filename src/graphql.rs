//! GraphQL transport.
//!
//! Resolvers talk to the upstream through [`GraphqlTransport`], which takes a
//! query document and returns the decoded JSON response. [`HttpTransport`]
//! is the real implementation; tests substitute canned responses.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::config::Config;
use crate::error::{AudiothekError, Result};

/// Executes one query against the upstream endpoint.
#[async_trait]
pub trait GraphqlTransport: Send + Sync {
    /// Run `query` and return the full response body (rooted at `data`).
    async fn execute(&self, query: &str) -> Result<Value>;
}

/// HTTP transport issuing `GET <api_url>?query=...` with a JSON `Accept`
/// header.
pub struct HttpTransport {
    client: Client,
    api_url: String,
}

impl HttpTransport {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .use_rustls_tls()
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

#[async_trait]
impl GraphqlTransport for HttpTransport {
    #[instrument(skip(self, query), fields(api = %self.api_url))]
    async fn execute(&self, query: &str) -> Result<Value> {
        debug!("GraphQL query: {query}");

        let resp = self
            .client
            .get(&self.api_url)
            .header("Accept", "application/json")
            .query(&[("query", query)])
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(AudiothekError::Status(resp.status()));
        }

        let body: Value = resp.json().await?;
        check_errors(body)
    }
}

/// Surface GraphQL `errors` when the response carries no usable `data`.
///
/// Partial responses (data plus errors) are passed through untouched.
pub fn check_errors(body: Value) -> Result<Value> {
    let data_missing = body.get("data").is_none_or(Value::is_null);
    let messages: Vec<&str> = body
        .get("errors")
        .and_then(Value::as_array)
        .map(|errors| {
            errors
                .iter()
                .filter_map(|e| e.get("message").and_then(Value::as_str))
                .collect()
        })
        .unwrap_or_default();

    if data_missing && !messages.is_empty() {
        return Err(AudiothekError::Upstream(messages.join("; ")));
    }

    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn errors_without_data_are_surfaced() {
        let body = json!({"errors": [{"message": "Syntax Error"}, {"message": "again"}], "data": null});
        match check_errors(body) {
            Err(AudiothekError::Upstream(msg)) => assert_eq!(msg, "Syntax Error; again"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn partial_data_passes_through() {
        let body = json!({"errors": [{"message": "minor"}], "data": {"item": null}});
        assert!(check_errors(body).is_ok());
        assert!(check_errors(json!({"data": {}})).is_ok());
    }

    #[test]
    fn transport_uses_configured_endpoint() {
        let config = Config {
            api_url: "http://127.0.0.1:9/graphql".into(),
            ..Config::default()
        };
        let transport = HttpTransport::new(&config).unwrap();
        assert_eq!(transport.api_url(), "http://127.0.0.1:9/graphql");
    }
}
