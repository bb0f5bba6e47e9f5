//! Urban Dictionary HTTP client
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: Initial implementation (single GET, full body read, JSON decode)

use anyhow::Result;
use log::{debug, warn};
use reqwest::Client;
use url::form_urlencoded;
use uuid::Uuid;

use super::error::LookupError;
use super::types::LookupResult;
use crate::core::LookupConfig;

/// Percent-encode a term for use as a query-string value.
///
/// Spaces become `+` and every reserved character is escaped, so the
/// result decodes back to the exact input.
pub fn encode_term(term: &str) -> String {
    form_urlencoded::byte_serialize(term.as_bytes()).collect()
}

/// Thin wrapper over a shared `reqwest::Client`
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Clone)]
pub struct DictionaryClient {
    http: Client,
    endpoint: String,
}

impl DictionaryClient {
    pub fn new(config: &LookupConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {e}"))?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Full request URL for a raw (unencoded) term
    pub fn request_url(&self, term: &str) -> String {
        format!("{}?term={}", self.endpoint, encode_term(term))
    }

    /// Look up a raw term and decode every entry the service returns.
    pub async fn define(&self, term: &str, request_id: Uuid) -> Result<LookupResult, LookupError> {
        let url = self.request_url(term);
        debug!("[{request_id}] GET {url}");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| LookupError::Transport { source })?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            warn!("[{request_id}] Dictionary service answered HTTP {status}");
        }

        let payload = response
            .bytes()
            .await
            .map_err(|source| LookupError::Read { source, status })?;
        debug!("[{request_id}] Read {} bytes (HTTP {status})", payload.len());

        serde_json::from_slice::<LookupResult>(&payload).map_err(|source| LookupError::Decode {
            source,
            body: String::from_utf8_lossy(&payload).into_owned(),
            status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::dictionary::test_support::{refused_endpoint, truncated_body_endpoint};
    use crate::features::dictionary::ErrorKind;
    use std::time::Duration;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(endpoint: String) -> DictionaryClient {
        DictionaryClient::new(&LookupConfig {
            endpoint,
            timeout: Duration::from_secs(5),
        })
        .unwrap()
    }

    #[test]
    fn test_encode_term_escapes_reserved() {
        assert_eq!(encode_term("cat"), "cat");
        assert_eq!(encode_term("hello world"), "hello+world");
        assert_eq!(encode_term("a&b=c"), "a%26b%3Dc");
        assert_eq!(encode_term("50%?#/"), "50%25%3F%23%2F");
        assert_eq!(encode_term(""), "");
    }

    #[test]
    fn test_encode_term_decodes_back() {
        let terms = [
            "cat",
            "hello world",
            "a&b=c+d",
            "what?#frag/path",
            "100% real",
            "naïve café",
            "( ͡° ͜ʖ ͡°)",
            " padded ",
        ];
        for term in terms {
            let query = format!("term={}", encode_term(term));
            let decoded: Vec<(String, String)> = form_urlencoded::parse(query.as_bytes())
                .into_owned()
                .collect();
            assert_eq!(decoded, vec![("term".to_string(), term.to_string())], "{term}");
        }
    }

    #[test]
    fn test_request_url() {
        let client = client_for("http://api.urbandictionary.com/v0/define".to_string());
        assert_eq!(
            client.request_url("big deal"),
            "http://api.urbandictionary.com/v0/define?term=big+deal"
        );
        assert_eq!(client.endpoint(), "http://api.urbandictionary.com/v0/define");
    }

    #[tokio::test]
    async fn test_define_decodes_entries() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v0/define"))
            .and(query_param("term", "hello world"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"list":[{"definition":"D1","example":"E1"},{"definition":"D2","example":"E2"}]}"#,
            ))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(format!("{}/v0/define", server.uri()));
        let result = client.define("hello world", Uuid::new_v4()).await.unwrap();

        assert_eq!(result.list.len(), 2);
        assert_eq!(result.list[0].definition, "D1");
        assert_eq!(result.list[1].example, "E2");
    }

    #[tokio::test]
    async fn test_define_malformed_json_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"list\": [oops"))
            .mount(&server)
            .await;

        let client = client_for(format!("{}/v0/define", server.uri()));
        let err = client.define("cat", Uuid::new_v4()).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Decode);
        assert_eq!(err.status(), Some(200));
        assert_eq!(err.body(), Some("{\"list\": [oops"));
    }

    #[tokio::test]
    async fn test_define_error_page_keeps_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503).set_body_string("<h1>down</h1>"))
            .mount(&server)
            .await;

        let client = client_for(format!("{}/v0/define", server.uri()));
        let err = client.define("cat", Uuid::new_v4()).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Decode);
        assert_eq!(err.status(), Some(503));
        assert_eq!(err.body(), Some("<h1>down</h1>"));
    }

    #[tokio::test]
    async fn test_define_refused_connection_is_transport_error() {
        let client = client_for(refused_endpoint());
        let err = client.define("cat", Uuid::new_v4()).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Transport);
        assert!(err.status().is_none());
        assert!(err.body().is_none());
    }

    #[tokio::test]
    async fn test_define_timeout_is_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(r#"{"list":[]}"#)
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let client = DictionaryClient::new(&LookupConfig {
            endpoint: format!("{}/v0/define", server.uri()),
            timeout: Duration::from_millis(200),
        })
        .unwrap();
        let err = client.define("cat", Uuid::new_v4()).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Transport);
    }

    #[tokio::test]
    async fn test_define_truncated_body_is_read_error() {
        let endpoint = truncated_body_endpoint().await;
        let client = client_for(endpoint);
        let err = client.define("cat", Uuid::new_v4()).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Read);
        assert_eq!(err.status(), Some(200));
    }
}
