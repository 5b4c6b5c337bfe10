//! HTTP transport used by the catalog client.
//!
//! The client only ever issues plain GETs, so the seam is a single method.
//! Production code uses [`ReqwestTransport`]; tests substitute
//! [`mocks::MockTransport`] to replay canned upstream bodies and to observe
//! which calls were made.

use async_trait::async_trait;

use super::domain::CatalogError;

/// Raw upstream reply: status plus the unparsed body
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Trait for issuing GET requests.
///
/// Implement this trait to create mock implementations for testing.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Fetch `url`. Only transport failures are errors; any status is a reply.
    async fn get(&self, url: &str) -> Result<HttpResponse, CatalogError>;
}

/// reqwest-backed transport
pub struct ReqwestTransport {
    http_client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a transport that identifies itself with `user_agent`.
    ///
    /// Accepts gzip-compressed responses.
    pub fn new(user_agent: &str) -> Result<Self, CatalogError> {
        let http_client = reqwest::Client::builder()
            .gzip(true)
            .user_agent(user_agent)
            .build()
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        Ok(Self { http_client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, CatalogError> {
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}
