//! HTTP transport to the gateway endpoint.

use tracing::debug;
use url::Url;

use crate::error::Result;

/// Production gateway endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://www.qantanipayments.com/api/";

/// Posts generated markup to the gateway and returns the raw response.
///
/// The wire contract is one form-encoded field, `data`, holding the
/// markup text. The body comes back verbatim; interpreting it is the
/// caller's job, and so is any retry policy.
#[derive(Debug, Clone)]
pub struct Transport {
    http: reqwest::Client,
    endpoint: Url,
}

impl Transport {
    /// Creates a transport for the given endpoint.
    ///
    /// Tests point this at a local server; production traffic uses
    /// [`gateway`][Self::gateway].
    #[must_use]
    pub fn new(endpoint: Url) -> Self {
        Self { http: reqwest::Client::new(), endpoint }
    }

    /// Creates a transport for the production gateway.
    pub fn gateway() -> Result<Self> {
        Ok(Self::new(Url::parse(DEFAULT_ENDPOINT)?))
    }

    /// The endpoint requests are posted to.
    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Posts one request and returns the raw response body.
    pub async fn post(&self, markup: &str) -> Result<String> {
        debug!(endpoint = %self.endpoint, bytes = markup.len(), "posting request");

        let response = self
            .http
            .post(self.endpoint.clone())
            .form(&[("data", markup)])
            .send()
            .await?;
        let body = response.text().await?;

        debug!(bytes = body.len(), "received response");
        Ok(body)
    }
}
