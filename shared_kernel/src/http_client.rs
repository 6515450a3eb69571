use std::time::Duration;

use reqwest::Response;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use thiserror::Error as ThisError;
use url::Url;

/// Outbound HTTP client. Every call is a single attempt bounded by `timeout`,
/// the middleware stack only carries request tracing.
#[derive(Clone)]
pub struct HttpClient {
    client: ClientWithMiddleware,
}

#[derive(ThisError, Debug)]
pub enum HttpClientError {
    #[error(transparent)]
    ResponseError(#[from] reqwest_middleware::Error),
    #[error("httpBuilderError {0}")]
    HTTPBuilderError(String),
}

impl From<reqwest::Error> for HttpClientError {
    fn from(value: reqwest::Error) -> Self {
        HttpClientError::ResponseError(value.into())
    }
}

impl HttpClient {
    pub fn new(timeout: Duration) -> Result<Self, HttpClientError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| HttpClientError::HTTPBuilderError(err.to_string()))?;
        let client = ClientBuilder::new(client)
            .with(TracingMiddleware::default())
            .build();
        Ok(Self { client })
    }

    async fn get(&self, url: Url) -> Result<Response, HttpClientError> {
        let response = self.client.get(url).send().await?;
        Ok(response.error_for_status()?)
    }

    /// Non-2xx statuses are reported as errors.
    #[tracing::instrument(err, skip(self), level = "info")]
    pub async fn get_text(&self, url: Url) -> Result<String, HttpClientError> {
        let text = self.get(url).await?.text().await?;
        Ok(text)
    }
}
