pub mod envelope;
pub mod errors;
pub mod services;
pub mod bookings;

use std::time::Duration;

use reqwest::{Client, Method, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use configs::ApiConfig;

use crate::errors::{ClientError, FALLBACK_ERROR_MESSAGE};

/// Typed client for the HomeHero marketplace REST API.
///
/// One configured `reqwest` client shared by every endpoint method; the
/// `{ success, data, message? }` envelope is normalized in one place
/// (see [`envelope`]) instead of per call site.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(cfg: &ApiConfig) -> Result<Self, ClientError> {
        let mut base = cfg.base_url.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url =
            Url::parse(&base).map_err(|e| ClientError::InvalidBaseUrl(e.to_string()))?;
        let http = Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
            .build()?;
        Ok(Self { http, base_url })
    }

    /// Shorthand for tests and one-off tools: default timeouts, given base URL.
    pub fn from_base_url(base_url: &str) -> Result<Self, ClientError> {
        Self::new(&ApiConfig { base_url: base_url.to_string(), ..ApiConfig::default() })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| ClientError::InvalidBaseUrl(e.to_string()))
    }

    /// Issue a request and hand back the parsed JSON body plus status
    /// handling. Non-2xx responses become `Api` errors carrying the server
    /// message when one was enveloped, the HTTP status otherwise.
    #[instrument(skip(self, query, body), fields(method = %method, path = path))]
    async fn request_value<B>(
        &self,
        method: Method,
        path: &str,
        query: Option<&[(&str, &str)]>,
        body: Option<&B>,
    ) -> Result<Value, ClientError>
    where
        B: Serialize + ?Sized,
    {
        let mut req = self.http.request(method, self.url(path)?);
        if let Some(q) = query {
            req = req.query(q);
        }
        if let Some(b) = body {
            req = req.json(b);
        }
        let resp = req.send().await?;
        let status = resp.status();
        let bytes = resp.bytes().await?;
        let value: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        if !status.is_success() {
            let message = envelope::error_message(&value)
                .unwrap_or_else(|| format!("{FALLBACK_ERROR_MESSAGE} ({status})"));
            warn!(%status, %message, "api request failed");
            return Err(ClientError::Api { status: Some(status), message });
        }
        debug!(%status, "api request ok");
        Ok(value)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<&[(&str, &str)]>,
    ) -> Result<T, ClientError> {
        let value = self.request_value::<()>(Method::GET, path, query, None).await?;
        envelope::normalize(value)
    }

    pub(crate) async fn post_ack<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ClientError> {
        let value = self.request_value(Method::POST, path, None, Some(body)).await?;
        envelope::ack(&value)
    }

    pub(crate) async fn patch_ack<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ClientError> {
        let value = self.request_value(Method::PATCH, path, None, Some(body)).await?;
        envelope::ack(&value)
    }

    pub(crate) async fn delete_ack(&self, path: &str) -> Result<(), ClientError> {
        let value = self.request_value::<()>(Method::DELETE, path, None, None).await?;
        envelope::ack(&value)
    }
}
