//! Shared HTTP dispatch for all DocWal sub-clients.
//!
//! Every API call funnels through [`Transport`]: one request out, auth and
//! content headers attached, JSON response decoded, non-2xx statuses
//! classified into [`DocWalError`] variants. No retries — failures surface
//! directly to the caller.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::multipart::Form;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::{ConfigError, DocWalConfig};
use crate::error::DocWalError;

/// Header carrying the institution API key.
const API_KEY_HEADER: &str = "X-API-Key";

/// Shared request dispatcher.
///
/// Holds only the connection pool and the immutable base URL, so clones
/// are cheap and concurrent calls never contend on client state.
#[derive(Debug, Clone)]
pub(crate) struct Transport {
    http: reqwest::Client,
    base_url: url::Url,
}

impl Transport {
    pub(crate) fn new(config: &DocWalConfig) -> Result<Self, DocWalError> {
        let mut api_key = HeaderValue::from_str(config.api_key.as_str())
            .map_err(|_| DocWalError::Config(ConfigError::InvalidApiKey))?;
        api_key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, api_key);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        // JSON and multipart request builders override this per request.
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()
            .map_err(|e| DocWalError::Http {
                endpoint: "client_init".into(),
                source: e,
            })?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    /// Join the base URL and an absolute endpoint path.
    ///
    /// Plain concatenation, not `Url::join` — the base may carry a path
    /// segment (`/api`) that joining against an absolute path would drop.
    fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path)
    }

    /// Send a request with a JSON body and decode the JSON response.
    pub(crate) async fn json<B, T>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, DocWalError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let endpoint = format!("{method} {path}");
        let req = self.http.request(method, self.url_for(path)).json(body);
        let resp = self.dispatch(req, &endpoint).await?;
        Self::decode(resp, endpoint).await
    }

    /// Send a bodyless request with optional query parameters and decode
    /// the JSON response.
    pub(crate) async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, DocWalError> {
        let endpoint = format!("{method} {path}");
        let mut req = self.http.request(method, self.url_for(path));
        if !query.is_empty() {
            req = req.query(query);
        }
        let resp = self.dispatch(req, &endpoint).await?;
        Self::decode(resp, endpoint).await
    }

    /// Send a multipart form and decode the JSON response.
    pub(crate) async fn multipart<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        form: Form,
    ) -> Result<T, DocWalError> {
        let endpoint = format!("{method} {path}");
        let req = self.http.request(method, self.url_for(path)).multipart(form);
        let resp = self.dispatch(req, &endpoint).await?;
        Self::decode(resp, endpoint).await
    }

    /// Fetch a raw binary body (credential document download).
    pub(crate) async fn download(&self, path: &str) -> Result<Vec<u8>, DocWalError> {
        let endpoint = format!("GET {path}");
        let resp = self
            .dispatch(self.http.get(self.url_for(path)), &endpoint)
            .await?;
        resp.bytes()
            .await
            .map(|b| b.to_vec())
            .map_err(|e| DocWalError::Http { endpoint, source: e })
    }

    /// Send one request. Returns the response on 2xx, a typed error
    /// classified by status code otherwise.
    async fn dispatch(
        &self,
        req: reqwest::RequestBuilder,
        endpoint: &str,
    ) -> Result<reqwest::Response, DocWalError> {
        tracing::debug!(%endpoint, "dispatching DocWal API request");
        let resp = req.send().await.map_err(|e| DocWalError::Http {
            endpoint: endpoint.to_owned(),
            source: e,
        })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(%endpoint, status = status.as_u16(), "DocWal API request failed");
            return Err(DocWalError::from_response(endpoint.to_owned(), status, body));
        }

        Ok(resp)
    }

    /// Decode a successful response body. An empty body decodes as `{}`,
    /// which message-style response types accept via defaulted fields.
    async fn decode<T: DeserializeOwned>(
        resp: reqwest::Response,
        endpoint: String,
    ) -> Result<T, DocWalError> {
        let text = resp.text().await.map_err(|e| DocWalError::Http {
            endpoint: endpoint.clone(),
            source: e,
        })?;
        let raw = if text.trim().is_empty() { "{}" } else { text.as_str() };
        serde_json::from_str(raw).map_err(|e| DocWalError::Deserialization { endpoint, source: e })
    }
}
