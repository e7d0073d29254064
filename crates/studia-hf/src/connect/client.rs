//! Hugging Face HTTP client.

use std::time::Duration;

use bytes::Bytes;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use studia_core::Error;

use super::HfConfig;
use crate::{HfError, TRACING_TARGET_CLIENT};

/// Client for the hosted inference endpoints.
///
/// Cheap to clone; the inner `reqwest::Client` is already reference-counted.
#[derive(Debug, Clone)]
pub struct HfClient {
    http: reqwest::Client,
    config: HfConfig,
}

impl HfClient {
    /// Creates a new client from configuration.
    ///
    /// Fails if the endpoint is not an HTTP(S) URL or the HTTP client
    /// cannot be constructed.
    pub fn new(config: HfConfig) -> Result<Self, HfError> {
        if !config.hf_endpoint.starts_with("http://") && !config.hf_endpoint.starts_with("https://")
        {
            return Err(HfError::InvalidEndpoint(config.hf_endpoint.clone()));
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.hf_timeout))
            .build()?;

        Ok(Self { http, config })
    }

    /// The client configuration.
    pub fn config(&self) -> &HfConfig {
        &self.config
    }

    fn model_url(&self, model: &str) -> String {
        format!(
            "{}/models/{}",
            self.config.hf_endpoint.trim_end_matches('/'),
            model
        )
    }

    fn apply_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.config.hf_api_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn check_status(model: &str, response: reqwest::Response) -> Result<reqwest::Response, Error> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::warn!(
            target: TRACING_TARGET_CLIENT,
            model = %model,
            status = status.as_u16(),
            "Inference endpoint returned an error"
        );

        let error = Error::external_error()
            .with_message(format!("{model}: {} ({status})", truncate(&body)));
        Err(match status {
            StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
                Error::timeout().with_message(format!("{model}: inference request timed out"))
            }
            _ => error,
        })
    }

    /// POSTs a JSON payload to a model and decodes the JSON response.
    pub(crate) async fn post_json<T>(
        &self,
        model: &str,
        payload: &serde_json::Value,
    ) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let request = self.apply_auth(self.http.post(self.model_url(model)).json(payload));
        let response = request.send().await.map_err(|e| {
            Error::external_error()
                .with_message(format!("{model}: request failed"))
                .with_source(e)
        })?;

        let response = Self::check_status(model, response).await?;
        response.json::<T>().await.map_err(|e| {
            Error::serialization()
                .with_message(format!("{model}: unexpected response shape"))
                .with_source(e)
        })
    }

    /// POSTs a raw binary payload (e.g. an image) and decodes the JSON response.
    pub(crate) async fn post_binary<T>(&self, model: &str, payload: Bytes) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let request = self.apply_auth(self.http.post(self.model_url(model)).body(payload));
        let response = request.send().await.map_err(|e| {
            Error::external_error()
                .with_message(format!("{model}: request failed"))
                .with_source(e)
        })?;

        let response = Self::check_status(model, response).await?;
        response.json::<T>().await.map_err(|e| {
            Error::serialization()
                .with_message(format!("{model}: unexpected response shape"))
                .with_source(e)
        })
    }

    /// POSTs a JSON payload and returns the raw response bytes plus the
    /// response content type (used by audio-producing models).
    pub(crate) async fn post_json_for_bytes(
        &self,
        model: &str,
        payload: &serde_json::Value,
    ) -> Result<(Bytes, String), Error> {
        let request = self.apply_auth(self.http.post(self.model_url(model)).json(payload));
        let response = request.send().await.map_err(|e| {
            Error::external_error()
                .with_message(format!("{model}: request failed"))
                .with_source(e)
        })?;

        let response = Self::check_status(model, response).await?;
        let media_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = response.bytes().await.map_err(|e| {
            Error::external_error()
                .with_message(format!("{model}: failed to read response body"))
                .with_source(e)
        })?;

        Ok((bytes, media_type))
    }
}

/// Bounds error bodies included in messages to a single readable line.
fn truncate(body: &str) -> String {
    body.lines()
        .next()
        .unwrap_or_default()
        .chars()
        .take(200)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_http_endpoint() {
        let config = HfConfig::default().with_endpoint("ftp://models.example.com");
        assert!(matches!(
            HfClient::new(config),
            Err(HfError::InvalidEndpoint(_))
        ));
    }

    #[test]
    fn model_url_joins_cleanly() {
        let config = HfConfig::default().with_endpoint("https://hub.example.com/");
        let client = HfClient::new(config).unwrap();
        assert_eq!(
            client.model_url("org/model"),
            "https://hub.example.com/models/org/model"
        );
    }
}
