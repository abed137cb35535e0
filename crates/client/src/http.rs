//! Shared request plumbing for the HTTP clients.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{status_error, ApiError};

/// Thin wrapper around a `reqwest::Client` bound to one base URL.
#[derive(Debug, Clone)]
pub(crate) struct Http {
    client: reqwest::Client,
    base_url: String,
}

impl Http {
    pub(crate) fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    fn request(
        &self,
        method: reqwest::Method,
        path: &str,
        token: Option<&str>,
    ) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut builder = self.client.request(method, url);
        if let Some(token) = token {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    /// Send and translate non-success statuses, logging the failure.
    async fn send(
        &self,
        builder: reqwest::RequestBuilder,
        context: &str,
    ) -> Result<reqwest::Response, ApiError> {
        let response = builder.send().await.map_err(|err| {
            let err = ApiError::from(err);
            tracing::error!(context, error = %err, "request failed");
            err
        })?;

        if response.status().is_success() {
            return Ok(response);
        }

        let err = status_error(response, context).await;
        tracing::error!(context, error = %err, "request rejected");
        Err(err)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
        context: &str,
    ) -> Result<T, ApiError> {
        let response = self
            .send(self.request(reqwest::Method::GET, path, token), context)
            .await?;
        response
            .json::<T>()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }

    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        token: Option<&str>,
        context: &str,
    ) -> Result<T, ApiError> {
        let response = self
            .send(
                self.request(reqwest::Method::POST, path, token).json(body),
                context,
            )
            .await?;
        response
            .json::<T>()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }

    /// POST where the response body is irrelevant (may be empty).
    pub(crate) async fn post_unit<B: Serialize>(
        &self,
        path: &str,
        body: Option<&B>,
        token: Option<&str>,
        context: &str,
    ) -> Result<(), ApiError> {
        let mut builder = self.request(reqwest::Method::POST, path, token);
        if let Some(body) = body {
            builder = builder.json(body);
        }
        self.send(builder, context).await?;
        Ok(())
    }

    pub(crate) async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        token: Option<&str>,
        context: &str,
    ) -> Result<T, ApiError> {
        let response = self
            .send(
                self.request(reqwest::Method::PUT, path, token).json(body),
                context,
            )
            .await?;
        response
            .json::<T>()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }

    pub(crate) async fn delete(
        &self,
        path: &str,
        token: Option<&str>,
        context: &str,
    ) -> Result<(), ApiError> {
        self.send(self.request(reqwest::Method::DELETE, path, token), context)
            .await?;
        Ok(())
    }
}

/// Unwrap an ambiguous list payload: either a bare JSON array or an object
/// wrapping the array under `key` (`{"companies": [...]}`). Anything else
/// is treated as an empty list, matching the backend's loose contract.
pub(crate) fn unwrap_list<T: DeserializeOwned>(value: Value, key: &str) -> Result<Vec<T>, ApiError> {
    let list = match value {
        Value::Array(_) => value,
        Value::Object(mut object) => match object.remove(key) {
            Some(inner @ Value::Array(_)) => inner,
            _ => return Ok(Vec::new()),
        },
        _ => return Ok(Vec::new()),
    };

    serde_json::from_value(list).map_err(|err| ApiError::Decode(err.to_string()))
}
