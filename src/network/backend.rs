use reqwest::Url;
use reqwest::header::CONTENT_TYPE;

use crate::common::{IncomingPayload, OutgoingPayload};
use crate::error::DispatchError;

/// HTTP handle on the external Q&A backend.
#[derive(Debug, Clone)]
pub struct ChatBackend {
    http: reqwest::Client,
    endpoint: Url,
}

impl ChatBackend {
    pub fn new(endpoint: Url) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    pub fn with_client(http: reqwest::Client, endpoint: Url) -> Self {
        Self { http, endpoint }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// POSTs `{"message": ...}` and decodes the reply body.
    ///
    /// A non-success status is reported without reading the body.
    pub async fn exchange(&self, message: &str) -> Result<IncomingPayload, DispatchError> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .json(&OutgoingPayload { message })
            .send()
            .await
            .map_err(|source| self.transport_error(source))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DispatchError::Status(status));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|source| self.transport_error(source))?;
        Ok(serde_json::from_slice::<IncomingPayload>(&bytes)?)
    }

    /// GET on the endpoint's origin, where the backend answers a liveness string.
    pub async fn health_check(&self) -> Result<String, DispatchError> {
        let mut root = self.endpoint.clone();
        root.set_path("/");
        root.set_query(None);

        let response = self
            .http
            .get(root)
            .send()
            .await
            .map_err(|source| self.transport_error(source))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DispatchError::Status(status));
        }

        response
            .text()
            .await
            .map_err(|source| self.transport_error(source))
    }

    fn transport_error(&self, source: reqwest::Error) -> DispatchError {
        DispatchError::Transport {
            endpoint: self.endpoint.to_string(),
            source,
        }
    }
}
