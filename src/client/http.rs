//! `reqwest` implementation of [`EmployeeBackend`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, RequestBuilder};

use super::{BackendError, EmployeeBackend};
use crate::domain::EmployeeId;

/// HTTP client for the backend employee store.
///
/// Every request is bounded by the timeout given at construction, so a
/// hung backend cannot hold a gateway task forever. Dropping an in-flight
/// call future aborts the request and releases its connection.
#[derive(Debug, Clone)]
pub struct HttpEmployeeBackend {
    client: Client,
    base_url: String,
}

impl HttpEmployeeBackend {
    /// Builds a client for the backend rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Transport`] if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, BackendError> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Returns the backend root URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/employees", self.base_url)
    }

    fn record_url(&self, id: EmployeeId) -> String {
        format!("{}/employees/{id}", self.base_url)
    }

    async fn execute(&self, request: RequestBuilder) -> Result<Vec<u8>, BackendError> {
        let resp = request.send().await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(BackendError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(resp.bytes().await?.to_vec())
    }
}

#[async_trait]
impl EmployeeBackend for HttpEmployeeBackend {
    async fn list(&self) -> Result<Vec<u8>, BackendError> {
        self.execute(self.client.get(self.collection_url())).await
    }

    async fn get(&self, id: EmployeeId) -> Result<Vec<u8>, BackendError> {
        self.execute(self.client.get(self.record_url(id))).await
    }

    async fn create(&self, payload: Vec<u8>) -> Result<Vec<u8>, BackendError> {
        let request = self
            .client
            .post(self.collection_url())
            .header(CONTENT_TYPE, "application/json")
            .body(payload);
        self.execute(request).await
    }

    async fn update(&self, id: EmployeeId, payload: Vec<u8>) -> Result<(), BackendError> {
        let request = self
            .client
            .put(self.record_url(id))
            .header(CONTENT_TYPE, "application/json")
            .body(payload);
        self.execute(request).await.map(drop)
    }

    async fn delete(&self, id: EmployeeId) -> Result<(), BackendError> {
        self.execute(self.client.delete(self.record_url(id)))
            .await
            .map(drop)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let Ok(backend) = HttpEmployeeBackend::new("http://localhost:9000/", Duration::from_secs(1))
        else {
            panic!("client construction failed");
        };
        assert_eq!(backend.base_url(), "http://localhost:9000");
        assert_eq!(backend.collection_url(), "http://localhost:9000/employees");
        assert_eq!(
            backend.record_url(EmployeeId::new(42)),
            "http://localhost:9000/employees/42"
        );
    }

    #[tokio::test]
    async fn unreachable_backend_is_a_transport_error() {
        // Port 9 (discard) on loopback is closed in test environments.
        let Ok(backend) = HttpEmployeeBackend::new("http://127.0.0.1:9", Duration::from_secs(2))
        else {
            panic!("client construction failed");
        };
        let result = backend.list().await;
        assert!(matches!(result, Err(BackendError::Transport(_))));
    }
}
