//! HTTP analysis gateway. Implements AnalysisPort with one multipart POST.
//!
//! No retries, no streaming: a single blocking round trip per call. The
//! success/error boundary is the HTTP status code, not the payload shape.

use crate::domain::{Domain, DomainError, ImageRef};
use crate::ports::AnalysisPort;
use reqwest::header::ACCEPT;
use reqwest::multipart::{Form, Part};
use serde_json::{Map, Value};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Error message when the endpoint fails with an empty body.
const GENERIC_UPLOAD_ERROR: &str = "Failed to upload image";

/// Analysis gateway over reqwest.
pub struct HttpAnalysisGateway {
    client: reqwest::Client,
}

impl HttpAnalysisGateway {
    /// `timeout` bounds the whole request when given; `None` leaves the
    /// request unbounded.
    pub fn new(timeout: Option<Duration>) -> Result<Self, DomainError> {
        let mut builder = reqwest::Client::builder();
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        let client = builder
            .build()
            .map_err(|e| DomainError::Config(format!("build HTTP client: {}", e)))?;
        Ok(Self { client })
    }

    /// Parses a success body. Anything but a JSON object is a parse failure;
    /// an empty map is never substituted for a broken payload.
    fn parse_body(text: &str) -> Result<Map<String, Value>, DomainError> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| DomainError::Parse(e.to_string()))?;
        match value {
            Value::Object(map) => Ok(map),
            other => Err(DomainError::Parse(format!(
                "expected a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[async_trait::async_trait]
impl AnalysisPort for HttpAnalysisGateway {
    async fn upload(
        &self,
        domain: &Domain,
        image: &ImageRef,
    ) -> Result<Map<String, Value>, DomainError> {
        let bytes = tokio::fs::read(&image.locator)
            .await
            .map_err(|e| DomainError::Upload(format!("read {}: {}", image.locator, e)))?;

        let file_name = image.file_name();
        let part = Part::bytes(bytes)
            .file_name(file_name.clone())
            .mime_str(image.mime())
            .map_err(|e| DomainError::Upload(format!("invalid MIME type {}: {}", image.mime(), e)))?;
        let form = Form::new().part("file", part);

        info!(endpoint = %domain.endpoint, file = %file_name, "uploading image");

        let response = self
            .client
            .post(&domain.endpoint)
            .header(ACCEPT, "application/json")
            .multipart(form)
            .send()
            .await
            .map_err(|e| DomainError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| DomainError::Network(e.to_string()))?;

        if !status.is_success() {
            warn!(status = %status, body_len = text.len(), "analysis endpoint returned error");
            let message = if text.is_empty() {
                GENERIC_UPLOAD_ERROR.to_string()
            } else {
                text
            };
            return Err(DomainError::Upload(message));
        }

        debug!(status = %status, body_len = text.len(), "analysis response received");
        Self::parse_body(&text)
    }
}
