//! Mock analysis gateway for demos and tests without a live endpoint.
//!
//! Returns a canned verdict shaped like the real analysis responses
//! (summary, captions, detected objects) and simulates network latency.

use crate::domain::{Domain, DomainError, ImageRef};
use crate::ports::AnalysisPort;
use serde_json::{json, Map, Value};
use std::time::Duration;
use tracing::info;

/// Mock analysis gateway.
pub struct MockAnalysisGateway {
    /// Simulated network delay in milliseconds.
    delay_ms: u64,
}

impl MockAnalysisGateway {
    /// Create a new mock gateway with default delay (350ms).
    pub fn new() -> Self {
        Self { delay_ms: 350 }
    }

    /// Create a mock gateway with custom delay.
    pub fn with_delay(delay_ms: u64) -> Self {
        Self { delay_ms }
    }
}

impl Default for MockAnalysisGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl AnalysisPort for MockAnalysisGateway {
    async fn upload(
        &self,
        domain: &Domain,
        image: &ImageRef,
    ) -> Result<Map<String, Value>, DomainError> {
        info!(
            domain = %domain.id,
            file = %image.file_name(),
            "[MOCK] simulating image analysis"
        );

        tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;

        let payload = json!({
            "summary": format!(
                "[MOCK] Simulated {} verdict for {}. A live endpoint would describe \
                 the scene here.",
                domain.name,
                image.file_name()
            ),
            "captions": [
                "Mock caption: foreground subject",
                "Mock caption: background context"
            ],
            "objects": [
                {"label": "subject", "confidence": 0.92},
                {"label": "background", "confidence": 0.71}
            ]
        });

        match payload {
            Value::Object(map) => Ok(map),
            _ => unreachable!("mock payload is always an object"),
        }
    }
}
