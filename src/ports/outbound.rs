//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{Domain, DomainError, ImageRef};
use serde_json::{Map, Value};

/// Analysis endpoint gateway.
#[async_trait::async_trait]
pub trait AnalysisPort: Send + Sync {
    /// Upload `image` to `domain.endpoint` and return the parsed JSON body.
    ///
    /// Exactly one request is issued; there are no retries. A non-success
    /// status maps to `DomainError::Upload` carrying the response body text,
    /// an unparsable success body to `DomainError::Parse`.
    async fn upload(
        &self,
        domain: &Domain,
        image: &ImageRef,
    ) -> Result<Map<String, Value>, DomainError>;
}

/// Media selection. The picker is an external collaborator; `Ok(None)` is a
/// cancellation, not an error.
#[async_trait::async_trait]
pub trait MediaPickerPort: Send + Sync {
    async fn pick_image(&self) -> Result<Option<ImageRef>, DomainError>;
}
