//! Upload flow orchestration: pick image, validate, upload, settle state.
//!
//! Every gateway failure is caught here, normalized to a message in the
//! store's error field, and never retried. Nothing in this flow panics.

use crate::domain::{AppStore, DomainError, ImageRef, UploadState};
use crate::ports::{AnalysisPort, MediaPickerPort};
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{info, warn};

/// Upload service. Coordinates the picker, the gateway, and the store.
pub struct UploadService {
    gateway: Arc<dyn AnalysisPort>,
    picker: Arc<dyn MediaPickerPort>,
    store: Arc<AppStore>,
}

impl UploadService {
    pub fn new(
        gateway: Arc<dyn AnalysisPort>,
        picker: Arc<dyn MediaPickerPort>,
        store: Arc<AppStore>,
    ) -> Self {
        Self {
            gateway,
            picker,
            store,
        }
    }

    /// Drives image selection: idle -> selecting -> idle.
    ///
    /// A successful pick stores the reference. Cancellation (`Ok(None)`) and
    /// permission denial leave the store's error field untouched; the caller
    /// surfaces the denial as an alert.
    pub async fn pick_image(&self) -> Result<Option<ImageRef>, DomainError> {
        self.store.set_error(None).await;
        self.store.set_upload_state(UploadState::Selecting).await;
        let picked = self.picker.pick_image().await;

        match picked {
            Ok(Some(image)) => {
                info!(file = %image.file_name(), "image selected");
                // Store the reference first, then settle back to idle.
                self.store.set_selected_image(Some(image.clone())).await;
                self.store.set_upload_state(UploadState::Idle).await;
                Ok(Some(image))
            }
            Ok(None) => {
                self.store.set_upload_state(UploadState::Idle).await;
                Ok(None)
            }
            Err(e) => {
                self.store.set_upload_state(UploadState::Idle).await;
                Err(e)
            }
        }
    }

    /// Uploads the currently selected image to the currently selected domain.
    ///
    /// Refused with `Validation` before any request is issued when either is
    /// missing; the upload state is not touched in that case. On success the
    /// response is stored and one credit is consumed, floored at zero. An
    /// in-flight upload is abandoned on Ctrl-C and the machine returns to
    /// idle without an error.
    pub async fn upload_selected(&self) -> Result<Map<String, Value>, DomainError> {
        let state = self.store.snapshot().await;
        let (Some(domain), Some(image)) = (state.selected_domain, state.selected_image) else {
            return Err(DomainError::Validation(
                "Please choose a domain and select an image first.".to_string(),
            ));
        };

        self.store.set_error(None).await;
        self.store.set_upload_state(UploadState::Uploading).await;

        let result = tokio::select! {
            res = self.gateway.upload(&domain, &image) => res,
            _ = tokio::signal::ctrl_c() => {
                info!(endpoint = %domain.endpoint, "upload abandoned by user");
                self.store.set_upload_state(UploadState::Idle).await;
                return Err(DomainError::Cancelled);
            }
        };

        match result {
            Ok(payload) => {
                let credits = self.store.snapshot().await.credits.saturating_sub(1);
                self.store.set_response(Some(payload.clone())).await;
                self.store.set_credits(credits).await;
                self.store.set_error(None).await;
                self.store.set_upload_state(UploadState::Success).await;
                info!(endpoint = %domain.endpoint, credits, "upload succeeded");
                Ok(payload)
            }
            Err(e) => {
                warn!(endpoint = %domain.endpoint, error = %e, "upload failed");
                self.store.set_error(Some(e.to_string())).await;
                self.store.set_upload_state(UploadState::Error).await;
                Err(e)
            }
        }
    }
}
