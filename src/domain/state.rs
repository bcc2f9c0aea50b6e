//! Application state aggregate and its store.
//!
//! One logical writer at a time (the active prompt flow), so every action is
//! an unconditional setter behind an async RwLock. The store is constructed
//! once in `main` and injected as `Arc<AppStore>`; there is no global.

use super::entities::{Domain, ImageRef, UploadState};
use serde_json::{Map, Value};
use tokio::sync::RwLock;

/// Everything the screens read. Cloned out as a snapshot.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub domains: Vec<Domain>,
    pub selected_domain: Option<Domain>,
    pub credits: u32,
    pub upload_state: UploadState,
    pub selected_image: Option<ImageRef>,
    pub last_response: Option<Map<String, Value>>,
    pub error: Option<String>,
}

/// Injected state object. Screens render from `snapshot()`; mutation only
/// through the named actions below.
pub struct AppStore {
    state: RwLock<AppState>,
}

impl AppStore {
    pub fn new(domains: Vec<Domain>, credits: u32) -> Self {
        Self {
            state: RwLock::new(AppState {
                domains,
                credits,
                ..AppState::default()
            }),
        }
    }

    /// Current state, cloned.
    pub async fn snapshot(&self) -> AppState {
        self.state.read().await.clone()
    }

    /// Selects a domain and resets the rest of the flow, so results from a
    /// previous domain cannot leak into the new one.
    pub async fn select_domain(&self, domain: Domain) {
        let mut s = self.state.write().await;
        s.selected_domain = Some(domain);
        s.upload_state = UploadState::Idle;
        s.selected_image = None;
        s.last_response = None;
        s.error = None;
    }

    /// Caller keeps the counter non-negative; the store does not clamp.
    pub async fn set_credits(&self, credits: u32) {
        self.state.write().await.credits = credits;
    }

    pub async fn set_upload_state(&self, upload_state: UploadState) {
        self.state.write().await.upload_state = upload_state;
    }

    pub async fn set_selected_image(&self, image: Option<ImageRef>) {
        self.state.write().await.selected_image = image;
    }

    pub async fn set_response(&self, response: Option<Map<String, Value>>) {
        self.state.write().await.last_response = response;
    }

    pub async fn set_error(&self, error: Option<String>) {
        self.state.write().await.error = error;
    }

    /// Back to a clean flow. Domain choice and credits survive.
    pub async fn reset_flow(&self) {
        let mut s = self.state.write().await;
        s.upload_state = UploadState::Idle;
        s.selected_image = None;
        s.last_response = None;
        s.error = None;
    }
}
