//! Inbound port. UI (adapter) calls into the application.

use crate::domain::DomainError;

/// Input port: UI/CLI drives the application flow.
#[async_trait::async_trait]
pub trait InputPort: Send + Sync {
    /// Run the interactive flow (home -> domain/upload -> result) until the
    /// user quits.
    async fn run(&self) -> Result<(), DomainError>;
}
