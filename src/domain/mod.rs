//! Core domain layer. No external I/O dependencies.
//!
//! Entities and business rules live here. Dependencies flow inward.

pub mod entities;
pub mod errors;
pub mod state;

pub use entities::{Domain, ImageRef, UploadState};
pub use errors::DomainError;
pub use state::{AppState, AppStore};
