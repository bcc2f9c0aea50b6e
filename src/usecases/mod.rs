//! Application use cases. Orchestrate domain logic via ports.

pub mod upload_service;

pub use upload_service::UploadService;
