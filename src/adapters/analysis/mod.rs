//! Analysis gateway adapters. Implement AnalysisPort.
//!
//! Provides the reqwest multipart gateway and a mock for offline use.

pub mod http_gateway;
pub mod mock_gateway;

pub use http_gateway::HttpAnalysisGateway;
pub use mock_gateway::MockAnalysisGateway;
