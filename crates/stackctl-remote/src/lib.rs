//! Client for the remote stack orchestration service.
//!
//! This crate provides the `StackService` trait consumed by the lifecycle
//! controller, an HTTP implementation of it, an in-memory mock for tests,
//! and endpoint configuration with optional authentication.

pub mod config;
pub mod http;
pub mod mock;

pub use config::ServiceConfig;
pub use http::HttpService;
pub use mock::MockService;

use stackctl_schema::{OperationId, StackName, StackSummary};
use std::collections::BTreeMap;
use thiserror::Error;

/// Protocol version sent as `X-Stackctl-Protocol` header on all HTTP requests.
/// Servers can reject clients with incompatible protocol versions.
pub const PROTOCOL_VERSION: u32 = 1;

/// Any failure originating from a remote service call. Not classified
/// further; callers decide whether to retry.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("remote I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("HTTP error: {0}")]
    Http(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("malformed response: {0}")]
    Serialization(String),
    #[error("remote config error: {0}")]
    Config(String),
}

/// The remote orchestration service's stack primitives.
///
/// One implementation talks HTTP; the mock keeps stacks in memory. All calls
/// are blocking; retry, backoff, and timeouts belong to the caller or the
/// transport, not here.
pub trait StackService {
    /// List every stack record in the account, live or gone.
    fn list_stacks(&self) -> Result<Vec<StackSummary>, RemoteError>;

    /// Submit a new stack. Returns the service's operation handle.
    fn create_stack(
        &self,
        name: &StackName,
        template_body: &str,
        tags: &BTreeMap<String, String>,
    ) -> Result<OperationId, RemoteError>;

    /// Submit a revised template for an existing stack.
    fn update_stack(
        &self,
        name: &StackName,
        template_body: &str,
        tags: &BTreeMap<String, String>,
    ) -> Result<OperationId, RemoteError>;

    /// Request deletion of a stack.
    fn delete_stack(&self, name: &StackName) -> Result<(), RemoteError>;
}
