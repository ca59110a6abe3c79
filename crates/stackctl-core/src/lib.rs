//! Lifecycle controller for deployment stacks.
//!
//! This crate ties the naming convention and the remote service client into
//! the `StackController` — the single point of interaction with the
//! orchestration service, gating every mutation on a freshly-queried
//! existence check so invalid operations (update-on-missing, duplicate
//! create) are never issued.

pub mod controller;

pub use controller::{CreateOutcome, DestroyOutcome, StackController, StackList};

use stackctl_schema::StackName;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid stack name: {0}")]
    Name(#[from] stackctl_schema::NameError),
    #[error("stack does not exist: {0}")]
    StackNotFound(StackName),
    #[error("template error: {0}")]
    Template(#[from] stackctl_schema::TemplateError),
    #[error("remote service error: {0}")]
    Remote(#[from] stackctl_remote::RemoteError),
}
