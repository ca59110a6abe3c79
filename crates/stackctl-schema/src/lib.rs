//! Stack naming convention, status vocabulary, and template documents for stackctl.
//!
//! This crate defines the schema layer: the `product-envname` naming convention
//! (`StackIdentity`), the remote service's stack listing entry (`StackSummary`)
//! with its terminal "gone" statuses, and the opaque template document
//! (`Template`) with its single wire serialization.

pub mod identity;
pub mod status;
pub mod template;
pub mod types;

pub use identity::{NameError, StackIdentity, SEPARATOR};
pub use status::{StackStatus, StackSummary};
pub use template::{Template, TemplateError};
pub use types::{OperationId, StackName};
