//! The remote service's stack status vocabulary.

use crate::types::StackName;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Status values after which the service retains a record of a stack whose
/// resources are fully torn down. Such a stack is logically absent.
const TERMINAL_GONE: [&str; 2] = ["DELETE_COMPLETE", "ROLLBACK_COMPLETE"];

/// A status string drawn from the remote service's vocabulary.
///
/// The vocabulary is owned by the service; locally only the terminal "gone"
/// values carry meaning, so this stays an open string rather than a closed
/// enum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StackStatus(String);

impl StackStatus {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the stack this status describes is logically absent even
    /// though the service still lists a record of it.
    pub fn is_gone(&self) -> bool {
        TERMINAL_GONE.contains(&self.0.as_str())
    }
}

impl fmt::Display for StackStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StackStatus {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// One entry of the remote service's stack listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackSummary {
    pub name: StackName,
    pub status: StackStatus,
}

impl StackSummary {
    pub fn new(name: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            name: StackName::new(name),
            status: StackStatus::new(status),
        }
    }
}
