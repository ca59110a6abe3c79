//! The `product-envname` naming convention.
//!
//! A stack is addressed remotely by a single flat name. The pair is recovered
//! by splitting on the **last** separator, because the product segment may
//! itself contain separators while the environment segment never does. That
//! constraint is enforced here, at construction, so every identity in the
//! system round-trips through its canonical name.

use crate::types::StackName;
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// Separator between the product and environment segments of a stack name.
pub const SEPARATOR: char = '-';

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NameError {
    #[error("stack name '{0}' has no '{SEPARATOR}' separating product from envname")]
    MissingSeparator(String),
    #[error("envname '{0}' must not contain '{SEPARATOR}'")]
    SeparatorInEnvName(String),
    #[error("product must not be empty")]
    EmptyProduct,
    #[error("envname must not be empty")]
    EmptyEnvName,
}

/// A (product, environment) pair identifying one deployment stack.
///
/// Stateless and constructed fresh for every operation; the remote service is
/// the single source of truth for whether the stack it names exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StackIdentity {
    product: String,
    envname: String,
}

impl StackIdentity {
    /// Build an identity from its two segments.
    ///
    /// The envname must not contain the separator; the product may.
    pub fn construct(product: &str, envname: &str) -> Result<Self, NameError> {
        if product.is_empty() {
            return Err(NameError::EmptyProduct);
        }
        if envname.is_empty() {
            return Err(NameError::EmptyEnvName);
        }
        if envname.contains(SEPARATOR) {
            return Err(NameError::SeparatorInEnvName(envname.to_owned()));
        }
        Ok(Self {
            product: product.to_owned(),
            envname: envname.to_owned(),
        })
    }

    /// Recover an identity from a canonical stack name.
    ///
    /// Splits on the last separator: `"foo-bar-prod"` parses as product
    /// `"foo-bar"`, envname `"prod"`.
    pub fn parse(raw: &str) -> Result<Self, NameError> {
        let (product, envname) = raw
            .rsplit_once(SEPARATOR)
            .ok_or_else(|| NameError::MissingSeparator(raw.to_owned()))?;
        Self::construct(product, envname)
    }

    pub fn product(&self) -> &str {
        &self.product
    }

    pub fn envname(&self) -> &str {
        &self.envname
    }

    /// The canonical name, `product-envname`.
    pub fn stack_name(&self) -> StackName {
        StackName::new(format!("{}{SEPARATOR}{}", self.product, self.envname))
    }

    /// Ownership metadata attached to every create and update call.
    pub fn tags(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            ("product".to_owned(), self.product.clone()),
            ("environment".to_owned(), self.envname.clone()),
        ])
    }
}
