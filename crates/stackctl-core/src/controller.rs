//! Existence-gated create/update/destroy/list against the remote service.
//!
//! Every operation is synchronous and stateless: the remote listing is the
//! single source of truth, queried fresh before each mutation. Two callers
//! racing on the same identity can both observe "does not exist" and both
//! attempt a create; the remote service arbitrates that conflict, not this
//! controller. Callers needing safe concurrent access must serialize per
//! canonical name themselves.

use crate::CoreError;
use stackctl_remote::StackService;
use stackctl_schema::{NameError, OperationId, StackIdentity, StackSummary, Template};

/// What `create` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    /// The stack was submitted; the service returned this operation handle.
    Created(OperationId),
    /// A live stack with this name already exists; nothing was issued.
    AlreadyExists,
}

/// What `destroy` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DestroyOutcome {
    /// A delete request was issued and acknowledged.
    Deleted,
    /// No live stack with this name; nothing was issued.
    AlreadyAbsent,
}

/// Single point of interaction with the remote orchestration service.
///
/// The service client is constructor-injected; the controller holds no other
/// state.
pub struct StackController<S> {
    service: S,
}

impl<S: StackService> StackController<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    /// Whether a live stack with this identity's canonical name is deployed.
    ///
    /// A linear scan of the full account listing on every call; entries in
    /// terminal "gone" statuses do not count. Acceptable at the scale of a
    /// handful of deployments.
    pub fn exists(&self, identity: &StackIdentity) -> Result<bool, CoreError> {
        let name = identity.stack_name();
        let found = self
            .service
            .list_stacks()?
            .iter()
            .any(|stack| !stack.status.is_gone() && stack.name == name);
        tracing::debug!("exists({name}) = {found}");
        Ok(found)
    }

    /// Create this stack, unless it already exists.
    ///
    /// Create is idempotent-safe by skipping: an existing stack is a no-op
    /// outcome, not an error.
    pub fn create(
        &self,
        identity: &StackIdentity,
        template: &Template,
    ) -> Result<CreateOutcome, CoreError> {
        if self.exists(identity)? {
            tracing::debug!("create: {} already exists, skipping", identity.stack_name());
            return Ok(CreateOutcome::AlreadyExists);
        }
        let handle = self.service.create_stack(
            &identity.stack_name(),
            &template.to_wire()?,
            &identity.tags(),
        )?;
        Ok(CreateOutcome::Created(handle))
    }

    /// Update this stack; it must already exist.
    ///
    /// An update with no target is a user error, so unlike `create` and
    /// `destroy` the mismatched precondition is not silently skipped.
    pub fn update(
        &self,
        identity: &StackIdentity,
        template: &Template,
    ) -> Result<OperationId, CoreError> {
        if !self.exists(identity)? {
            return Err(CoreError::StackNotFound(identity.stack_name()));
        }
        let handle = self.service.update_stack(
            &identity.stack_name(),
            &template.to_wire()?,
            &identity.tags(),
        )?;
        Ok(handle)
    }

    /// Tear down this stack, if it exists.
    pub fn destroy(&self, identity: &StackIdentity) -> Result<DestroyOutcome, CoreError> {
        if !self.exists(identity)? {
            tracing::debug!("destroy: {} already absent, skipping", identity.stack_name());
            return Ok(DestroyOutcome::AlreadyAbsent);
        }
        self.service.delete_stack(&identity.stack_name())?;
        Ok(DestroyOutcome::Deleted)
    }

    /// Enumerate every live stack as a `StackIdentity`.
    ///
    /// One remote listing call backs the returned sequence; restarting it
    /// requires a fresh call. Order is whatever the service returned.
    /// Entries whose names do not follow the `product-envname` convention
    /// yield an error rather than being skipped.
    pub fn list_all(&self) -> Result<StackList, CoreError> {
        let stacks = self.service.list_stacks()?;
        tracing::debug!("listed {} stack records", stacks.len());
        Ok(StackList {
            entries: stacks.into_iter(),
        })
    }
}

/// Finite, non-restartable sequence of live stack identities.
pub struct StackList {
    entries: std::vec::IntoIter<StackSummary>,
}

impl Iterator for StackList {
    type Item = Result<StackIdentity, NameError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = self.entries.next()?;
            if entry.status.is_gone() {
                continue;
            }
            return Some(StackIdentity::parse(&entry.name));
        }
    }
}
