//! In-memory stack service for tests.

use crate::{RemoteError, StackService};
use stackctl_schema::{OperationId, StackName, StackSummary};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// A recorded mutation call, for asserting on what the service received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedMutation {
    pub name: StackName,
    pub template_body: String,
    pub tags: BTreeMap<String, String>,
}

/// `StackService` backed by an in-memory listing, with per-method call
/// counters so tests can assert which remote calls an operation issued.
#[derive(Default)]
pub struct MockService {
    stacks: Mutex<Vec<StackSummary>>,
    list_calls: AtomicUsize,
    create_calls: AtomicUsize,
    update_calls: AtomicUsize,
    delete_calls: AtomicUsize,
    mutations: Mutex<Vec<RecordedMutation>>,
    fail_next: Mutex<Option<String>>,
}

impl MockService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the remote listing with `(name, status)` pairs.
    #[must_use]
    pub fn with_stacks<I, N, S>(stacks: I) -> Self
    where
        I: IntoIterator<Item = (N, S)>,
        N: Into<String>,
        S: Into<String>,
    {
        let service = Self::new();
        *service.stacks.lock().unwrap() = stacks
            .into_iter()
            .map(|(name, status)| StackSummary::new(name, status))
            .collect();
        service
    }

    /// Make every subsequent call fail with an HTTP error.
    pub fn fail_with(&self, message: &str) {
        *self.fail_next.lock().unwrap() = Some(message.to_owned());
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn update_calls(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }

    pub fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }

    /// Total create + update + delete calls received.
    pub fn mutation_calls(&self) -> usize {
        self.create_calls() + self.update_calls() + self.delete_calls()
    }

    pub fn mutations(&self) -> Vec<RecordedMutation> {
        self.mutations.lock().unwrap().clone()
    }

    fn check_failure(&self) -> Result<(), RemoteError> {
        match self.fail_next.lock().unwrap().as_ref() {
            Some(msg) => Err(RemoteError::Http(msg.clone())),
            None => Ok(()),
        }
    }
}

impl StackService for MockService {
    fn list_stacks(&self) -> Result<Vec<StackSummary>, RemoteError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;
        Ok(self.stacks.lock().unwrap().clone())
    }

    fn create_stack(
        &self,
        name: &StackName,
        template_body: &str,
        tags: &BTreeMap<String, String>,
    ) -> Result<OperationId, RemoteError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;
        self.mutations.lock().unwrap().push(RecordedMutation {
            name: name.clone(),
            template_body: template_body.to_owned(),
            tags: tags.clone(),
        });
        self.stacks
            .lock()
            .unwrap()
            .push(StackSummary::new(name.as_str(), "CREATE_IN_PROGRESS"));
        Ok(OperationId::new(format!("create-{name}")))
    }

    fn update_stack(
        &self,
        name: &StackName,
        template_body: &str,
        tags: &BTreeMap<String, String>,
    ) -> Result<OperationId, RemoteError> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;
        self.mutations.lock().unwrap().push(RecordedMutation {
            name: name.clone(),
            template_body: template_body.to_owned(),
            tags: tags.clone(),
        });
        Ok(OperationId::new(format!("update-{name}")))
    }

    fn delete_stack(&self, name: &StackName) -> Result<(), RemoteError> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;
        let mut stacks = self.stacks.lock().unwrap();
        for stack in stacks.iter_mut() {
            if stack.name == *name {
                stack.status = "DELETE_COMPLETE".into();
            }
        }
        Ok(())
    }
}
