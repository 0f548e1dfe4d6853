use super::{RequestState, WorkflowError, WorkflowResult};
use std::{
    future::Future,
    sync::{Mutex, MutexGuard, PoisonError},
};
use tracing::debug;

/// Request state owned by one form instance.
///
/// A submission made while another one from the same instance is still in
/// flight is answered with `WorkflowResult::Pending` and never runs. There is
/// no timeout: a flow that never settles keeps the instance pending. A
/// submission whose future is dropped before settling returns the instance
/// to `Idle`.
#[derive(Debug, Default)]
pub struct FormSubmission {
    state: Mutex<RequestState>,
}

impl FormSubmission {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> RequestState {
        self.lock().clone()
    }

    pub fn reset(&self) {
        *self.lock() = RequestState::Idle;
    }

    /// Run `flow` unless a previous submission is still pending.
    pub async fn submit<F>(&self, flow: F) -> (WorkflowResult, Option<WorkflowError>)
    where
        F: Future<Output = Result<&'static str, WorkflowError>>,
    {
        let Some(in_flight) = self.begin() else {
            debug!("submission ignored, another one is in flight");

            return (WorkflowResult::Pending, None);
        };

        let outcome = flow.await;
        let result = WorkflowResult::from_outcome(&outcome);

        in_flight.settle(RequestState::from(&result));

        (result, outcome.err())
    }

    fn begin(&self) -> Option<InFlight<'_>> {
        let mut state = self.lock();

        if state.is_pending() {
            return None;
        }

        *state = RequestState::Pending;

        Some(InFlight {
            submission: self,
            settled: false,
        })
    }

    // a panic while the lock was held leaves the last written state, which is still valid
    fn lock(&self) -> MutexGuard<'_, RequestState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Marks a submission as pending until it settles or is dropped.
struct InFlight<'a> {
    submission: &'a FormSubmission,
    settled: bool,
}

impl InFlight<'_> {
    fn settle(mut self, next: RequestState) {
        *self.submission.lock() = next;
        self.settled = true;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.settled {
            debug!("submission dropped before settling");

            *self.submission.lock() = RequestState::Idle;
        }
    }
}
