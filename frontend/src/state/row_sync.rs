use thiserror::Error;

use crate::api::{RequestAction, RequestStatus};

/// A state transition that can be shown before the backend confirms it.
pub trait OptimisticAction<S> {
    /// Whether the transition may start from `current`.
    fn permits(&self, current: &S) -> bool;
    /// Value shown once the backend has accepted the transition.
    fn outcome(&self) -> S;
}

impl OptimisticAction<RequestStatus> for RequestAction {
    fn permits(&self, current: &RequestStatus) -> bool {
        !current.is_terminal()
    }

    fn outcome(&self) -> RequestStatus {
        RequestAction::outcome(*self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MirrorRejection {
    #[error("no transition is defined from the current value")]
    NotActionable,
    #[error("another action is still in flight")]
    Busy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase<S, A> {
    /// Mirror equals the last upstream delivery.
    Synced,
    /// Mutation in flight; the mirror still shows upstream.
    Pending(A),
    /// Mutation accepted; `optimistic` is shown until a refetch with
    /// revision `>= ticket` delivers the authoritative value.
    Reconciling { optimistic: S, ticket: u32 },
}

/// Local mirror of one remote value with an optimistic overlay.
///
/// `reconcile` is fed every upstream delivery together with the revision of
/// the refetch that produced it. Deliveries older than the ticket recorded by
/// `confirm` cannot override the optimistic value, so a slow earlier refetch
/// never flashes the row back to its pre-action state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimisticMirror<S, A> {
    upstream: S,
    phase: Phase<S, A>,
}

impl<S, A> OptimisticMirror<S, A>
where
    S: Clone,
    A: OptimisticAction<S> + Clone,
{
    pub fn new(upstream: S) -> Self {
        Self {
            upstream,
            phase: Phase::Synced,
        }
    }

    pub fn mirror(&self) -> S {
        match &self.phase {
            Phase::Reconciling { optimistic, .. } => optimistic.clone(),
            Phase::Synced | Phase::Pending(_) => self.upstream.clone(),
        }
    }

    pub fn upstream(&self) -> &S {
        &self.upstream
    }

    pub fn phase(&self) -> &Phase<S, A> {
        &self.phase
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self.phase, Phase::Pending(_))
    }

    pub fn can_begin(&self, action: &A) -> bool {
        !self.is_in_flight() && action.permits(&self.mirror())
    }

    pub fn begin(&mut self, action: A) -> Result<(), MirrorRejection> {
        if self.is_in_flight() {
            return Err(MirrorRejection::Busy);
        }
        if !action.permits(&self.mirror()) {
            return Err(MirrorRejection::NotActionable);
        }
        self.phase = Phase::Pending(action);
        Ok(())
    }

    /// Applies the in-flight action's outcome; `ticket` is the revision of the
    /// refetch about to be issued.
    pub fn confirm(&mut self, ticket: u32) {
        if let Phase::Pending(action) = &self.phase {
            self.phase = Phase::Reconciling {
                optimistic: action.outcome(),
                ticket,
            };
        }
    }

    /// Drops the in-flight action; the mirror keeps showing upstream.
    pub fn fail(&mut self) {
        if matches!(self.phase, Phase::Pending(_)) {
            self.phase = Phase::Synced;
        }
    }

    pub fn reconcile(&mut self, upstream: S, revision: u32) {
        self.upstream = upstream;
        match &self.phase {
            Phase::Reconciling { ticket, .. } if revision < *ticket => {}
            Phase::Reconciling { .. } => self.phase = Phase::Synced,
            Phase::Synced | Phase::Pending(_) => {}
        }
    }
}

pub type StatusMirror = OptimisticMirror<RequestStatus, RequestAction>;
