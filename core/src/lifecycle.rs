//! Request lifecycle state machine
//!
//! Drives one question/answer round trip at a time: submission, in-flight
//! query, success or failure. The controller never blocks the caller:
//! `submit` returns immediately and the gateway outcome arrives later through
//! [`LifecycleController::complete`]. Stale outcomes (after a `reset` or a
//! superseding submission) are dropped by request-id comparison; that
//! comparison is the only concurrency mechanism besides the state lock.

use crate::gateway::{AgentGateway, GatewayError};
use crate::ids::SessionId;
use crate::{debug_log, info_log};
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::sync::mpsc;
use uuid::Uuid;

/// Opaque token tying a gateway outcome to the submission that caused it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(Uuid);

impl RequestId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "req:{}", self.0)
    }
}

/// Current position in the question/answer round trip.
///
/// Exactly one variant is active at any time; `state()` hands out cloned
/// snapshots so readers never observe a transition half-applied.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestState {
    /// Ready for a new question
    Idle,
    /// A question is in flight
    Pending {
        question: String,
        request_id: RequestId,
    },
    /// The gateway answered
    Succeeded { answer: String },
    /// The gateway failed; `message` is the user-facing diagnostic
    Failed { message: String },
}

impl RequestState {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending { .. })
    }
}

/// What `submit` did with the question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Dispatched to the gateway under this request id
    Dispatched(RequestId),
    /// Question was empty after trimming; nothing sent
    EmptyQuestion,
    /// A request is already in flight; nothing sent
    AlreadyPending,
}

struct ControllerInner {
    state: Mutex<RequestState>,
    transitions: mpsc::UnboundedSender<RequestState>,
    gateway: Arc<dyn AgentGateway>,
    session: SessionId,
}

/// Manages exactly one in-flight question at a time.
///
/// Cheap to clone; clones share the same state machine. Must live inside a
/// tokio runtime because `submit` spawns the gateway call.
#[derive(Clone)]
pub struct LifecycleController {
    inner: Arc<ControllerInner>,
}

impl LifecycleController {
    /// Create a controller plus the channel every state transition is
    /// published on. The receiver sees cloned snapshots in transition order.
    pub fn new(
        gateway: Arc<dyn AgentGateway>,
        session: SessionId,
    ) -> (Self, mpsc::UnboundedReceiver<RequestState>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let controller = Self {
            inner: Arc::new(ControllerInner {
                state: Mutex::new(RequestState::Idle),
                transitions: tx,
                gateway,
                session,
            }),
        };
        (controller, rx)
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> RequestState {
        self.inner.state.lock().clone()
    }

    /// Validate and dispatch a question.
    ///
    /// Whitespace-only questions and re-entrant submissions are no-ops. A
    /// previous answer or failure is cleared by entering `Pending` directly.
    pub fn submit(&self, question: &str) -> SubmitOutcome {
        let question = question.trim();
        if question.is_empty() {
            return SubmitOutcome::EmptyQuestion;
        }

        let (request_id, snapshot) = {
            let mut state = self.inner.state.lock();
            if state.is_pending() {
                debug_log!("submit ignored: a request is already pending");
                return SubmitOutcome::AlreadyPending;
            }
            let request_id = RequestId::generate();
            *state = RequestState::Pending {
                question: question.to_string(),
                request_id,
            };
            (request_id, state.clone())
        };
        self.publish(snapshot);

        info_log!("dispatching {} for {}", request_id, self.inner.session);
        let this = self.clone();
        let question = question.to_string();
        tokio::spawn(async move {
            let outcome = this.inner.gateway.ask(&this.inner.session, &question).await;
            this.complete(request_id, outcome);
        });

        SubmitOutcome::Dispatched(request_id)
    }

    /// Deliver a gateway outcome.
    ///
    /// Only the outcome matching the currently pending request may mutate
    /// state; everything else is a stale response and is dropped silently.
    /// This is the controller's race-safety invariant, public so it can be
    /// exercised directly.
    pub fn complete(&self, request_id: RequestId, outcome: Result<String, GatewayError>) {
        let snapshot = {
            let mut state = self.inner.state.lock();
            match &*state {
                RequestState::Pending { request_id: live, .. } if *live == request_id => {
                    *state = match outcome {
                        Ok(answer) => RequestState::Succeeded { answer },
                        Err(err) => {
                            debug_log!("{} failed: {}", request_id, err);
                            RequestState::Failed {
                                message: err.diagnostic(),
                            }
                        }
                    };
                    state.clone()
                }
                _ => {
                    debug_log!("discarding stale outcome for {}", request_id);
                    return;
                }
            }
        };
        self.publish(snapshot);
    }

    /// Return to `Idle`, invalidating any outstanding request id.
    pub fn reset(&self) {
        let snapshot = {
            let mut state = self.inner.state.lock();
            *state = RequestState::Idle;
            state.clone()
        };
        self.publish(snapshot);
    }

    fn publish(&self, snapshot: RequestState) {
        // The receiver side may be gone (one-shot mode after the answer);
        // transitions are still valid then, just unobserved.
        let _ = self.inner.transitions.send(snapshot);
    }
}
