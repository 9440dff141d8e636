//! Submission transports: how a validated form leaves the state machine.

use serde::{Deserialize, Serialize};

use crate::values::FormValues;

/// Identifies one accepted submission. Completions carrying an older ticket
/// are ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmitTicket(pub u32);

impl SubmitTicket {
    pub fn id(self) -> u32 {
        self.0
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "lowercase")]
pub enum DispatchOutcome {
    Delivered,
    Failed { reason: String },
}

impl DispatchOutcome {
    pub fn failed(reason: impl Into<String>) -> Self {
        DispatchOutcome::Failed {
            reason: reason.into(),
        }
    }

    pub fn is_delivered(&self) -> bool {
        matches!(self, DispatchOutcome::Delivered)
    }
}

/// What a transport did with a submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// The outcome is known now and lands after `delay_ms` of form time.
    Deferred {
        delay_ms: u32,
        outcome: DispatchOutcome,
    },
    /// The outcome arrives later through `ContactForm::complete`.
    Pending,
}

pub trait SubmissionTransport {
    fn dispatch(&mut self, values: &FormValues, ticket: SubmitTicket) -> Dispatch;
}

impl<F> SubmissionTransport for F
where
    F: FnMut(&FormValues, SubmitTicket) -> Dispatch,
{
    fn dispatch(&mut self, values: &FormValues, ticket: SubmitTicket) -> Dispatch {
        self(values, ticket)
    }
}

/// Fixed-delay stand-in for a real endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulatedTransport {
    pub delay_ms: u32,
    pub outcome: DispatchOutcome,
    sent: Vec<FormValues>,
}

impl Default for SimulatedTransport {
    fn default() -> Self {
        Self::new(1500)
    }
}

impl SimulatedTransport {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            outcome: DispatchOutcome::Delivered,
            sent: Vec::new(),
        }
    }

    pub fn failing(delay_ms: u32, reason: impl Into<String>) -> Self {
        Self {
            outcome: DispatchOutcome::failed(reason),
            ..Self::new(delay_ms)
        }
    }

    /// Every payload handed to this transport, oldest first.
    pub fn sent(&self) -> &[FormValues] {
        &self.sent
    }
}

impl SubmissionTransport for SimulatedTransport {
    fn dispatch(&mut self, values: &FormValues, ticket: SubmitTicket) -> Dispatch {
        log::debug!("simulated dispatch #{} in {}ms", ticket.id(), self.delay_ms);
        self.sent.push(values.clone());
        Dispatch::Deferred {
            delay_ms: self.delay_ms,
            outcome: self.outcome.clone(),
        }
    }
}
