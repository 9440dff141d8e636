//! The contact form state machine.
//!
//! `Idle → Sending → Success → Idle`, with `Sending → Error` on a failed
//! dispatch. All waiting is form time advanced by the host through
//! [`ContactForm::advance`].

use crate::config::FormConfig;
use crate::error::FormError;
use crate::status::{ButtonTone, FormStatus};
use crate::timers::{TimerId, TimerQueue};
use crate::transport::{Dispatch, DispatchOutcome, SubmissionTransport, SubmitTicket};
use crate::values::{Field, FormValues};

#[derive(Debug)]
enum FormTimer {
    Complete {
        ticket: SubmitTicket,
        outcome: DispatchOutcome,
    },
    ResetToIdle,
}

#[derive(Debug)]
pub struct ContactForm {
    cfg: FormConfig,
    values: FormValues,
    status: FormStatus,
    timers: TimerQueue<FormTimer>,
    next_ticket: u32,
    in_flight: Option<SubmitTicket>,
    reset_timer: Option<TimerId>,
    last_error: Option<String>,
    deliveries: u32,
    alive: bool,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new(FormConfig::default())
    }
}

impl ContactForm {
    pub fn new(cfg: FormConfig) -> Self {
        Self {
            cfg,
            values: FormValues::default(),
            status: FormStatus::Idle,
            timers: TimerQueue::new(),
            next_ticket: 0,
            in_flight: None,
            reset_timer: None,
            last_error: None,
            deliveries: 0,
            alive: true,
        }
    }

    pub fn config(&self) -> &FormConfig {
        &self.cfg
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn label(&self) -> &'static str {
        self.status.label()
    }

    pub fn tone(&self) -> ButtonTone {
        self.status.tone()
    }

    pub fn submit_disabled(&self) -> bool {
        self.status.submit_disabled()
    }

    /// Reason reported by the last failed dispatch, cleared on the next
    /// accepted submit.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Number of successful completions since mount.
    pub fn deliveries(&self) -> u32 {
        self.deliveries
    }

    pub fn in_flight(&self) -> Option<SubmitTicket> {
        self.in_flight
    }

    pub fn is_torn_down(&self) -> bool {
        !self.alive
    }

    pub fn has_pending_timers(&self) -> bool {
        !self.timers.is_empty()
    }

    /// A success message is showing and will clear on its own.
    pub fn reset_pending(&self) -> bool {
        self.reset_timer.is_some_and(|id| self.timers.is_scheduled(id))
    }

    /// Update one field. Editing after a failure returns the form to `Idle`;
    /// editing during `Success` keeps the pending reset.
    pub fn edit(&mut self, field: Field, value: impl Into<String>) -> Result<(), FormError> {
        if !self.alive {
            return Err(FormError::TornDown);
        }
        self.values.set(field, value);
        if self.status == FormStatus::Error {
            self.status = FormStatus::Idle;
        }
        Ok(())
    }

    /// Validate and hand the current values to `transport`.
    pub fn submit(
        &mut self,
        transport: &mut dyn SubmissionTransport,
    ) -> Result<SubmitTicket, FormError> {
        if !self.alive {
            return Err(FormError::TornDown);
        }
        if self.status == FormStatus::Sending {
            return Err(FormError::AlreadySending);
        }
        if let Some(field) = self.values.first_missing(self.cfg.trim_required) {
            log::debug!("submit rejected: '{field}' is empty");
            return Err(FormError::MissingField(field));
        }

        if let Some(id) = self.reset_timer.take() {
            self.timers.cancel(id);
        }
        let ticket = SubmitTicket(self.next_ticket);
        self.next_ticket = self.next_ticket.wrapping_add(1);
        self.in_flight = Some(ticket);
        self.last_error = None;
        self.status = FormStatus::Sending;

        match transport.dispatch(&self.values, ticket) {
            Dispatch::Deferred { delay_ms, outcome } => {
                self.timers
                    .schedule(delay_ms, FormTimer::Complete { ticket, outcome });
            }
            Dispatch::Pending => {}
        }
        log::debug!("submission #{} sending", ticket.id());
        Ok(ticket)
    }

    /// Report the outcome of a pending dispatch. Returns false when the
    /// ticket is stale or the form is gone.
    pub fn complete(&mut self, ticket: SubmitTicket, outcome: DispatchOutcome) -> bool {
        if !self.alive {
            log::warn!("completion #{} ignored: form torn down", ticket.id());
            return false;
        }
        if self.status != FormStatus::Sending || self.in_flight != Some(ticket) {
            log::warn!("completion #{} ignored: stale ticket", ticket.id());
            return false;
        }
        self.in_flight = None;
        match outcome {
            DispatchOutcome::Delivered => {
                self.values.clear();
                self.status = FormStatus::Success;
                self.deliveries += 1;
                self.reset_timer = Some(
                    self.timers
                        .schedule(self.cfg.success_reset_ms, FormTimer::ResetToIdle),
                );
            }
            DispatchOutcome::Failed { reason } => {
                log::warn!("submission #{} failed: {reason}", ticket.id());
                self.status = FormStatus::Error;
                self.last_error = Some(reason);
            }
        }
        true
    }

    /// Advance form time by `dt_ms`, firing due timers in order. Returns each
    /// status entered along the way.
    pub fn advance(&mut self, dt_ms: u32) -> Vec<FormStatus> {
        let mut entered = Vec::new();
        if !self.alive {
            return entered;
        }
        let until = self.timers.now() + u64::from(dt_ms);
        while let Some((id, timer)) = self.timers.pop_due(until) {
            let before = self.status;
            match timer {
                FormTimer::Complete { ticket, outcome } => {
                    self.complete(ticket, outcome);
                }
                FormTimer::ResetToIdle => {
                    if self.reset_timer == Some(id) {
                        self.reset_timer = None;
                        self.status = FormStatus::Idle;
                    }
                }
            }
            if self.status != before {
                entered.push(self.status);
            }
        }
        self.timers.settle(until);
        entered
    }

    /// Cancel every timer and ignore all later calls.
    pub fn teardown(&mut self) {
        if !self.alive {
            return;
        }
        self.alive = false;
        self.timers.cancel_all();
        self.reset_timer = None;
        self.in_flight = None;
        log::debug!("contact form torn down");
    }
}
