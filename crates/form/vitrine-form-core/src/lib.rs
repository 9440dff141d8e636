//! Contact form submission for the Vitrine portfolio page.
//!
//! [`ContactForm`] owns the field values and status and never performs I/O
//! itself: a [`SubmissionTransport`] decides how a validated submission is
//! delivered, and the host drives time with [`ContactForm::advance`].

pub mod config;
pub mod error;
pub mod machine;
pub mod status;
pub mod timers;
pub mod transport;
pub mod values;

pub use config::FormConfig;
pub use error::FormError;
pub use machine::ContactForm;
pub use status::{ButtonTone, FormStatus};
pub use timers::{TimerId, TimerQueue};
pub use transport::{
    Dispatch, DispatchOutcome, SimulatedTransport, SubmissionTransport, SubmitTicket,
};
pub use values::{Field, FormValues};
