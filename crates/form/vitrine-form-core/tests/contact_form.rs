use std::cell::RefCell;
use std::rc::Rc;

use vitrine_form::{
    ContactForm, Dispatch, DispatchOutcome, Field, FormConfig, FormError, FormStatus,
    FormValues, SimulatedTransport, SubmitTicket,
};

fn fill(form: &mut ContactForm, values: &FormValues) {
    for f in Field::ALL {
        form.edit(f, values.get(f)).unwrap();
    }
}

fn jean() -> FormValues {
    FormValues::new("Jean Dupont", "jean@example.com", "Test", "Hello")
}

#[test]
fn jean_dupont_end_to_end() {
    let mut form = ContactForm::default();
    let mut transport = SimulatedTransport::default();
    fill(&mut form, &jean());
    assert_eq!(form.label(), "Envoyer");

    form.submit(&mut transport).unwrap();
    assert_eq!(form.status(), FormStatus::Sending);
    assert_eq!(form.label(), "Envoi...");
    assert!(form.submit_disabled());
    assert_eq!(transport.sent(), &[jean()]);

    assert!(form.advance(1499).is_empty());
    assert_eq!(form.advance(1), vec![FormStatus::Success]);
    assert!(form.values().is_empty());
    assert_eq!(form.label(), "Message envoyé !");
    assert!(form.reset_pending());

    assert!(form.advance(2999).is_empty());
    assert_eq!(form.advance(1), vec![FormStatus::Idle]);
    assert_eq!(form.status(), FormStatus::Idle);
    assert!(!form.reset_pending());
}

#[test]
fn empty_email_keeps_the_form_idle() {
    let mut form = ContactForm::default();
    let mut transport = SimulatedTransport::default();
    let mut values = jean();
    values.email.clear();
    fill(&mut form, &values);

    assert_eq!(
        form.submit(&mut transport),
        Err(FormError::MissingField(Field::Email))
    );
    assert_eq!(form.status(), FormStatus::Idle);
    assert!(transport.sent().is_empty());
    assert!(!form.has_pending_timers());
}

#[test]
fn double_submit_completes_once() {
    let mut form = ContactForm::default();
    let mut transport = SimulatedTransport::default();
    fill(&mut form, &jean());

    form.submit(&mut transport).unwrap();
    assert_eq!(form.submit(&mut transport), Err(FormError::AlreadySending));
    form.advance(10_000);

    assert_eq!(form.deliveries(), 1);
    assert_eq!(transport.sent().len(), 1);
}

#[test]
fn failed_dispatch_keeps_fields_and_allows_retry() {
    let mut form = ContactForm::default();
    let mut failing = SimulatedTransport::failing(1500, "smtp down");
    fill(&mut form, &jean());

    form.submit(&mut failing).unwrap();
    assert_eq!(form.advance(1500), vec![FormStatus::Error]);
    assert_eq!(form.values(), &jean());
    assert_eq!(form.label(), "Erreur d'envoi");
    assert!(!form.submit_disabled());

    let mut ok = SimulatedTransport::default();
    form.submit(&mut ok).unwrap();
    assert_eq!(form.last_error(), None);
    form.advance(1500);
    assert_eq!(form.status(), FormStatus::Success);
}

#[test]
fn external_transport_completes_through_ticket() {
    let seen: Rc<RefCell<Vec<SubmitTicket>>> = Rc::default();
    let sink = Rc::clone(&seen);
    let mut external = move |_: &FormValues, ticket: SubmitTicket| {
        sink.borrow_mut().push(ticket);
        Dispatch::Pending
    };

    let mut form = ContactForm::default();
    fill(&mut form, &jean());
    let ticket = form.submit(&mut external).unwrap();
    assert_eq!(seen.borrow().as_slice(), &[ticket]);

    // Nothing happens on its own.
    assert!(form.advance(60_000).is_empty());
    assert_eq!(form.status(), FormStatus::Sending);

    assert!(form.complete(ticket, DispatchOutcome::Delivered));
    assert_eq!(form.status(), FormStatus::Success);
}

#[test]
fn stale_ticket_is_ignored() {
    let mut form = ContactForm::default();
    let mut external = |_: &FormValues, _: SubmitTicket| Dispatch::Pending;
    fill(&mut form, &jean());

    let first = form.submit(&mut external).unwrap();
    assert!(form.complete(first, DispatchOutcome::failed("timeout")));
    assert_eq!(form.status(), FormStatus::Error);

    let second = form.submit(&mut external).unwrap();
    assert_ne!(first, second);
    assert!(!form.complete(first, DispatchOutcome::Delivered));
    assert_eq!(form.status(), FormStatus::Sending);
    assert!(form.complete(second, DispatchOutcome::Delivered));
    assert!(!form.complete(second, DispatchOutcome::Delivered));
    assert_eq!(form.deliveries(), 1);
}

#[test]
fn teardown_cancels_pending_reset() {
    let mut form = ContactForm::default();
    fill(&mut form, &jean());
    form.submit(&mut SimulatedTransport::default()).unwrap();
    form.advance(1500);
    assert_eq!(form.status(), FormStatus::Success);
    assert!(form.has_pending_timers());
    assert!(form.reset_pending());

    form.teardown();
    assert!(!form.has_pending_timers());
    assert!(!form.reset_pending());
    assert!(form.advance(10_000).is_empty());
    assert_eq!(form.status(), FormStatus::Success);
    assert_eq!(form.edit(Field::Name, "late"), Err(FormError::TornDown));
    assert_eq!(
        form.submit(&mut SimulatedTransport::default()),
        Err(FormError::TornDown)
    );
}

#[test]
fn teardown_mid_send_suppresses_completion() {
    let mut form = ContactForm::default();
    let mut external = |_: &FormValues, _: SubmitTicket| Dispatch::Pending;
    fill(&mut form, &jean());
    let ticket = form.submit(&mut external).unwrap();
    form.teardown();
    assert!(!form.complete(ticket, DispatchOutcome::Delivered));
    assert_eq!(form.values(), &jean());
    assert_eq!(form.deliveries(), 0);
}

#[test]
fn custom_timings_apply() {
    let cfg = FormConfig {
        success_reset_ms: 500,
        ..FormConfig::default()
    };
    let mut form = ContactForm::new(cfg);
    fill(&mut form, &jean());
    form.submit(&mut SimulatedTransport::new(cfg.dispatch_delay_ms))
        .unwrap();
    assert_eq!(form.advance(2000), vec![FormStatus::Success, FormStatus::Idle]);
}
