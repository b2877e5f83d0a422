//! Unit tests for event form validation.

use super::*;
use crate::events::{EventDraft, RegistrationField};

const START: &str = "2026-05-01T10:00";
const END: &str = "2026-05-02T10:00";
const DEADLINE: &str = "2026-04-25T23:59";

#[test]
fn test_valid_schedule() {
    assert_eq!(validate_event_schedule(START, END, DEADLINE), Ok(()));
    // Seconds are accepted too
    assert_eq!(validate_event_schedule("2026-05-01T10:00:30", END, DEADLINE), Ok(()));
}

#[test]
fn test_end_must_follow_start() {
    assert_eq!(
        validate_event_schedule(START, START, DEADLINE),
        Err(ValidationError::EndNotAfterStart)
    );
    assert_eq!(
        validate_event_schedule(START, "2026-04-30T10:00", DEADLINE),
        Err(ValidationError::EndNotAfterStart)
    );
}

#[test]
fn test_deadline_must_precede_start() {
    assert_eq!(
        validate_event_schedule(START, END, START),
        Err(ValidationError::DeadlineNotBeforeStart)
    );
    assert_eq!(
        validate_event_schedule(START, END, "2026-05-01T12:00"),
        Err(ValidationError::DeadlineNotBeforeStart)
    );
}

#[test]
fn test_end_checked_before_deadline() {
    // Both orderings are wrong; the end date is reported first
    assert_eq!(
        validate_event_schedule(START, START, END),
        Err(ValidationError::EndNotAfterStart)
    );
}

#[test]
fn test_unparsable_dates() {
    assert_eq!(
        validate_event_schedule("", END, DEADLINE),
        Err(ValidationError::InvalidDate("Start date"))
    );
    assert_eq!(
        validate_event_schedule(START, "tomorrow", DEADLINE),
        Err(ValidationError::InvalidDate("End date"))
    );
    assert_eq!(
        validate_event_schedule(START, END, "2026-13-01T00:00"),
        Err(ValidationError::InvalidDate("Registration deadline"))
    );
}

#[test]
fn test_prize_amounts() {
    assert_eq!(validate_prizes(&[]), Ok(()));
    let prizes = [
        Prize { position: 1, amount: 100.0 },
        Prize { position: 2, amount: 0.0 },
    ];
    assert_eq!(validate_prizes(&prizes), Err(ValidationError::NonPositivePrize));
    let prizes = [Prize { position: 1, amount: -5.0 }];
    assert_eq!(validate_prizes(&prizes), Err(ValidationError::NonPositivePrize));
}

#[test]
fn test_draft_validation_order() {
    let mut draft = EventDraft {
        start_date: START.to_string(),
        end_date: END.to_string(),
        registration_deadline: DEADLINE.to_string(),
        ..Default::default()
    };
    assert_eq!(draft.validate(), Err(ValidationError::Required("Event name")));

    draft.name = "Hack Night".to_string();
    draft.prizes.add();
    assert_eq!(draft.validate(), Err(ValidationError::NonPositivePrize));

    draft.prizes.set_amount(0, 250.0);
    draft.registration_fields.push(RegistrationField::default());
    assert_eq!(draft.validate(), Err(ValidationError::Required("Registration field name")));

    draft.registration_fields[0].field_name = "GitHub".to_string();
    assert_eq!(draft.validate(), Ok(()));
}

#[test]
fn test_messages_match_form_copy() {
    assert_eq!(ValidationError::EndNotAfterStart.to_string(), "End date must be after start date");
    assert_eq!(
        ValidationError::DeadlineNotBeforeStart.to_string(),
        "Registration deadline must be before start date"
    );
    assert_eq!(ValidationError::NonPositivePrize.to_string(), "Prize amount must be greater than 0");
}
