//! Client-side form checks run before anything is sent to the API.

use thiserror::Error;

use crate::events::{parse_datetime_local, Prize};

/// Validation failures shown inline on the forms.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("{0} is not a valid date")]
    InvalidDate(&'static str),
    #[error("End date must be after start date")]
    EndNotAfterStart,
    #[error("Registration deadline must be before start date")]
    DeadlineNotBeforeStart,
    #[error("Prize amount must be greater than 0")]
    NonPositivePrize,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("An admin secret is required to register as an admin")]
    AdminSecretRequired,
    #[error("Please answer '{0}'")]
    MissingAnswer(String),
}

/// Check the ordering of the three event dates.
///
/// The end must be strictly after the start and the registration deadline
/// strictly before it.
pub fn validate_event_schedule(start: &str, end: &str, deadline: &str) -> Result<(), ValidationError> {
    let start = parse_datetime_local(start).ok_or(ValidationError::InvalidDate("Start date"))?;
    let end = parse_datetime_local(end).ok_or(ValidationError::InvalidDate("End date"))?;
    let deadline = parse_datetime_local(deadline).ok_or(ValidationError::InvalidDate("Registration deadline"))?;

    if end <= start {
        return Err(ValidationError::EndNotAfterStart);
    }
    if deadline >= start {
        return Err(ValidationError::DeadlineNotBeforeStart);
    }
    Ok(())
}

pub fn validate_prizes(prizes: &[Prize]) -> Result<(), ValidationError> {
    if prizes.iter().any(|p| p.amount <= 0.0 || p.amount.is_nan()) {
        return Err(ValidationError::NonPositivePrize);
    }
    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
