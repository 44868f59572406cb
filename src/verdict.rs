//! Turns a homework record into the user-facing review message.
//!
//! Pure string work only: no network, no clock, no logging side effects.

use thiserror::Error;

use crate::types::Homework;

/// Why a homework record could not be turned into a message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerdictError {
    #[error("homework record is missing its name or status")]
    MalformedRecord,

    #[error("unknown homework status: {0:?}")]
    UnknownStatus(String),
}

/// Human-readable verdict text for a review status code.
#[must_use]
pub fn verdict_text(status: &str) -> Option<&'static str> {
    match status {
        "reviewing" => Some("Your work has been picked up for review."),
        "approved" => Some("The reviewer liked everything, you can move on to the next lesson."),
        "rejected" => Some("Unfortunately, some issues were found in your work."),
        _ => None,
    }
}

/// Build the notification message for a reviewed homework.
pub fn review_message(homework: &Homework) -> Result<String, VerdictError> {
    let (Some(name), Some(status)) = (&homework.homework_name, &homework.status) else {
        return Err(VerdictError::MalformedRecord);
    };

    let verdict =
        verdict_text(status).ok_or_else(|| VerdictError::UnknownStatus(status.clone()))?;

    Ok(format!(
        "Your homework \"{name}\" has been reviewed!\n\n{verdict}"
    ))
}
