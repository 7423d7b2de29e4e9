//! Appointments service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::domain::appointments::schedule::InvalidTimeSlot;

/// SQLSTATE raised when an `EXCLUDE` constraint rejects a row.
const EXCLUSION_VIOLATION: &str = "23P01";

#[derive(Debug, Error)]
pub enum AppointmentsServiceError {
    #[error("appointment not found")]
    NotFound,

    #[error("appointment overlaps an existing booking for the same doctor, patient or room")]
    Overlap,

    #[error(transparent)]
    InvalidTimeSlot(#[from] InvalidTimeSlot),

    #[error("referenced doctor, patient or room not found")]
    InvalidReference,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for AppointmentsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        let Some(database_error) = error.as_database_error() else {
            return Self::Sql(error);
        };

        if database_error.code().as_deref() == Some(EXCLUSION_VIOLATION) {
            return Self::Overlap;
        }

        match database_error.kind() {
            ErrorKind::ForeignKeyViolation => Self::InvalidReference,
            ErrorKind::NotNullViolation => Self::MissingRequiredData,
            ErrorKind::CheckViolation => Self::InvalidData,
            ErrorKind::UniqueViolation | ErrorKind::Other | _ => Self::Sql(error),
        }
    }
}
