//! Appointment Errors

use salvo::http::StatusError;
use tracing::error;

use hospital_app::domain::appointments::AppointmentsServiceError;

pub(crate) fn into_status_error(error: AppointmentsServiceError) -> StatusError {
    match error {
        AppointmentsServiceError::NotFound => {
            StatusError::not_found().brief("Appointment not found")
        }
        AppointmentsServiceError::Overlap => StatusError::not_acceptable()
            .brief("Appointment overlaps an existing booking"),
        AppointmentsServiceError::InvalidTimeSlot(source) => {
            StatusError::bad_request().brief(source.to_string())
        }
        AppointmentsServiceError::InvalidReference => {
            StatusError::bad_request().brief("Unknown doctor, patient or room")
        }
        AppointmentsServiceError::MissingRequiredData | AppointmentsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid appointment payload")
        }
        AppointmentsServiceError::Sql(source) => {
            error!("appointment storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}
