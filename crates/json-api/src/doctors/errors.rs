//! Doctor Errors

use salvo::http::StatusError;
use tracing::error;

use hospital_app::domain::doctors::DoctorsServiceError;

pub(crate) fn into_status_error(error: DoctorsServiceError) -> StatusError {
    match error {
        DoctorsServiceError::NotFound => StatusError::not_found().brief("Doctor not found"),
        DoctorsServiceError::Referenced => {
            StatusError::conflict().brief("Doctor has appointments")
        }
        DoctorsServiceError::MissingRequiredData | DoctorsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid doctor payload")
        }
        DoctorsServiceError::Sql(source) => {
            error!("doctor storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}
