//! Patient Errors

use salvo::http::StatusError;
use tracing::error;

use hospital_app::domain::patients::PatientsServiceError;

pub(crate) fn into_status_error(error: PatientsServiceError) -> StatusError {
    match error {
        PatientsServiceError::NotFound => StatusError::not_found().brief("Patient not found"),
        PatientsServiceError::Referenced => {
            StatusError::conflict().brief("Patient has appointments")
        }
        PatientsServiceError::MissingRequiredData | PatientsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid patient payload")
        }
        PatientsServiceError::Sql(source) => {
            error!("patient storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}
