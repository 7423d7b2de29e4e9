//! Room Errors

use salvo::http::StatusError;
use tracing::error;

use hospital_app::domain::rooms::RoomsServiceError;

pub(crate) fn into_status_error(error: RoomsServiceError) -> StatusError {
    match error {
        RoomsServiceError::AlreadyExists => StatusError::conflict().brief("Room already exists"),
        RoomsServiceError::Referenced => StatusError::conflict().brief("Room has appointments"),
        RoomsServiceError::NotFound => StatusError::not_found().brief("Room not found"),
        RoomsServiceError::MissingRequiredData | RoomsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid room payload")
        }
        RoomsServiceError::Sql(source) => {
            error!("room storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}
