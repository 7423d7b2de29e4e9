//! Delete Patient Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use hospital_app::domain::patients::records::PatientId;

use crate::{patients::errors::into_status_error, extensions::*};

/// Delete Patient Handler
#[endpoint(
    tags("patients"),
    summary = "Delete Patient",
    responses(
        (status_code = StatusCode::OK, description = "Patient deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Patient not found"),
        (status_code = StatusCode::CONFLICT, description = "Patient has appointments"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(id: PathParam<i64>, depot: &mut Depot) -> Result<StatusCode, StatusError> {
    let state = depot.state_or_500()?;

    state
        .app
        .patients
        .delete_patient(PatientId::from_i64(id.into_inner()))
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::OK)
}
