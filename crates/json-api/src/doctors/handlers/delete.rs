//! Delete Doctor Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use hospital_app::domain::doctors::records::DoctorId;

use crate::{doctors::errors::into_status_error, extensions::*};

/// Delete Doctor Handler
#[endpoint(
    tags("doctors"),
    summary = "Delete Doctor",
    responses(
        (status_code = StatusCode::OK, description = "Doctor deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Doctor not found"),
        (status_code = StatusCode::CONFLICT, description = "Doctor has appointments"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(id: PathParam<i64>, depot: &mut Depot) -> Result<StatusCode, StatusError> {
    let state = depot.state_or_500()?;

    state
        .app
        .doctors
        .delete_doctor(DoctorId::from_i64(id.into_inner()))
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::OK)
}
