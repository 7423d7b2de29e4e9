//! Delete Appointment Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use hospital_app::domain::appointments::records::AppointmentId;

use crate::{appointments::errors::into_status_error, extensions::*};

/// Delete Appointment Handler
#[endpoint(
    tags("appointments"),
    summary = "Delete Appointment",
    responses(
        (status_code = StatusCode::OK, description = "Appointment deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Appointment not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(id: PathParam<i64>, depot: &mut Depot) -> Result<StatusCode, StatusError> {
    let state = depot.state_or_500()?;

    state
        .app
        .appointments
        .delete_appointment(AppointmentId::from_i64(id.into_inner()))
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::OK)
}
