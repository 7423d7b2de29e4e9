//! Delete All Appointments Handler

use salvo::prelude::*;

use crate::{appointments::errors::into_status_error, extensions::*};

/// Delete All Appointments Handler
#[endpoint(
    tags("appointments"),
    summary = "Delete All Appointments",
    responses((status_code = StatusCode::OK, description = "Appointments deleted")),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<StatusCode, StatusError> {
    depot
        .state_or_500()?
        .app
        .appointments
        .delete_appointments()
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::OK)
}
