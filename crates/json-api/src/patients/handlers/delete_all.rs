//! Delete All Patients Handler

use salvo::prelude::*;

use crate::{patients::errors::into_status_error, extensions::*};

/// Delete All Patients Handler
#[endpoint(
    tags("patients"),
    summary = "Delete All Patients",
    responses(
        (status_code = StatusCode::OK, description = "Patients deleted"),
        (status_code = StatusCode::CONFLICT, description = "A patient has appointments"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<StatusCode, StatusError> {
    let state = depot.state_or_500()?;

    state
        .app
        .patients
        .delete_patients()
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::OK)
}
