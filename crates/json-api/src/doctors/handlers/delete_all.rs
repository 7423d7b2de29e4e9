//! Delete All Doctors Handler

use salvo::prelude::*;

use crate::{doctors::errors::into_status_error, extensions::*};

/// Delete All Doctors Handler
#[endpoint(
    tags("doctors"),
    summary = "Delete All Doctors",
    responses(
        (status_code = StatusCode::OK, description = "Doctors deleted"),
        (status_code = StatusCode::CONFLICT, description = "A doctor has appointments"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<StatusCode, StatusError> {
    let state = depot.state_or_500()?;

    state
        .app
        .doctors
        .delete_doctors()
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::OK)
}
