//! Delete Room Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{extensions::*, rooms::errors::into_status_error};

/// Delete Room Handler
#[endpoint(
    tags("rooms"),
    summary = "Delete Room",
    responses(
        (status_code = StatusCode::OK, description = "Room deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Room not found"),
        (status_code = StatusCode::CONFLICT, description = "Room has appointments"),
    ),
)]
pub(crate) async fn handler(
    room_name: PathParam<String>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.state_or_500()?;

    state
        .app
        .rooms
        .delete_room(room_name.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::OK)
}
