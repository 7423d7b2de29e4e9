//! Doctor Index Handler

use salvo::prelude::*;

use crate::{
    doctors::{errors::into_status_error, get::DoctorResponse},
    extensions::*,
};

/// Doctor Index Handler
///
/// Returns every doctor, possibly none.
#[endpoint(tags("doctors"), summary = "List Doctors")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<DoctorResponse>>, StatusError> {
    let state = depot.state_or_500()?;

    let doctors = state
        .app
        .doctors
        .list_doctors()
        .await
        .map_err(into_status_error)?;

    Ok(Json(doctors.into_iter().map(Into::into).collect()))
}
