//! Get Doctor Handler

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use hospital_app::domain::doctors::records::{DoctorId, DoctorRecord};

use crate::{doctors::errors::into_status_error, extensions::*};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DoctorResponse {
    /// Store-assigned doctor id
    pub id: i64,

    pub first_name: String,

    pub last_name: String,

    pub age: u16,

    pub email: String,
}

impl From<DoctorRecord> for DoctorResponse {
    fn from(doctor: DoctorRecord) -> Self {
        DoctorResponse {
            id: doctor.id.into_i64(),
            first_name: doctor.first_name,
            last_name: doctor.last_name,
            age: doctor.age,
            email: doctor.email,
        }
    }
}

/// Get Doctor Handler
#[endpoint(
    tags("doctors"),
    summary = "Get Doctor",
    responses(
        (status_code = StatusCode::OK, description = "Doctor found"),
        (status_code = StatusCode::NOT_FOUND, description = "Doctor not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Id is not an integer"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<DoctorResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let doctor = state
        .app
        .doctors
        .get_doctor(DoctorId::from_i64(id.into_inner()))
        .await
        .map_err(into_status_error)?;

    Ok(Json(doctor.into()))
}
