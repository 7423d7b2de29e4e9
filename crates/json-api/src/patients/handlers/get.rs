//! Get Patient Handler

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use hospital_app::domain::patients::records::{PatientId, PatientRecord};

use crate::{patients::errors::into_status_error, extensions::*};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PatientResponse {
    /// Store-assigned patient id
    pub id: i64,

    pub first_name: String,

    pub last_name: String,

    pub age: u16,

    pub email: String,
}

impl From<PatientRecord> for PatientResponse {
    fn from(patient: PatientRecord) -> Self {
        PatientResponse {
            id: patient.id.into_i64(),
            first_name: patient.first_name,
            last_name: patient.last_name,
            age: patient.age,
            email: patient.email,
        }
    }
}

/// Get Patient Handler
#[endpoint(
    tags("patients"),
    summary = "Get Patient",
    responses(
        (status_code = StatusCode::OK, description = "Patient found"),
        (status_code = StatusCode::NOT_FOUND, description = "Patient not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Id is not an integer"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<PatientResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let patient = state
        .app
        .patients
        .get_patient(PatientId::from_i64(id.into_inner()))
        .await
        .map_err(into_status_error)?;

    Ok(Json(patient.into()))
}
