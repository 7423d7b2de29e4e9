//! Update Patient Handler

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use hospital_app::domain::patients::{data::PatientUpdate, records::PatientId};

use crate::{
    patients::{errors::into_status_error, get::PatientResponse},
    extensions::*,
};

/// Update Patient Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdatePatientRequest {
    pub first_name: String,
    pub last_name: String,
    pub age: u16,
    pub email: String,
}

impl From<UpdatePatientRequest> for PatientUpdate {
    fn from(request: UpdatePatientRequest) -> Self {
        PatientUpdate {
            first_name: request.first_name,
            last_name: request.last_name,
            age: request.age,
            email: request.email,
        }
    }
}

/// Update Patient Handler
#[endpoint(
    tags("patients"),
    summary = "Update Patient",
    responses(
        (status_code = StatusCode::OK, description = "Patient updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Patient not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "patients.update",
    skip(id, json, depot),
    fields(patient_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    json: JsonBody<UpdatePatientRequest>,
    depot: &mut Depot,
) -> Result<Json<PatientResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let id = PatientId::from_i64(id.into_inner());

    tracing::Span::current().record("patient_id", tracing::field::display(id));

    let patient = state
        .app
        .patients
        .update_patient(id, json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    tracing::info!("updated patient");

    Ok(Json(patient.into()))
}
