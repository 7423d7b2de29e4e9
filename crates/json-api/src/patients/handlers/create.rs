//! Create Patient Handler

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use hospital_app::domain::patients::{data::NewPatient, records::PatientId};

use crate::{
    patients::{errors::into_status_error, get::PatientResponse},
    extensions::*,
};

/// Create Patient Request
///
/// An `id` is optional. A known id replaces that patient; an unknown one is
/// ignored in favour of a freshly assigned id.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreatePatientRequest {
    #[serde(default)]
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub age: u16,
    pub email: String,
}

impl From<CreatePatientRequest> for NewPatient {
    fn from(request: CreatePatientRequest) -> Self {
        NewPatient {
            id: request.id.map(PatientId::from_i64),
            first_name: request.first_name,
            last_name: request.last_name,
            age: request.age,
            email: request.email,
        }
    }
}

/// Create Patient Handler
#[endpoint(
    tags("patients"),
    summary = "Create Patient",
    responses(
        (status_code = StatusCode::CREATED, description = "Patient created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreatePatientRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<PatientResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let patient = state
        .app
        .patients
        .save_patient(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/api/patients/{}", patient.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(patient.into()))
}
