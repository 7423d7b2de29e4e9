//! Update Doctor Handler

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use hospital_app::domain::doctors::{data::DoctorUpdate, records::DoctorId};

use crate::{
    doctors::{errors::into_status_error, get::DoctorResponse},
    extensions::*,
};

/// Update Doctor Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateDoctorRequest {
    pub first_name: String,
    pub last_name: String,
    pub age: u16,
    pub email: String,
}

impl From<UpdateDoctorRequest> for DoctorUpdate {
    fn from(request: UpdateDoctorRequest) -> Self {
        DoctorUpdate {
            first_name: request.first_name,
            last_name: request.last_name,
            age: request.age,
            email: request.email,
        }
    }
}

/// Update Doctor Handler
#[endpoint(
    tags("doctors"),
    summary = "Update Doctor",
    responses(
        (status_code = StatusCode::OK, description = "Doctor updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Doctor not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "doctors.update",
    skip(id, json, depot),
    fields(doctor_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    json: JsonBody<UpdateDoctorRequest>,
    depot: &mut Depot,
) -> Result<Json<DoctorResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let id = DoctorId::from_i64(id.into_inner());

    tracing::Span::current().record("doctor_id", tracing::field::display(id));

    let doctor = state
        .app
        .doctors
        .update_doctor(id, json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    tracing::info!("updated doctor");

    Ok(Json(doctor.into()))
}
