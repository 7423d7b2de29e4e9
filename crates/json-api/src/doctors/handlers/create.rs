//! Create Doctor Handler

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use hospital_app::domain::doctors::{data::NewDoctor, records::DoctorId};

use crate::{
    doctors::{errors::into_status_error, get::DoctorResponse},
    extensions::*,
};

/// Create Doctor Request
///
/// An `id` is optional. A known id replaces that doctor; an unknown one is
/// ignored in favour of a freshly assigned id.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateDoctorRequest {
    #[serde(default)]
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub age: u16,
    pub email: String,
}

impl From<CreateDoctorRequest> for NewDoctor {
    fn from(request: CreateDoctorRequest) -> Self {
        NewDoctor {
            id: request.id.map(DoctorId::from_i64),
            first_name: request.first_name,
            last_name: request.last_name,
            age: request.age,
            email: request.email,
        }
    }
}

/// Create Doctor Handler
#[endpoint(
    tags("doctors"),
    summary = "Create Doctor",
    responses(
        (status_code = StatusCode::CREATED, description = "Doctor created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateDoctorRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<DoctorResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let doctor = state
        .app
        .doctors
        .save_doctor(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/api/doctors/{}", doctor.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(doctor.into()))
}
