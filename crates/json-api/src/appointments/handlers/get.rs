//! Get Appointment Handler

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use hospital_app::domain::appointments::records::{AppointmentId, AppointmentRecord};

use crate::{
    appointments::errors::into_status_error, doctors::get::DoctorResponse, extensions::*,
    patients::get::PatientResponse, rooms::get::RoomResponse,
};

/// Appointment with its doctor, patient and room expanded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AppointmentResponse {
    pub id: i64,

    pub patient: PatientResponse,

    pub doctor: DoctorResponse,

    pub room: RoomResponse,

    /// ISO-8601 civil date-time, e.g. `2026-03-01T09:00:00`
    pub starts_at: String,

    /// ISO-8601 civil date-time, exclusive
    pub finishes_at: String,
}

impl From<AppointmentRecord> for AppointmentResponse {
    fn from(appointment: AppointmentRecord) -> Self {
        AppointmentResponse {
            id: appointment.id.into_i64(),
            patient: appointment.patient.into(),
            doctor: appointment.doctor.into(),
            room: appointment.room.into(),
            starts_at: appointment.slot.starts_at().to_string(),
            finishes_at: appointment.slot.finishes_at().to_string(),
        }
    }
}

/// Get Appointment Handler
#[endpoint(
    tags("appointments"),
    summary = "Get Appointment",
    responses(
        (status_code = StatusCode::OK, description = "Appointment found"),
        (status_code = StatusCode::NOT_FOUND, description = "Appointment not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Id is not an integer"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<AppointmentResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let appointment = state
        .app
        .appointments
        .get_appointment(AppointmentId::from_i64(id.into_inner()))
        .await
        .map_err(into_status_error)?;

    Ok(Json(appointment.into()))
}
