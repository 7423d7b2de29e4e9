//! Create Appointment Handler

use jiff::civil::DateTime;
use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use hospital_app::domain::{
    appointments::data::NewAppointment, doctors::records::DoctorId, patients::records::PatientId,
};

use crate::{
    appointments::{errors::into_status_error, get::AppointmentResponse},
    extensions::*,
};

/// Reference to a doctor or patient by id. Other fields are ignored.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct IdRef {
    pub id: i64,
}

/// Reference to a room by name. Other fields are ignored.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RoomRef {
    pub room_name: String,
}

/// Create Appointment Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateAppointmentRequest {
    pub patient: IdRef,
    pub doctor: IdRef,
    pub room: RoomRef,
    /// ISO-8601 civil date-time
    pub starts_at: String,
    /// ISO-8601 civil date-time, exclusive
    pub finishes_at: String,
}

impl CreateAppointmentRequest {
    fn try_into_new_appointment(self) -> Result<NewAppointment, StatusError> {
        let starts_at: DateTime = self.starts_at.parse().or_400("invalid startsAt")?;
        let finishes_at: DateTime = self.finishes_at.parse().or_400("invalid finishesAt")?;

        Ok(NewAppointment {
            patient: PatientId::from_i64(self.patient.id),
            doctor: DoctorId::from_i64(self.doctor.id),
            room_name: self.room.room_name,
            starts_at,
            finishes_at,
        })
    }
}

/// Create Appointment Handler
///
/// Admits the appointment unless its doctor, patient or room is already
/// booked for an overlapping slot.
#[endpoint(
    tags("appointments"),
    summary = "Create Appointment",
    responses(
        (status_code = StatusCode::OK, description = "Appointment admitted"),
        (status_code = StatusCode::NOT_ACCEPTABLE, description = "Overlaps an existing booking"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid slot or unknown reference"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateAppointmentRequest>,
    depot: &mut Depot,
) -> Result<Json<AppointmentResponse>, StatusError> {
    let candidate = json.into_inner().try_into_new_appointment()?;
    let state = depot.state_or_500()?;

    let appointment = state
        .app
        .appointments
        .admit_appointment(candidate)
        .await
        .map_err(into_status_error)?;

    info!(
        appointment_id = %appointment.id,
        request_id = depot.request_id(),
        "admitted appointment"
    );

    Ok(Json(appointment.into()))
}
