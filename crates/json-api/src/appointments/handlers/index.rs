//! Appointment Index Handler

use salvo::prelude::*;

use crate::{
    appointments::{errors::into_status_error, get::AppointmentResponse},
    extensions::*,
};

/// Appointment Index Handler
#[endpoint(tags("appointments"), summary = "List Appointments")]
pub(crate) async fn handler(
    depot: &mut Depot,
) -> Result<Json<Vec<AppointmentResponse>>, StatusError> {
    let state = depot.state_or_500()?;

    let appointments = state
        .app
        .appointments
        .list_appointments()
        .await
        .map_err(into_status_error)?;

    Ok(Json(appointments.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use hospital_app::domain::appointments::MockAppointmentsService;

    use crate::test_helpers::{appointments_service, is_json, make_appointment};

    use super::*;

    #[tokio::test]
    async fn test_index_returns_appointments() -> TestResult {
        let mut appointments = MockAppointmentsService::new();

        appointments
            .expect_list_appointments()
            .once()
            .return_once(|| Ok(vec![make_appointment(1), make_appointment(2)]));

        let mut res = TestClient::get("http://example.com/api/appointments")
            .send(&appointments_service(appointments))
            .await;

        let body: Vec<AppointmentResponse> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(is_json(&res), "expected a JSON response");
        assert_eq!(body.len(), 2, "expected two appointments");

        Ok(())
    }

    #[tokio::test]
    async fn test_index_returns_empty_array() -> TestResult {
        let mut appointments = MockAppointmentsService::new();

        appointments
            .expect_list_appointments()
            .once()
            .return_once(|| Ok(vec![]));

        let body: Vec<AppointmentResponse> = TestClient::get("http://example.com/api/appointments")
            .send(&appointments_service(appointments))
            .await
            .take_json()
            .await?;

        assert!(body.is_empty());

        Ok(())
    }
}
