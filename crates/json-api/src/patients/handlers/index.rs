//! Patient Index Handler

use salvo::prelude::*;

use crate::{
    patients::{errors::into_status_error, get::PatientResponse},
    extensions::*,
};

/// Patient Index Handler
///
/// Returns every patient, possibly none.
#[endpoint(tags("patients"), summary = "List Patients")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<PatientResponse>>, StatusError> {
    let state = depot.state_or_500()?;

    let patients = state
        .app
        .patients
        .list_patients()
        .await
        .map_err(into_status_error)?;

    Ok(Json(patients.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use hospital_app::{
        database::SqlError,
        domain::patients::{PatientsServiceError, MockPatientsService},
    };

    use crate::test_helpers::{is_json, make_patient, patients_service};

    use super::*;

    #[tokio::test]
    async fn test_index_returns_empty_array() -> TestResult {
        let mut patients = MockPatientsService::new();

        patients
            .expect_list_patients()
            .once()
            .return_once(|| Ok(vec![]));

        let mut res = TestClient::get("http://example.com/api/patients")
            .send(&patients_service(patients))
            .await;

        let body: Vec<PatientResponse> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(is_json(&res), "expected a JSON response");
        assert!(body.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_index_returns_patients_in_order() -> TestResult {
        let mut patients = MockPatientsService::new();

        patients
            .expect_list_patients()
            .once()
            .return_once(|| Ok(vec![make_patient(1), make_patient(2)]));

        let body: Vec<PatientResponse> = TestClient::get("http://example.com/api/patients")
            .send(&patients_service(patients))
            .await
            .take_json()
            .await?;

        let ids: Vec<i64> = body.iter().map(|patient| patient.id).collect();

        assert_eq!(ids, vec![1, 2]);

        Ok(())
    }

    #[tokio::test]
    async fn test_index_storage_failure_returns_500() {
        let mut patients = MockPatientsService::new();

        patients
            .expect_list_patients()
            .once()
            .return_once(|| Err(PatientsServiceError::Sql(SqlError::PoolClosed)));

        let res = TestClient::get("http://example.com/api/patients")
            .send(&patients_service(patients))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
    }
}
