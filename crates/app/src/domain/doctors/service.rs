//! Doctors service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::doctors::{
        data::{DoctorUpdate, NewDoctor},
        errors::DoctorsServiceError,
        records::{DoctorId, DoctorRecord},
        repository::PgDoctorsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgDoctorsService {
    db: Db,
    repository: PgDoctorsRepository,
}

impl PgDoctorsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgDoctorsRepository::new(),
        }
    }
}

#[async_trait]
impl DoctorsService for PgDoctorsService {
    async fn list_doctors(&self) -> Result<Vec<DoctorRecord>, DoctorsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let doctors = self.repository.list_doctors(&mut tx).await?;

        tx.commit().await?;

        Ok(doctors)
    }

    async fn get_doctor(&self, doctor: DoctorId) -> Result<DoctorRecord, DoctorsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let doctor = self
            .repository
            .find_doctor(&mut tx, doctor)
            .await?
            .ok_or(DoctorsServiceError::NotFound)?;

        tx.commit().await?;

        Ok(doctor)
    }

    async fn save_doctor(&self, doctor: NewDoctor) -> Result<DoctorRecord, DoctorsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let saved = self.repository.save_doctor(&mut tx, doctor).await?;

        tx.commit().await?;

        Ok(saved)
    }

    async fn update_doctor(
        &self,
        doctor: DoctorId,
        update: DoctorUpdate,
    ) -> Result<DoctorRecord, DoctorsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let updated = self
            .repository
            .update_doctor(&mut tx, doctor, update)
            .await?
            .ok_or(DoctorsServiceError::NotFound)?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn delete_doctor(&self, doctor: DoctorId) -> Result<(), DoctorsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let rows_affected = self.repository.delete_doctor(&mut tx, doctor).await?;

        if rows_affected == 0 {
            return Err(DoctorsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }

    async fn delete_doctors(&self) -> Result<(), DoctorsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        self.repository.delete_doctors(&mut tx).await?;

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait DoctorsService: Send + Sync {
    /// Retrieves all doctors, ordered by id.
    async fn list_doctors(&self) -> Result<Vec<DoctorRecord>, DoctorsServiceError>;

    /// Retrieve a single doctor.
    async fn get_doctor(&self, doctor: DoctorId) -> Result<DoctorRecord, DoctorsServiceError>;

    /// Inserts a doctor, or replaces the row when its id is already stored.
    async fn save_doctor(&self, doctor: NewDoctor) -> Result<DoctorRecord, DoctorsServiceError>;

    /// Replaces the details of an existing doctor.
    async fn update_doctor(
        &self,
        doctor: DoctorId,
        update: DoctorUpdate,
    ) -> Result<DoctorRecord, DoctorsServiceError>;

    /// Deletes a doctor with the given id.
    async fn delete_doctor(&self, doctor: DoctorId) -> Result<(), DoctorsServiceError>;

    /// Deletes every doctor.
    async fn delete_doctors(&self) -> Result<(), DoctorsServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test::{TestContext, helpers::new_doctor};

    use super::*;

    #[tokio::test]
    async fn save_doctor_assigns_id_and_round_trips() -> TestResult {
        let ctx = TestContext::new().await;

        let saved = ctx
            .doctors
            .save_doctor(new_doctor("Mateo", "Gil", 35, "m.gil@hospital.accwe"))
            .await?;

        let fetched = ctx.doctors.get_doctor(saved.id).await?;

        assert_eq!(fetched, saved);
        assert_eq!(fetched.first_name, "Mateo");
        assert_eq!(fetched.last_name, "Gil");
        assert_eq!(fetched.age, 35);
        assert_eq!(fetched.email, "m.gil@hospital.accwe");

        Ok(())
    }

    #[tokio::test]
    async fn save_doctor_assigns_increasing_ids() -> TestResult {
        let ctx = TestContext::new().await;

        let first = ctx
            .doctors
            .save_doctor(new_doctor("Juan", "Carlos", 34, "j.carlos@hospital.accwe"))
            .await?;

        let second = ctx
            .doctors
            .save_doctor(new_doctor("Mateo", "Gil", 35, "m.gil@hospital.accwe"))
            .await?;

        assert!(second.id > first.id, "ids should be assigned in order");

        Ok(())
    }

    #[tokio::test]
    async fn save_doctor_with_known_id_replaces_row() -> TestResult {
        let ctx = TestContext::new().await;

        let saved = ctx
            .doctors
            .save_doctor(new_doctor("Juan", "Carlos", 34, "j.carlos@hospital.accwe"))
            .await?;

        let replaced = ctx
            .doctors
            .save_doctor(NewDoctor {
                id: Some(saved.id),
                ..new_doctor("Juan", "Carlos", 35, "juan.carlos@hospital.accwe")
            })
            .await?;

        let doctors = ctx.doctors.list_doctors().await?;

        assert_eq!(replaced.id, saved.id);
        assert_eq!(replaced.age, 35);
        assert_eq!(doctors, vec![replaced]);

        Ok(())
    }

    #[tokio::test]
    async fn save_doctor_with_unknown_id_inserts_under_new_id() -> TestResult {
        let ctx = TestContext::new().await;
        let unknown = DoctorId::from_i64(9_999);

        let saved = ctx
            .doctors
            .save_doctor(NewDoctor {
                id: Some(unknown),
                ..new_doctor("Mateo", "Gil", 35, "m.gil@hospital.accwe")
            })
            .await?;

        assert_ne!(saved.id, unknown);
        assert_eq!(ctx.doctors.get_doctor(saved.id).await?, saved);

        Ok(())
    }

    #[tokio::test]
    async fn save_doctor_empty_name_returns_invalid_data() {
        let ctx = TestContext::new().await;

        let result = ctx
            .doctors
            .save_doctor(new_doctor("", "Gil", 35, "m.gil@hospital.accwe"))
            .await;

        assert!(
            matches!(result, Err(DoctorsServiceError::InvalidData)),
            "expected InvalidData, got {result:?}"
        );
    }

    #[tokio::test]
    async fn get_doctor_unknown_id_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.doctors.get_doctor(DoctorId::from_i64(999)).await;

        assert!(
            matches!(result, Err(DoctorsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn list_doctors_empty_when_none_saved() -> TestResult {
        let ctx = TestContext::new().await;

        let doctors = ctx.doctors.list_doctors().await?;

        assert!(doctors.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn update_doctor_reflects_new_details() -> TestResult {
        let ctx = TestContext::new().await;

        let saved = ctx
            .doctors
            .save_doctor(new_doctor("Clarisa", "Julia", 29, "c.julia@hospital.accwe"))
            .await?;

        let updated = ctx
            .doctors
            .update_doctor(
                saved.id,
                DoctorUpdate {
                    first_name: "Clarisa".to_string(),
                    last_name: "Julia".to_string(),
                    age: 30,
                    email: "clarisa@hospital.accwe".to_string(),
                },
            )
            .await?;

        assert_eq!(updated.id, saved.id);
        assert_eq!(updated.age, 30);
        assert_eq!(updated.email, "clarisa@hospital.accwe");

        Ok(())
    }

    #[tokio::test]
    async fn update_doctor_unknown_id_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx
            .doctors
            .update_doctor(
                DoctorId::from_i64(1),
                DoctorUpdate {
                    first_name: "Clarisa".to_string(),
                    last_name: "Julia".to_string(),
                    age: 30,
                    email: "clarisa@hospital.accwe".to_string(),
                },
            )
            .await;

        assert!(
            matches!(result, Err(DoctorsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn delete_doctor_then_again_returns_not_found() -> TestResult {
        let ctx = TestContext::new().await;

        let saved = ctx
            .doctors
            .save_doctor(new_doctor("Juan", "Carlos", 34, "j.carlos@hospital.accwe"))
            .await?;

        ctx.doctors.delete_doctor(saved.id).await?;

        let result = ctx.doctors.delete_doctor(saved.id).await;

        assert!(
            matches!(result, Err(DoctorsServiceError::NotFound)),
            "expected NotFound on second delete, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn delete_doctors_removes_everything_and_is_idempotent() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.doctors
            .save_doctor(new_doctor("Juan", "Carlos", 34, "j.carlos@hospital.accwe"))
            .await?;

        ctx.doctors
            .save_doctor(new_doctor("Mateo", "Gil", 35, "m.gil@hospital.accwe"))
            .await?;

        ctx.doctors.delete_doctors().await?;
        ctx.doctors.delete_doctors().await?;

        assert!(ctx.doctors.list_doctors().await?.is_empty());

        Ok(())
    }
}
