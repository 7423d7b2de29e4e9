//! Patients service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::patients::{
        data::{PatientUpdate, NewPatient},
        errors::PatientsServiceError,
        records::{PatientId, PatientRecord},
        repository::PgPatientsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgPatientsService {
    db: Db,
    repository: PgPatientsRepository,
}

impl PgPatientsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgPatientsRepository::new(),
        }
    }
}

#[async_trait]
impl PatientsService for PgPatientsService {
    async fn list_patients(&self) -> Result<Vec<PatientRecord>, PatientsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let patients = self.repository.list_patients(&mut tx).await?;

        tx.commit().await?;

        Ok(patients)
    }

    async fn get_patient(&self, patient: PatientId) -> Result<PatientRecord, PatientsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let patient = self
            .repository
            .find_patient(&mut tx, patient)
            .await?
            .ok_or(PatientsServiceError::NotFound)?;

        tx.commit().await?;

        Ok(patient)
    }

    async fn save_patient(&self, patient: NewPatient) -> Result<PatientRecord, PatientsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let saved = self.repository.save_patient(&mut tx, patient).await?;

        tx.commit().await?;

        Ok(saved)
    }

    async fn update_patient(
        &self,
        patient: PatientId,
        update: PatientUpdate,
    ) -> Result<PatientRecord, PatientsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let updated = self
            .repository
            .update_patient(&mut tx, patient, update)
            .await?
            .ok_or(PatientsServiceError::NotFound)?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn delete_patient(&self, patient: PatientId) -> Result<(), PatientsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let rows_affected = self.repository.delete_patient(&mut tx, patient).await?;

        if rows_affected == 0 {
            return Err(PatientsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }

    async fn delete_patients(&self) -> Result<(), PatientsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        self.repository.delete_patients(&mut tx).await?;

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait PatientsService: Send + Sync {
    /// Retrieves all patients, ordered by id.
    async fn list_patients(&self) -> Result<Vec<PatientRecord>, PatientsServiceError>;

    /// Retrieve a single patient.
    async fn get_patient(&self, patient: PatientId) -> Result<PatientRecord, PatientsServiceError>;

    /// Inserts a patient, or replaces the row when its id is already stored.
    async fn save_patient(&self, patient: NewPatient) -> Result<PatientRecord, PatientsServiceError>;

    /// Replaces the details of an existing patient.
    async fn update_patient(
        &self,
        patient: PatientId,
        update: PatientUpdate,
    ) -> Result<PatientRecord, PatientsServiceError>;

    /// Deletes a patient with the given id.
    async fn delete_patient(&self, patient: PatientId) -> Result<(), PatientsServiceError>;

    /// Deletes every patient.
    async fn delete_patients(&self) -> Result<(), PatientsServiceError>;
}
