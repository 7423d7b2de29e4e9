//! Appointments service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::{Postgres, Transaction};
use tracing::{debug, warn};

use crate::{
    database::Db,
    domain::{
        appointments::{
            data::NewAppointment,
            errors::AppointmentsServiceError,
            records::{AppointmentId, AppointmentRecord},
            repository::PgAppointmentsRepository,
            schedule::TimeSlot,
        },
        doctors::repository::PgDoctorsRepository,
        patients::repository::PgPatientsRepository,
        rooms::repository::PgRoomsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgAppointmentsService {
    db: Db,
    appointments_repository: PgAppointmentsRepository,
    doctors_repository: PgDoctorsRepository,
    patients_repository: PgPatientsRepository,
    rooms_repository: PgRoomsRepository,
}

impl PgAppointmentsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            appointments_repository: PgAppointmentsRepository::new(),
            doctors_repository: PgDoctorsRepository::new(),
            patients_repository: PgPatientsRepository::new(),
            rooms_repository: PgRoomsRepository::new(),
        }
    }

    async fn ensure_references_exist(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        appointment: &NewAppointment,
    ) -> Result<(), AppointmentsServiceError> {
        let doctor = self
            .doctors_repository
            .find_doctor(tx, appointment.doctor)
            .await?;

        let patient = self
            .patients_repository
            .find_patient(tx, appointment.patient)
            .await?;

        let room = self
            .rooms_repository
            .find_room(tx, &appointment.room_name)
            .await?;

        if doctor.is_none() || patient.is_none() || room.is_none() {
            debug!(
                doctor = %appointment.doctor,
                patient = %appointment.patient,
                room = %appointment.room_name,
                "appointment references a missing doctor, patient or room"
            );

            return Err(AppointmentsServiceError::InvalidReference);
        }

        Ok(())
    }
}

#[async_trait]
impl AppointmentsService for PgAppointmentsService {
    async fn list_appointments(&self) -> Result<Vec<AppointmentRecord>, AppointmentsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let appointments = self
            .appointments_repository
            .list_appointments(&mut tx)
            .await?;

        tx.commit().await?;

        Ok(appointments)
    }

    async fn get_appointment(
        &self,
        appointment: AppointmentId,
    ) -> Result<AppointmentRecord, AppointmentsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let appointment = self
            .appointments_repository
            .find_appointment(&mut tx, appointment)
            .await?
            .ok_or(AppointmentsServiceError::NotFound)?;

        tx.commit().await?;

        Ok(appointment)
    }

    async fn admit_appointment(
        &self,
        appointment: NewAppointment,
    ) -> Result<AppointmentRecord, AppointmentsServiceError> {
        let slot = TimeSlot::new(appointment.starts_at, appointment.finishes_at)?;

        // Held until commit or rollback, so the scan below and the insert are
        // not interleaved with another admission.
        let mut tx = self.db.begin_admission_transaction().await?;

        self.ensure_references_exist(&mut tx, &appointment).await?;

        let sharing = self
            .appointments_repository
            .list_sharing_appointments(
                &mut tx,
                appointment.doctor,
                appointment.patient,
                &appointment.room_name,
            )
            .await?;

        if let Some(existing) = sharing
            .iter()
            .find(|existing| existing.conflicts_with(&appointment, &slot))
        {
            warn!(
                conflicting_appointment = %existing.id,
                "rejected appointment overlapping an existing booking"
            );

            return Err(AppointmentsServiceError::Overlap);
        }

        let id = self
            .appointments_repository
            .create_appointment(&mut tx, &appointment, slot)
            .await?;

        let admitted = self
            .appointments_repository
            .find_appointment(&mut tx, id)
            .await?
            .ok_or(AppointmentsServiceError::NotFound)?;

        tx.commit().await?;

        Ok(admitted)
    }

    async fn delete_appointment(
        &self,
        appointment: AppointmentId,
    ) -> Result<(), AppointmentsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let rows_affected = self
            .appointments_repository
            .delete_appointment(&mut tx, appointment)
            .await?;

        if rows_affected == 0 {
            return Err(AppointmentsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }

    async fn delete_appointments(&self) -> Result<(), AppointmentsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        self.appointments_repository
            .delete_appointments(&mut tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait AppointmentsService: Send + Sync {
    /// Retrieves all appointments, ordered by id.
    async fn list_appointments(&self) -> Result<Vec<AppointmentRecord>, AppointmentsServiceError>;

    /// Retrieve a single appointment.
    async fn get_appointment(
        &self,
        appointment: AppointmentId,
    ) -> Result<AppointmentRecord, AppointmentsServiceError>;

    /// Admits a candidate appointment unless it double-books its doctor,
    /// patient or room.
    async fn admit_appointment(
        &self,
        appointment: NewAppointment,
    ) -> Result<AppointmentRecord, AppointmentsServiceError>;

    /// Deletes an appointment with the given id.
    async fn delete_appointment(
        &self,
        appointment: AppointmentId,
    ) -> Result<(), AppointmentsServiceError>;

    /// Deletes every appointment.
    async fn delete_appointments(&self) -> Result<(), AppointmentsServiceError>;
}
