//! Appointments Repository

use jiff_sqlx::DateTime as SqlxDateTime;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar};

use crate::domain::{
    appointments::{
        data::NewAppointment,
        records::{AppointmentId, AppointmentRecord},
        schedule::TimeSlot,
    },
    doctors::records::{DoctorId, DoctorRecord},
    patients::records::{PatientId, PatientRecord},
    rooms::records::RoomRecord,
    rows::try_get_age,
};

const LIST_APPOINTMENTS_SQL: &str = include_str!("sql/list_appointments.sql");
const LIST_SHARING_APPOINTMENTS_SQL: &str = include_str!("sql/list_sharing_appointments.sql");
const GET_APPOINTMENT_SQL: &str = include_str!("sql/get_appointment.sql");
const CREATE_APPOINTMENT_SQL: &str = include_str!("sql/create_appointment.sql");
const DELETE_APPOINTMENT_SQL: &str = include_str!("sql/delete_appointment.sql");
const DELETE_APPOINTMENTS_SQL: &str = include_str!("sql/delete_appointments.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgAppointmentsRepository;

impl PgAppointmentsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_appointments(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<AppointmentRecord>, sqlx::Error> {
        query_as::<Postgres, AppointmentRecord>(LIST_APPOINTMENTS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    /// Appointments booking any of the given doctor, patient or room.
    pub(crate) async fn list_sharing_appointments(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        doctor: DoctorId,
        patient: PatientId,
        room_name: &str,
    ) -> Result<Vec<AppointmentRecord>, sqlx::Error> {
        query_as::<Postgres, AppointmentRecord>(LIST_SHARING_APPOINTMENTS_SQL)
            .bind(doctor.into_i64())
            .bind(patient.into_i64())
            .bind(room_name)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn find_appointment(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        appointment: AppointmentId,
    ) -> Result<Option<AppointmentRecord>, sqlx::Error> {
        query_as::<Postgres, AppointmentRecord>(GET_APPOINTMENT_SQL)
            .bind(appointment.into_i64())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn create_appointment(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        appointment: &NewAppointment,
        slot: TimeSlot,
    ) -> Result<AppointmentId, sqlx::Error> {
        let id: i64 = query_scalar(CREATE_APPOINTMENT_SQL)
            .bind(appointment.patient.into_i64())
            .bind(appointment.doctor.into_i64())
            .bind(&appointment.room_name)
            .bind(SqlxDateTime::from(slot.starts_at()))
            .bind(SqlxDateTime::from(slot.finishes_at()))
            .fetch_one(&mut **tx)
            .await?;

        Ok(AppointmentId::from_i64(id))
    }

    pub(crate) async fn delete_appointment(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        appointment: AppointmentId,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_APPOINTMENT_SQL)
            .bind(appointment.into_i64())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn delete_appointments(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_APPOINTMENTS_SQL)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for AppointmentRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let starts_at = row.try_get::<SqlxDateTime, _>("starts_at")?.to_jiff();
        let finishes_at = row.try_get::<SqlxDateTime, _>("finishes_at")?.to_jiff();

        let slot = TimeSlot::new(starts_at, finishes_at).map_err(|e| sqlx::Error::ColumnDecode {
            index: "finishes_at".to_string(),
            source: Box::new(e),
        })?;

        Ok(Self {
            id: AppointmentId::from_i64(row.try_get("id")?),
            patient: PatientRecord {
                id: PatientId::from_i64(row.try_get("patient_id")?),
                first_name: row.try_get("patient_first_name")?,
                last_name: row.try_get("patient_last_name")?,
                age: try_get_age(row, "patient_age")?,
                email: row.try_get("patient_email")?,
            },
            doctor: DoctorRecord {
                id: DoctorId::from_i64(row.try_get("doctor_id")?),
                first_name: row.try_get("doctor_first_name")?,
                last_name: row.try_get("doctor_last_name")?,
                age: try_get_age(row, "doctor_age")?,
                email: row.try_get("doctor_email")?,
            },
            room: RoomRecord {
                room_name: row.try_get("room_name")?,
            },
            slot,
        })
    }
}
