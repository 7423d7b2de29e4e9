//! Patients Repository

use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::{
    patients::{
        data::{NewPatient, PatientUpdate},
        records::{PatientId, PatientRecord},
    },
    rows::try_get_age,
};

const LIST_PATIENTS_SQL: &str = include_str!("sql/list_patients.sql");
const GET_PATIENT_SQL: &str = include_str!("sql/get_patient.sql");
const SAVE_PATIENT_SQL: &str = include_str!("sql/save_patient.sql");
const UPDATE_PATIENT_SQL: &str = include_str!("sql/update_patient.sql");
const DELETE_PATIENT_SQL: &str = include_str!("sql/delete_patient.sql");
const DELETE_PATIENTS_SQL: &str = include_str!("sql/delete_patients.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgPatientsRepository;

impl PgPatientsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_patients(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<PatientRecord>, sqlx::Error> {
        query_as::<Postgres, PatientRecord>(LIST_PATIENTS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn find_patient(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        patient: PatientId,
    ) -> Result<Option<PatientRecord>, sqlx::Error> {
        query_as::<Postgres, PatientRecord>(GET_PATIENT_SQL)
            .bind(patient.into_i64())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn save_patient(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        patient: NewPatient,
    ) -> Result<PatientRecord, sqlx::Error> {
        query_as::<Postgres, PatientRecord>(SAVE_PATIENT_SQL)
            .bind(patient.id.map(PatientId::into_i64))
            .bind(patient.first_name)
            .bind(patient.last_name)
            .bind(i32::from(patient.age))
            .bind(patient.email)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_patient(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        patient: PatientId,
        update: PatientUpdate,
    ) -> Result<Option<PatientRecord>, sqlx::Error> {
        query_as::<Postgres, PatientRecord>(UPDATE_PATIENT_SQL)
            .bind(patient.into_i64())
            .bind(update.first_name)
            .bind(update.last_name)
            .bind(i32::from(update.age))
            .bind(update.email)
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn delete_patient(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        patient: PatientId,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_PATIENT_SQL)
            .bind(patient.into_i64())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn delete_patients(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_PATIENTS_SQL)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for PatientRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: PatientId::from_i64(row.try_get("id")?),
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            age: try_get_age(row, "age")?,
            email: row.try_get("email")?,
        })
    }
}
