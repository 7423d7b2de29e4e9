//! Doctors Repository

use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::{
    doctors::{
        data::{DoctorUpdate, NewDoctor},
        records::{DoctorId, DoctorRecord},
    },
    rows::try_get_age,
};

const LIST_DOCTORS_SQL: &str = include_str!("sql/list_doctors.sql");
const GET_DOCTOR_SQL: &str = include_str!("sql/get_doctor.sql");
const SAVE_DOCTOR_SQL: &str = include_str!("sql/save_doctor.sql");
const UPDATE_DOCTOR_SQL: &str = include_str!("sql/update_doctor.sql");
const DELETE_DOCTOR_SQL: &str = include_str!("sql/delete_doctor.sql");
const DELETE_DOCTORS_SQL: &str = include_str!("sql/delete_doctors.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgDoctorsRepository;

impl PgDoctorsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_doctors(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<DoctorRecord>, sqlx::Error> {
        query_as::<Postgres, DoctorRecord>(LIST_DOCTORS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn find_doctor(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        doctor: DoctorId,
    ) -> Result<Option<DoctorRecord>, sqlx::Error> {
        query_as::<Postgres, DoctorRecord>(GET_DOCTOR_SQL)
            .bind(doctor.into_i64())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn save_doctor(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        doctor: NewDoctor,
    ) -> Result<DoctorRecord, sqlx::Error> {
        query_as::<Postgres, DoctorRecord>(SAVE_DOCTOR_SQL)
            .bind(doctor.id.map(DoctorId::into_i64))
            .bind(doctor.first_name)
            .bind(doctor.last_name)
            .bind(i32::from(doctor.age))
            .bind(doctor.email)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_doctor(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        doctor: DoctorId,
        update: DoctorUpdate,
    ) -> Result<Option<DoctorRecord>, sqlx::Error> {
        query_as::<Postgres, DoctorRecord>(UPDATE_DOCTOR_SQL)
            .bind(doctor.into_i64())
            .bind(update.first_name)
            .bind(update.last_name)
            .bind(i32::from(update.age))
            .bind(update.email)
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn delete_doctor(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        doctor: DoctorId,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_DOCTOR_SQL)
            .bind(doctor.into_i64())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn delete_doctors(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_DOCTORS_SQL)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for DoctorRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: DoctorId::from_i64(row.try_get("id")?),
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            age: try_get_age(row, "age")?,
            email: row.try_get("email")?,
        })
    }
}
