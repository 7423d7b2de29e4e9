//! Rooms Repository

use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::rooms::{data::NewRoom, records::RoomRecord};

const LIST_ROOMS_SQL: &str = include_str!("sql/list_rooms.sql");
const GET_ROOM_SQL: &str = include_str!("sql/get_room.sql");
const CREATE_ROOM_SQL: &str = include_str!("sql/create_room.sql");
const DELETE_ROOM_SQL: &str = include_str!("sql/delete_room.sql");
const DELETE_ROOMS_SQL: &str = include_str!("sql/delete_rooms.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgRoomsRepository;

impl PgRoomsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_rooms(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<RoomRecord>, sqlx::Error> {
        query_as::<Postgres, RoomRecord>(LIST_ROOMS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn find_room(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        room_name: &str,
    ) -> Result<Option<RoomRecord>, sqlx::Error> {
        query_as::<Postgres, RoomRecord>(GET_ROOM_SQL)
            .bind(room_name)
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn create_room(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        room: NewRoom,
    ) -> Result<RoomRecord, sqlx::Error> {
        query_as::<Postgres, RoomRecord>(CREATE_ROOM_SQL)
            .bind(room.room_name)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_room(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        room_name: &str,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_ROOM_SQL)
            .bind(room_name)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn delete_rooms(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_ROOMS_SQL)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for RoomRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            room_name: row.try_get("room_name")?,
        })
    }
}
