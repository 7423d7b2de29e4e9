//! Rooms service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::rooms::{
        data::NewRoom, errors::RoomsServiceError, records::RoomRecord,
        repository::PgRoomsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgRoomsService {
    db: Db,
    repository: PgRoomsRepository,
}

impl PgRoomsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgRoomsRepository::new(),
        }
    }
}

#[async_trait]
impl RoomsService for PgRoomsService {
    async fn list_rooms(&self) -> Result<Vec<RoomRecord>, RoomsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let rooms = self.repository.list_rooms(&mut tx).await?;

        tx.commit().await?;

        Ok(rooms)
    }

    async fn get_room(&self, room_name: String) -> Result<RoomRecord, RoomsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let room = self
            .repository
            .find_room(&mut tx, &room_name)
            .await?
            .ok_or(RoomsServiceError::NotFound)?;

        tx.commit().await?;

        Ok(room)
    }

    async fn create_room(&self, room: NewRoom) -> Result<RoomRecord, RoomsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let created = self.repository.create_room(&mut tx, room).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn delete_room(&self, room_name: String) -> Result<(), RoomsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let rows_affected = self.repository.delete_room(&mut tx, &room_name).await?;

        if rows_affected == 0 {
            return Err(RoomsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }

    async fn delete_rooms(&self) -> Result<(), RoomsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        self.repository.delete_rooms(&mut tx).await?;

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait RoomsService: Send + Sync {
    /// Retrieves all rooms, ordered by name.
    async fn list_rooms(&self) -> Result<Vec<RoomRecord>, RoomsServiceError>;

    /// Retrieve a single room by name.
    async fn get_room(&self, room_name: String) -> Result<RoomRecord, RoomsServiceError>;

    /// Creates a room; names are unique.
    async fn create_room(&self, room: NewRoom) -> Result<RoomRecord, RoomsServiceError>;

    /// Deletes the room with the given name.
    async fn delete_room(&self, room_name: String) -> Result<(), RoomsServiceError>;

    /// Deletes every room.
    async fn delete_rooms(&self) -> Result<(), RoomsServiceError>;
}
