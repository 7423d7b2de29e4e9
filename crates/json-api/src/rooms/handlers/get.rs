//! Get Room Handler

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use hospital_app::domain::rooms::records::RoomRecord;

use crate::{extensions::*, rooms::errors::into_status_error};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RoomResponse {
    /// Unique room name
    pub room_name: String,
}

impl From<RoomRecord> for RoomResponse {
    fn from(room: RoomRecord) -> Self {
        RoomResponse {
            room_name: room.room_name,
        }
    }
}

/// Get Room Handler
#[endpoint(
    tags("rooms"),
    summary = "Get Room",
    responses(
        (status_code = StatusCode::OK, description = "Room found"),
        (status_code = StatusCode::NOT_FOUND, description = "Room not found"),
    ),
)]
pub(crate) async fn handler(
    room_name: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<RoomResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let room = state
        .app
        .rooms
        .get_room(room_name.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(room.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use hospital_app::domain::rooms::{MockRoomsService, RoomsServiceError};

    use crate::test_helpers::{is_json, make_room, rooms_service};

    use super::*;

    #[tokio::test]
    async fn test_get_room_success() -> TestResult {
        let mut rooms = MockRoomsService::new();

        rooms
            .expect_get_room()
            .once()
            .withf(|name| name == "Dermatology")
            .return_once(|_| Ok(make_room("Dermatology")));

        let mut res = TestClient::get("http://example.com/api/rooms/Dermatology")
            .send(&rooms_service(rooms))
            .await;

        let body: serde_json::Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(is_json(&res), "expected a JSON response");
        assert_eq!(body["roomName"], "Dermatology");

        Ok(())
    }

    #[tokio::test]
    async fn test_get_room_unknown_name_returns_404() {
        let mut rooms = MockRoomsService::new();

        rooms
            .expect_get_room()
            .once()
            .return_once(|_| Err(RoomsServiceError::NotFound));

        let res = TestClient::get("http://example.com/api/rooms/Attic")
            .send(&rooms_service(rooms))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
    }
}
