//! Delete All Rooms Handler

use salvo::prelude::*;

use crate::{extensions::*, rooms::errors::into_status_error};

/// Delete All Rooms Handler
#[endpoint(
    tags("rooms"),
    summary = "Delete All Rooms",
    responses(
        (status_code = StatusCode::OK, description = "Rooms deleted"),
        (status_code = StatusCode::CONFLICT, description = "A room has appointments"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<StatusCode, StatusError> {
    depot
        .state_or_500()?
        .app
        .rooms
        .delete_rooms()
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;

    use hospital_app::domain::rooms::{MockRoomsService, RoomsServiceError};

    use crate::test_helpers::rooms_service;

    use super::*;

    #[tokio::test]
    async fn test_delete_all_rooms_returns_200() {
        let mut rooms = MockRoomsService::new();

        rooms.expect_delete_rooms().once().return_once(|| Ok(()));

        let res = TestClient::delete("http://example.com/api/rooms")
            .send(&rooms_service(rooms))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
    }

    #[tokio::test]
    async fn test_delete_all_rooms_while_booked_returns_409() {
        let mut rooms = MockRoomsService::new();

        rooms
            .expect_delete_rooms()
            .once()
            .return_once(|| Err(RoomsServiceError::Referenced));

        let res = TestClient::delete("http://example.com/api/rooms")
            .send(&rooms_service(rooms))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));
    }
}
