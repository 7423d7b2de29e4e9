//! Room Index Handler

use salvo::prelude::*;

use crate::{
    extensions::*,
    rooms::{errors::into_status_error, get::RoomResponse},
};

/// Room Index Handler
#[endpoint(tags("rooms"), summary = "List Rooms")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<RoomResponse>>, StatusError> {
    let state = depot.state_or_500()?;

    let rooms = state
        .app
        .rooms
        .list_rooms()
        .await
        .map_err(into_status_error)?;

    Ok(Json(rooms.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use hospital_app::domain::rooms::MockRoomsService;

    use crate::test_helpers::{is_json, make_room, rooms_service};

    use super::*;

    #[tokio::test]
    async fn test_index_returns_rooms() -> TestResult {
        let mut rooms = MockRoomsService::new();

        rooms
            .expect_list_rooms()
            .once()
            .return_once(|| Ok(vec![make_room("Dermatology"), make_room("Operations")]));

        let mut res = TestClient::get("http://example.com/api/rooms")
            .send(&rooms_service(rooms))
            .await;

        let body: Vec<RoomResponse> = res.take_json().await?;
        let names: Vec<&str> = body.iter().map(|room| room.room_name.as_str()).collect();

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(is_json(&res), "expected a JSON response");
        assert_eq!(names, vec!["Dermatology", "Operations"]);

        Ok(())
    }
}
