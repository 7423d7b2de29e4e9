//! Create Room Handler

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use salvo::{
    http::{HeaderValue, header::LOCATION},
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use hospital_app::domain::rooms::data::NewRoom;

use crate::{
    extensions::*,
    rooms::{errors::into_status_error, get::RoomResponse},
};

/// Create Room Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateRoomRequest {
    pub room_name: String,
}

impl From<CreateRoomRequest> for NewRoom {
    fn from(request: CreateRoomRequest) -> Self {
        NewRoom {
            room_name: request.room_name,
        }
    }
}

/// Bytes escaped when a room name becomes a path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Path of the room resource, with the name percent-encoded.
fn room_location(room_name: &str) -> String {
    format!("/api/rooms/{}", utf8_percent_encode(room_name, PATH_SEGMENT))
}

/// Create Room Handler
#[endpoint(
    tags("rooms"),
    summary = "Create Room",
    responses(
        (status_code = StatusCode::CREATED, description = "Room created"),
        (status_code = StatusCode::CONFLICT, description = "Room already exists"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateRoomRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<RoomResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let request = json.into_inner();

    let location = HeaderValue::from_str(&room_location(&request.room_name))
        .or_500("failed to build location header")?;

    let room = state
        .app
        .rooms
        .create_room(request.into())
        .await
        .map_err(into_status_error)?;

    res.headers_mut().insert(LOCATION, location);
    res.status_code(StatusCode::CREATED);

    Ok(Json(room.into()))
}
