//! Room Records

/// Room Record
///
/// Rooms are keyed by name; there is no numeric id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoomRecord {
    pub room_name: String,
}
