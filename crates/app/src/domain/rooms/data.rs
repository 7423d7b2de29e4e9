//! Room Data

/// New Room Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRoom {
    /// Room name, unique across all rooms.
    pub room_name: String,
}
