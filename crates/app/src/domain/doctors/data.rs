//! Doctor Data

use crate::domain::doctors::records::DoctorId;

/// Doctor Save Data
///
/// Without an id, or with an id the store does not know, a new row is
/// inserted under a freshly assigned id. A known id replaces that row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDoctor {
    pub id: Option<DoctorId>,
    pub first_name: String,
    pub last_name: String,
    pub age: u16,
    pub email: String,
}

/// Doctor Update Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoctorUpdate {
    pub first_name: String,
    pub last_name: String,
    pub age: u16,
    pub email: String,
}
