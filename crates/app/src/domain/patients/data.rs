//! Patient Data

use crate::domain::patients::records::PatientId;

/// Patient Save Data
///
/// Without an id, or with an id the store does not know, a new row is
/// inserted under a freshly assigned id. A known id replaces that row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPatient {
    pub id: Option<PatientId>,
    pub first_name: String,
    pub last_name: String,
    pub age: u16,
    pub email: String,
}

/// Patient Update Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientUpdate {
    pub first_name: String,
    pub last_name: String,
    pub age: u16,
    pub email: String,
}
