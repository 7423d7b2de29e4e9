//! Patient Records

use crate::ids::TypedId;

/// Patient Id
pub type PatientId = TypedId<PatientRecord>;

/// Patient Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientRecord {
    pub id: PatientId,
    pub first_name: String,
    pub last_name: String,
    pub age: u16,
    pub email: String,
}
