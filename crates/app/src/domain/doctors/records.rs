//! Doctor Records

use crate::ids::TypedId;

/// Doctor Id
pub type DoctorId = TypedId<DoctorRecord>;

/// Doctor Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoctorRecord {
    pub id: DoctorId,
    pub first_name: String,
    pub last_name: String,
    pub age: u16,
    pub email: String,
}
