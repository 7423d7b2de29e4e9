//! Appointment Data

use jiff::civil::DateTime;

use crate::domain::{doctors::records::DoctorId, patients::records::PatientId};

/// Candidate appointment submitted for admission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAppointment {
    pub patient: PatientId,
    pub doctor: DoctorId,
    pub room_name: String,
    pub starts_at: DateTime,
    pub finishes_at: DateTime,
}
