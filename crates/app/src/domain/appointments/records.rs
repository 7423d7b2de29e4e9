//! Appointment Records

use crate::{
    domain::{
        appointments::{data::NewAppointment, schedule::TimeSlot},
        doctors::records::DoctorRecord,
        patients::records::PatientRecord,
        rooms::records::RoomRecord,
    },
    ids::TypedId,
};

/// Appointment Id
pub type AppointmentId = TypedId<AppointmentRecord>;

/// Appointment Record, with its doctor, patient and room dereferenced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentRecord {
    pub id: AppointmentId,
    pub patient: PatientRecord,
    pub doctor: DoctorRecord,
    pub room: RoomRecord,
    pub slot: TimeSlot,
}

impl AppointmentRecord {
    /// Whether this appointment books the same doctor, patient or room.
    #[must_use]
    pub fn shares_resource_with(&self, candidate: &NewAppointment) -> bool {
        self.doctor.id == candidate.doctor
            || self.patient.id == candidate.patient
            || self.room.room_name == candidate.room_name
    }

    /// Whether admitting `candidate` in `slot` would double-book a resource.
    #[must_use]
    pub fn conflicts_with(&self, candidate: &NewAppointment, slot: &TimeSlot) -> bool {
        self.shares_resource_with(candidate) && self.slot.overlaps(slot)
    }
}
