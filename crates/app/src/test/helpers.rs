//! Test Helpers

use jiff::civil::{DateTime, date};
use testresult::TestResult;

use crate::{
    domain::{
        appointments::data::NewAppointment,
        doctors::{DoctorsService, data::NewDoctor, records::DoctorId},
        patients::{PatientsService, data::NewPatient, records::PatientId},
        rooms::{RoomsService, data::NewRoom},
    },
    test::TestContext,
};

pub(crate) fn new_doctor(first_name: &str, last_name: &str, age: u16, email: &str) -> NewDoctor {
    NewDoctor {
        id: None,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        age,
        email: email.to_string(),
    }
}

pub(crate) fn new_patient(first_name: &str, last_name: &str, age: u16, email: &str) -> NewPatient {
    NewPatient {
        id: None,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        age,
        email: email.to_string(),
    }
}

pub(crate) fn new_room(room_name: &str) -> NewRoom {
    NewRoom {
        room_name: room_name.to_string(),
    }
}

/// 2026-03-02 09:00, the start of the slots used across appointment tests.
pub(crate) fn nine_am() -> DateTime {
    date(2026, 3, 2).at(9, 0, 0, 0)
}

pub(crate) fn appointment(
    doctor: DoctorId,
    patient: PatientId,
    room_name: &str,
    starts_at: DateTime,
    finishes_at: DateTime,
) -> NewAppointment {
    NewAppointment {
        patient,
        doctor,
        room_name: room_name.to_string(),
        starts_at,
        finishes_at,
    }
}

/// A stored doctor, patient and room that appointments can be booked against.
pub(crate) struct Booking {
    pub doctor: DoctorId,
    pub patient: PatientId,
    pub room_name: String,
}

impl Booking {
    pub(crate) async fn seed(ctx: &TestContext) -> TestResult<Self> {
        let doctor = ctx
            .doctors
            .save_doctor(new_doctor("Juan", "Carlos", 34, "j.carlos@hospital.accwe"))
            .await?;

        let patient = ctx
            .patients
            .save_patient(new_patient("Clarisa", "Julia", 29, "c.julia@hospital.accwe"))
            .await?;

        let room = ctx.rooms.create_room(new_room("Operations")).await?;

        Ok(Self {
            doctor: doctor.id,
            patient: patient.id,
            room_name: room.room_name,
        })
    }

    pub(crate) fn at(&self, starts_at: DateTime, finishes_at: DateTime) -> NewAppointment {
        appointment(
            self.doctor,
            self.patient,
            &self.room_name,
            starts_at,
            finishes_at,
        )
    }
}
