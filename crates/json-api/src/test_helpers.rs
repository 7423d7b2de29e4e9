//! Test helpers.

use std::sync::Arc;

use jiff::civil::date;
use salvo::{affix_state::inject, http::header::CONTENT_TYPE, prelude::*};

use hospital_app::{
    context::AppContext,
    domain::{
        appointments::{
            MockAppointmentsService,
            records::{AppointmentId, AppointmentRecord},
            schedule::TimeSlot,
        },
        doctors::{
            MockDoctorsService,
            records::{DoctorId, DoctorRecord},
        },
        patients::{
            MockPatientsService,
            records::{PatientId, PatientRecord},
        },
        rooms::{MockRoomsService, records::RoomRecord},
    },
};

use crate::{router::app_router, state::State};

/// Whether the response declares a JSON body.
pub(crate) fn is_json(res: &Response) -> bool {
    res.headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/json"))
}

/// Context whose services fail the test on any call.
pub(crate) fn mocked_app() -> AppContext {
    AppContext {
        doctors: Arc::new(MockDoctorsService::new()),
        patients: Arc::new(MockPatientsService::new()),
        rooms: Arc::new(MockRoomsService::new()),
        appointments: Arc::new(MockAppointmentsService::new()),
    }
}

pub(crate) fn mocked_state() -> Arc<State> {
    State::from_app_context(mocked_app())
}

fn api_service(app: AppContext) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(State::from_app_context(app)))
            .push(app_router()),
    )
}

pub(crate) fn doctors_service(doctors: MockDoctorsService) -> Service {
    api_service(AppContext {
        doctors: Arc::new(doctors),
        ..mocked_app()
    })
}

pub(crate) fn patients_service(patients: MockPatientsService) -> Service {
    api_service(AppContext {
        patients: Arc::new(patients),
        ..mocked_app()
    })
}

pub(crate) fn rooms_service(rooms: MockRoomsService) -> Service {
    api_service(AppContext {
        rooms: Arc::new(rooms),
        ..mocked_app()
    })
}

pub(crate) fn appointments_service(appointments: MockAppointmentsService) -> Service {
    api_service(AppContext {
        appointments: Arc::new(appointments),
        ..mocked_app()
    })
}

pub(crate) fn make_doctor(id: i64) -> DoctorRecord {
    DoctorRecord {
        id: DoctorId::from_i64(id),
        first_name: "Perla".to_string(),
        last_name: "Amalia".to_string(),
        age: 24,
        email: "p.amalia@hospital.accwe".to_string(),
    }
}

pub(crate) fn make_patient(id: i64) -> PatientRecord {
    PatientRecord {
        id: PatientId::from_i64(id),
        first_name: "Jose Luis".to_string(),
        last_name: "Olaya".to_string(),
        age: 37,
        email: "j.olaya@email.com".to_string(),
    }
}

pub(crate) fn make_room(room_name: &str) -> RoomRecord {
    RoomRecord {
        room_name: room_name.to_string(),
    }
}

/// Appointment on 2026-03-01 from 09:00 to 10:00 in "Operations".
pub(crate) fn make_appointment(id: i64) -> AppointmentRecord {
    let starts_at = date(2026, 3, 1).at(9, 0, 0, 0);
    let finishes_at = date(2026, 3, 1).at(10, 0, 0, 0);

    AppointmentRecord {
        id: AppointmentId::from_i64(id),
        patient: make_patient(1),
        doctor: make_doctor(1),
        room: make_room("Operations"),
        slot: TimeSlot::new(starts_at, finishes_at).unwrap_or_else(|error| panic!("{error}")),
    }
}
