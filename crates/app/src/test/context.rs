//! Test context for service-level integration tests.

use crate::{
    database::Db,
    domain::{
        appointments::PgAppointmentsService, doctors::PgDoctorsService,
        patients::PgPatientsService, rooms::PgRoomsService,
    },
};

use super::db::TestDb;

pub struct TestContext {
    pub db: TestDb,
    pub doctors: PgDoctorsService,
    pub patients: PgPatientsService,
    pub rooms: PgRoomsService,
    pub appointments: PgAppointmentsService,
}

impl TestContext {
    pub async fn new() -> Self {
        let test_db = TestDb::new().await;
        let db = Db::new(test_db.pool().clone());

        Self {
            doctors: PgDoctorsService::new(db.clone()),
            patients: PgPatientsService::new(db.clone()),
            rooms: PgRoomsService::new(db.clone()),
            appointments: PgAppointmentsService::new(db),
            db: test_db,
        }
    }
}
