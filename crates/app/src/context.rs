//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    database::{self, Db},
    domain::{
        appointments::{AppointmentsService, PgAppointmentsService},
        doctors::{DoctorsService, PgDoctorsService},
        patients::{PatientsService, PgPatientsService},
        rooms::{PgRoomsService, RoomsService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub doctors: Arc<dyn DoctorsService>,
    pub patients: Arc<dyn PatientsService>,
    pub rooms: Arc<dyn RoomsService>,
    pub appointments: Arc<dyn AppointmentsService>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(url: &str) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        Ok(Self::from_db(&Db::new(pool)))
    }

    /// Build application context sharing one database handle across services.
    #[must_use]
    pub fn from_db(db: &Db) -> Self {
        Self {
            doctors: Arc::new(PgDoctorsService::new(db.clone())),
            patients: Arc::new(PgPatientsService::new(db.clone())),
            rooms: Arc::new(PgRoomsService::new(db.clone())),
            appointments: Arc::new(PgAppointmentsService::new(db.clone())),
        }
    }
}
