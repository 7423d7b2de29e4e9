//! Database connection management

use sqlx::{PgPool, Postgres, Transaction, migrate::MigrateError, query};

/// Storage error carried by the `Sql` variant of every service error.
pub use sqlx::Error as SqlError;

/// SQL used to serialize appointment admissions against each other.
///
/// `SHARE ROW EXCLUSIVE` conflicts with itself and with plain row writes, so a
/// second admission waits until the first one has committed its insert.
pub const LOCK_APPOINTMENTS_SQL: &str = "LOCK TABLE appointments IN SHARE ROW EXCLUSIVE MODE";

#[derive(Debug, Clone)]
pub struct Db {
    pool: PgPool,
}

impl Db {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Begin a transaction scoped to a single service operation.
    ///
    /// # Errors
    ///
    /// Returns an error when the transaction cannot be started.
    pub async fn begin_transaction(&self) -> Result<Transaction<'static, Postgres>, sqlx::Error> {
        self.pool.begin().await
    }

    /// Begin a transaction holding the appointment admission lock.
    ///
    /// # Errors
    ///
    /// Returns an error when starting the transaction or taking the lock fails.
    pub async fn begin_admission_transaction(
        &self,
    ) -> Result<Transaction<'static, Postgres>, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        query(LOCK_APPOINTMENTS_SQL).execute(&mut *tx).await?;

        Ok(tx)
    }
}

/// Connect to `PostgreSQL`.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPool::connect(database_url).await
}

/// Apply the bundled schema migrations.
///
/// # Errors
///
/// Returns an error if any migration fails to apply.
pub async fn migrate(pool: &PgPool) -> Result<(), MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await
}
