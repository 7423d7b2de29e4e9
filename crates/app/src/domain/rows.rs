//! Row decoding helpers shared by the repositories.

use sqlx::{Row, postgres::PgRow};

/// Decode an `INTEGER` age column, rejecting values outside `u16`.
pub(crate) fn try_get_age(row: &PgRow, col: &str) -> Result<u16, sqlx::Error> {
    let age_i32: i32 = row.try_get(col)?;

    u16::try_from(age_i32).map_err(|e| sqlx::Error::ColumnDecode {
        index: col.to_string(),
        source: Box::new(e),
    })
}
