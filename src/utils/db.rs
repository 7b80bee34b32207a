#![forbid(unsafe_code)]

use anyhow::{anyhow, Result};
use log::info;
use sqlx::{Connection, PgConnection};

use crate::utils::errors::Errors;

// ---------------------------------------------------------------------------
// connect:
// ---------------------------------------------------------------------------
/** Establish the process's single database connection.  One connection, no
 * pool, no retry; the caller decides what a failure means.  The connection
 * closes when it is dropped.
 */
pub async fn connect(url: &str) -> Result<PgConnection> {
    let conn = PgConnection::connect(url)
        .await
        .map_err(|e| anyhow!(Errors::DatabaseConnection(e.to_string())))?;
    info!("Database connection established.");
    Ok(conn)
}
