#![forbid(unsafe_code)]

use anyhow::Result;
use log::{error, info};
use poem::listener::TcpListener;
use sqlx::PgConnection;

use crate::server::Server;
use crate::utils::config::{self, SERVER_NAME};
use crate::utils::db;
use crate::utils::errors::Errors;

// Modules
mod server;
mod utils;

// ---------------------------------------------------------------------------
// main:
// ---------------------------------------------------------------------------
#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    // Announce ourselves.
    println!("Starting welcome_server!");

    // Configure our log.
    config::init_log();

    // Connect to the database or die trying.  The connection must be open
    // before any listener is bound; there are no retries.
    let conn = match init_db().await {
        Ok(conn) => conn,
        Err(e) => {
            eprintln!("Unable to connect to database: {:#}", e);
            std::process::exit(1);
        }
    };

    // The server owns the connection for the life of the process; it is
    // released when main returns.
    let server = Server::new(conn);
    let app = server.routes();

    // Create the routes and run the server.
    let addr = format!("{}:{}", config::HTTP_ADDR, config::HTTP_PORT);
    info!("Listening for HTTP requests at {}.", addr);
    let result = poem::Server::new(TcpListener::bind(addr))
        .name(SERVER_NAME)
        .run(app)
        .await;

    // The only way out of the main loop is a listener failure.
    if let Err(ref e) = result {
        error!("{}", Errors::ListenerFailure(e.to_string()));
    }
    result
}

// ---------------------------------------------------------------------------
// init_db:
// ---------------------------------------------------------------------------
/** Read the database url from the environment and establish the process's
 * single connection.  All failures are returned to main, which decides
 * whether to exit; no component below main terminates the process.
 */
async fn init_db() -> Result<PgConnection> {
    let url = config::get_database_url()?;
    db::connect(&url).await
}
