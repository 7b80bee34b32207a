#![forbid(unsafe_code)]

use poem::error::MethodNotAllowedError;
use poem::http::StatusCode;
use poem::{get, handler, Endpoint, EndpointExt, Route};
use sqlx::PgConnection;

// The one and only response body this server produces.
const WELCOME_BODY: &str = "Welcome!\n";

// ***************************************************************************
//                                 Server
// ***************************************************************************
/** The server owns the process's single database connection and wires up the
 * route table.  No handler reads the connection yet; it is held open for the
 * life of the process and closed when the server is dropped.
 */
pub struct Server {
    #[allow(dead_code)]
    db: PgConnection,
}

impl Server {
    pub fn new(db: PgConnection) -> Self {
        Server { db }
    }

    /** Build the route table.  Exact-path matching only: anything other than
     * GET / falls through to a 404.
     */
    pub fn routes(&self) -> impl Endpoint {
        app()
    }
}

// ---------------------------------------------------------------------------
// app:
// ---------------------------------------------------------------------------
// Poem answers 405 when a registered path is hit with an unregistered method;
// this server reports every unmatched request as 404.
fn app() -> impl Endpoint {
    Route::new()
        .at("/", get(index))
        .catch_error(|_: MethodNotAllowedError| async move { StatusCode::NOT_FOUND })
}

// ---------------------------------------------------------------------------
// index endpoint:
// ---------------------------------------------------------------------------
/** GET / returns a fixed greeting.  The request is ignored entirely and the
 * handler cannot fail.
 */
#[handler]
fn index() -> &'static str {
    WELCOME_BODY
}

// ***************************************************************************
//                                  Tests
// ***************************************************************************
#[cfg(test)]
mod tests {
    use poem::http::StatusCode;
    use poem::test::TestClient;

    use super::app;

    #[tokio::test]
    async fn index_returns_welcome() {
        let cli = TestClient::new(app());
        let resp = cli.get("/").send().await;
        resp.assert_status_is_ok();
        resp.assert_text("Welcome!\n").await;
    }

    #[tokio::test]
    async fn unknown_path_is_not_found() {
        let cli = TestClient::new(app());
        let resp = cli.get("/missing").send().await;
        resp.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn unregistered_method_is_not_found() {
        let cli = TestClient::new(app());
        let resp = cli.post("/").send().await;
        resp.assert_status(StatusCode::NOT_FOUND);
    }
}
