#![forbid(unsafe_code)]

use anyhow::{anyhow, Result};
use log::{info, LevelFilter};
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::env;

use crate::utils::errors::Errors;

// ***************************************************************************
//                                Constants
// ***************************************************************************
// Networking.  The listen address and port are fixed; the only external
// configuration this server accepts is the database url.
pub const HTTP_ADDR: &str = "0.0.0.0";
pub const HTTP_PORT: u16 = 8080;

// The database connection string, in the driver's standard URI format.
// Required, no default, passed to the driver unvalidated.
pub const ENV_DATABASE_URL: &str = "DATABASE_URL";

// For poem logging.
pub const SERVER_NAME: &str = "WelcomeServer";

// Log line layout for the console appender.
const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l} {t} - {m}{n}";

// ***************************************************************************
//                               Log Functions
// ***************************************************************************
// ---------------------------------------------------------------------------
// init_log:
// ---------------------------------------------------------------------------
/** Initialize log4rs logging with a console appender at Info level.  The
 * configuration is built in code; this server carries no config directory.
 */
pub fn init_log() {
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();
    let logconfig = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(LevelFilter::Info));
    match logconfig {
        Ok(c) => match log4rs::init_config(c) {
            Ok(_) => (),
            Err(e) => {
                let s = format!("{}", Errors::LogInitialization(e.to_string()));
                panic!("{}", s);
            }
        },
        Err(e) => {
            let s = format!("{}", Errors::LogInitialization(e.to_string()));
            panic!("{}", s);
        }
    }
    info!("Log4rs initialized with console appender.");
}

// ***************************************************************************
//                             Config Functions
// ***************************************************************************
// ---------------------------------------------------------------------------
// get_database_url:
// ---------------------------------------------------------------------------
/** Read the database connection string from the environment.  An unset
 * variable is an error; an empty or malformed value is left for the driver
 * to reject.
 */
pub fn get_database_url() -> Result<String> {
    env::var(ENV_DATABASE_URL)
        .map_err(|_| anyhow!(Errors::EnvVarNotFound(ENV_DATABASE_URL.to_string())))
}

// ***************************************************************************
//                                  Tests
// ***************************************************************************
#[cfg(test)]
mod tests {
    use std::env;

    use super::{get_database_url, ENV_DATABASE_URL, HTTP_PORT};

    // The only test that touches DATABASE_URL, so no cross-test interference.
    #[test]
    fn database_url_from_environment() {
        env::remove_var(ENV_DATABASE_URL);
        assert!(get_database_url().is_err());

        env::set_var(ENV_DATABASE_URL, "postgres://tester@localhost/welcome");
        let url = get_database_url().expect("variable was just set");
        assert_eq!(url, "postgres://tester@localhost/welcome");
        env::remove_var(ENV_DATABASE_URL);
    }

    #[test]
    fn listen_port_is_fixed() {
        assert_eq!(HTTP_PORT, 8080);
    }
}
