use chrono_tz::Tz;
use portarius_utils::create_random_secret;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Config {
    /// Secret used to sign and verify the HS256 auth tokens
    pub jwt_secret: String,
    /// Port for the application to run on
    pub port: usize,
    /// Timezone the building lives in. Reminder scheduling and the
    /// daily noon window are computed against this zone.
    pub timezone: Tz,
}

impl Config {
    pub fn new() -> Self {
        let jwt_secret = match std::env::var("JWT_SECRET") {
            Ok(secret) => secret,
            Err(_) => {
                info!("Did not find JWT_SECRET environment variable. Going to create one.");
                let secret = create_random_secret(32);
                info!("A random JWT secret was generated for this process. Tokens will not survive a restart.");
                secret
            }
        };

        let default_port = "8080";
        let port = std::env::var("PORT").unwrap_or(default_port.into());
        let port = match port.parse::<usize>() {
            Ok(port) => port,
            Err(_) => {
                warn!(
                    "The given PORT: {} is not valid, falling back to the default port: {}.",
                    port, default_port
                );
                default_port.parse::<usize>().unwrap()
            }
        };

        let default_timezone = "America/Sao_Paulo";
        let timezone = std::env::var("TIMEZONE").unwrap_or(default_timezone.into());
        let timezone = match timezone.parse::<Tz>() {
            Ok(tz) => tz,
            Err(_) => {
                warn!(
                    "The given TIMEZONE: {} is not valid, falling back to the default: {}.",
                    timezone, default_timezone
                );
                default_timezone.parse::<Tz>().unwrap()
            }
        };

        Self {
            jwt_secret,
            port,
            timezone,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
