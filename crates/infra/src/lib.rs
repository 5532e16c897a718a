mod bus;
mod config;
mod repos;
mod services;
mod system;

pub use bus::{EventBus, EventListener};
pub use config::Config;
pub use repos::{
    IInventoryRepo, IPackageRepo, IReminderRepo, IReservationRepo, IResidentRepo, IUserRepo, Repos,
};
pub use services::{
    HolidayApiClient, INotifier, InMemoryNotifier, NotifierCall, WhatsAppNotifier,
};
use sqlx::migrate::MigrateError;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
pub use system::ISys;
use system::RealSys;

#[derive(Clone)]
pub struct PortariusContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    pub bus: Arc<EventBus>,
    pub notifier: Arc<dyn INotifier>,
}

struct ContextParams {
    pub postgres_connection_string: String,
}

impl PortariusContext {
    async fn create(params: ContextParams) -> Self {
        let repos = Repos::create_postgres(&params.postgres_connection_string)
            .await
            .expect("Postgres credentials must be set and valid");
        Self {
            repos,
            config: Config::new(),
            sys: Arc::new(RealSys {}),
            bus: Arc::new(EventBus::new()),
            notifier: Arc::new(WhatsAppNotifier::from_env()),
        }
    }

    pub fn create_inmemory() -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config: Config::new(),
            sys: Arc::new(RealSys {}),
            bus: Arc::new(EventBus::new()),
            notifier: Arc::new(InMemoryNotifier::new()),
        }
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> PortariusContext {
    PortariusContext::create(ContextParams {
        postgres_connection_string: get_psql_connection_string(),
    })
    .await
}

/// Context backed by in-memory repositories and a recording notifier,
/// for tests.
pub fn setup_context_inmemory() -> PortariusContext {
    PortariusContext::create_inmemory()
}

fn get_psql_connection_string() -> String {
    const PSQL_CONNECTION_STRING: &str = "DATABASE_URL";

    std::env::var(PSQL_CONNECTION_STRING)
        .unwrap_or_else(|_| panic!("{} env var to be present.", PSQL_CONNECTION_STRING))
}

pub async fn run_migration() -> Result<(), MigrateError> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&get_psql_connection_string())
        .await
        .expect("TO CONNECT TO POSTGRES");

    sqlx::migrate!().run(&pool).await
}
