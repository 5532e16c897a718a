mod inventory;
mod package;
mod reminder;
mod reservation;
mod resident;
mod shared;
mod user;

use inventory::{InMemoryInventoryRepo, PostgresInventoryRepo};
use package::{InMemoryPackageRepo, PostgresPackageRepo};
use reminder::{InMemoryReminderRepo, PostgresReminderRepo};
use reservation::{InMemoryReservationRepo, PostgresReservationRepo};
use resident::{InMemoryResidentRepo, PostgresResidentRepo};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing::info;
use user::{InMemoryUserRepo, PostgresUserRepo};

pub use inventory::IInventoryRepo;
pub use package::IPackageRepo;
pub use reminder::IReminderRepo;
pub use reservation::IReservationRepo;
pub use resident::IResidentRepo;
pub use user::IUserRepo;

#[derive(Clone)]
pub struct Repos {
    pub residents: Arc<dyn IResidentRepo>,
    pub users: Arc<dyn IUserRepo>,
    pub packages: Arc<dyn IPackageRepo>,
    pub reservations: Arc<dyn IReservationRepo>,
    pub inventory: Arc<dyn IInventoryRepo>,
    pub reminders: Arc<dyn IReminderRepo>,
}

impl Repos {
    pub async fn create_postgres(connection_string: &str) -> anyhow::Result<Self> {
        info!("DB CHECKING CONNECTION ...");
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(connection_string)
            .await?;
        info!("DB CHECKING CONNECTION ... [done]");

        Ok(Self {
            residents: Arc::new(PostgresResidentRepo::new(pool.clone())),
            users: Arc::new(PostgresUserRepo::new(pool.clone())),
            packages: Arc::new(PostgresPackageRepo::new(pool.clone())),
            reservations: Arc::new(PostgresReservationRepo::new(pool.clone())),
            inventory: Arc::new(PostgresInventoryRepo::new(pool.clone())),
            reminders: Arc::new(PostgresReminderRepo::new(pool)),
        })
    }

    pub fn create_inmemory() -> Self {
        Self {
            residents: Arc::new(InMemoryResidentRepo::new()),
            users: Arc::new(InMemoryUserRepo::new()),
            packages: Arc::new(InMemoryPackageRepo::new()),
            reservations: Arc::new(InMemoryReservationRepo::new()),
            inventory: Arc::new(InMemoryInventoryRepo::new()),
            reminders: Arc::new(InMemoryReminderRepo::new()),
        }
    }
}
