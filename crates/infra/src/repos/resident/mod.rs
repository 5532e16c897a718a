mod inmemory;
mod postgres;

pub use inmemory::InMemoryResidentRepo;
pub use postgres::PostgresResidentRepo;

use portarius_domain::{Resident, ID};

#[async_trait::async_trait]
pub trait IResidentRepo: Send + Sync {
    async fn insert(&self, resident: &Resident) -> anyhow::Result<()>;
    async fn save(&self, resident: &Resident) -> anyhow::Result<()>;
    async fn find(&self, resident_id: &ID) -> Option<Resident>;
    async fn find_all(&self) -> anyhow::Result<Vec<Resident>>;
    async fn delete(&self, resident_id: &ID) -> Option<Resident>;
}
