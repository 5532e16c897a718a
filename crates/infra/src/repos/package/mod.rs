mod inmemory;
mod postgres;

pub use inmemory::InMemoryPackageRepo;
pub use postgres::PostgresPackageRepo;

use portarius_domain::{Package, ID};

#[async_trait::async_trait]
pub trait IPackageRepo: Send + Sync {
    async fn insert(&self, package: &Package) -> anyhow::Result<()>;
    async fn save(&self, package: &Package) -> anyhow::Result<()>;
    async fn find(&self, package_id: &ID) -> Option<Package>;
    async fn find_all(&self) -> anyhow::Result<Vec<Package>>;
    async fn delete(&self, package_id: &ID) -> Option<Package>;
}
