use super::IPackageRepo;
use crate::repos::shared::inmemory_repo::*;
use portarius_domain::{Package, ID};

pub struct InMemoryPackageRepo {
    packages: std::sync::Mutex<Vec<Package>>,
}

impl InMemoryPackageRepo {
    pub fn new() -> Self {
        Self {
            packages: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IPackageRepo for InMemoryPackageRepo {
    async fn insert(&self, package: &Package) -> anyhow::Result<()> {
        insert(package, &self.packages);
        Ok(())
    }

    async fn save(&self, package: &Package) -> anyhow::Result<()> {
        save(package, &self.packages);
        Ok(())
    }

    async fn find(&self, package_id: &ID) -> Option<Package> {
        find(package_id, &self.packages)
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Package>> {
        Ok(find_all(&self.packages))
    }

    async fn delete(&self, package_id: &ID) -> Option<Package> {
        delete(package_id, &self.packages)
    }
}
