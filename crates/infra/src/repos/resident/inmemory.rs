use super::IResidentRepo;
use crate::repos::shared::inmemory_repo::*;
use portarius_domain::{Resident, ID};

pub struct InMemoryResidentRepo {
    residents: std::sync::Mutex<Vec<Resident>>,
}

impl InMemoryResidentRepo {
    pub fn new() -> Self {
        Self {
            residents: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IResidentRepo for InMemoryResidentRepo {
    async fn insert(&self, resident: &Resident) -> anyhow::Result<()> {
        insert(resident, &self.residents);
        Ok(())
    }

    async fn save(&self, resident: &Resident) -> anyhow::Result<()> {
        save(resident, &self.residents);
        Ok(())
    }

    async fn find(&self, resident_id: &ID) -> Option<Resident> {
        find(resident_id, &self.residents)
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Resident>> {
        Ok(find_all(&self.residents))
    }

    async fn delete(&self, resident_id: &ID) -> Option<Resident> {
        delete(resident_id, &self.residents)
    }
}
