use async_trait::async_trait;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;
use crate::members::domain::model::MemberEntity;
use crate::members::repository::MemberRepository;
use crate::utils::memory::MemoryTable;

const KIND: &str = "member";

#[derive(Debug, Clone)]
pub struct MemoryMemberRepository {
    table: MemoryTable<MemberEntity>,
}

impl MemoryMemberRepository {
    pub(crate) fn new(table: MemoryTable<MemberEntity>) -> Self {
        Self {
            table,
        }
    }
}

#[async_trait]
impl Repository<MemberEntity> for MemoryMemberRepository {
    async fn create(&self, entity: &MemberEntity) -> LibraryResult<usize> {
        self.table.insert(entity, KIND).await
    }

    async fn update(&self, entity: &MemberEntity) -> LibraryResult<usize> {
        self.table.replace(entity, KIND).await
    }

    async fn get(&self, id: i64) -> LibraryResult<MemberEntity> {
        self.table.get(id, KIND).await
    }

    async fn delete(&self, id: i64) -> LibraryResult<usize> {
        self.table.remove(id, KIND).await
    }

    async fn find_all(&self) -> LibraryResult<Vec<MemberEntity>> {
        Ok(self.table.snapshot().await)
    }
}

impl MemberRepository for MemoryMemberRepository {}
