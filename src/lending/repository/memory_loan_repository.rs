use async_trait::async_trait;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;
use crate::lending::domain::model::LoanEntity;
use crate::lending::repository::LoanRepository;
use crate::utils::memory::MemoryTable;

const KIND: &str = "loan for book";

#[derive(Debug, Clone)]
pub struct MemoryLoanRepository {
    table: MemoryTable<LoanEntity>,
}

impl MemoryLoanRepository {
    pub(crate) fn new(table: MemoryTable<LoanEntity>) -> Self {
        Self {
            table,
        }
    }
}

#[async_trait]
impl Repository<LoanEntity> for MemoryLoanRepository {
    async fn create(&self, entity: &LoanEntity) -> LibraryResult<usize> {
        self.table.insert(entity, KIND).await
    }

    async fn update(&self, entity: &LoanEntity) -> LibraryResult<usize> {
        self.table.replace(entity, KIND).await
    }

    async fn get(&self, id: i64) -> LibraryResult<LoanEntity> {
        self.table.get(id, KIND).await
    }

    async fn delete(&self, id: i64) -> LibraryResult<usize> {
        self.table.remove(id, KIND).await
    }

    async fn find_all(&self) -> LibraryResult<Vec<LoanEntity>> {
        Ok(self.table.snapshot().await)
    }
}

impl LoanRepository for MemoryLoanRepository {}
