use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::core::library::LibraryResult;
use crate::lending::domain::model::LoanEntity;
use crate::members::domain::model::MemberEntity;
use crate::utils::memory::MemoryTable;

#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // create an entity
    async fn create(&self, entity: &Entity) -> LibraryResult<usize>;

    // updates an entity
    async fn update(&self, entity: &Entity) -> LibraryResult<usize>;

    // get an entity
    async fn get(&self, id: i64) -> LibraryResult<Entity>;

    // delete an entity
    async fn delete(&self, id: i64) -> LibraryResult<usize>;

    // all entities in insertion order
    async fn find_all(&self) -> LibraryResult<Vec<Entity>>;
}

// RepositoryStore holds the shared in-memory tables backing every repository.
// Cloning it clones the handles, not the rows.
#[derive(Debug, Clone, Default)]
pub struct RepositoryStore {
    pub books: MemoryTable<BookEntity>,
    pub members: MemoryTable<MemberEntity>,
    pub loans: MemoryTable<LoanEntity>,
}

impl RepositoryStore {
    pub fn new(books: Vec<BookEntity>, members: Vec<MemberEntity>, loans: Vec<LoanEntity>) -> Self {
        Self {
            books: MemoryTable::new(books),
            members: MemoryTable::new(members),
            loans: MemoryTable::new(loans),
        }
    }
}
