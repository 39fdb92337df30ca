use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;
use crate::utils::memory::MemoryTable;

const KIND: &str = "book";

#[derive(Debug, Clone)]
pub struct MemoryBookRepository {
    table: MemoryTable<BookEntity>,
}

impl MemoryBookRepository {
    pub(crate) fn new(table: MemoryTable<BookEntity>) -> Self {
        Self {
            table,
        }
    }
}

#[async_trait]
impl Repository<BookEntity> for MemoryBookRepository {
    async fn create(&self, entity: &BookEntity) -> LibraryResult<usize> {
        self.table.insert(entity, KIND).await
    }

    async fn update(&self, entity: &BookEntity) -> LibraryResult<usize> {
        self.table.replace(entity, KIND).await
    }

    async fn get(&self, id: i64) -> LibraryResult<BookEntity> {
        self.table.get(id, KIND).await
    }

    async fn delete(&self, id: i64) -> LibraryResult<usize> {
        self.table.remove(id, KIND).await
    }

    async fn find_all(&self) -> LibraryResult<Vec<BookEntity>> {
        Ok(self.table.snapshot().await)
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn find_available(&self) -> LibraryResult<Vec<BookEntity>> {
        Ok(self.table.filter(|book| book.available).await)
    }

    async fn search(&self, keyword: &str) -> LibraryResult<Vec<BookEntity>> {
        let keyword = keyword.to_lowercase();
        Ok(self.table.filter(|book| book.matches_keyword(keyword.as_str())).await)
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;
    use crate::books::repository::BookRepository;
    use crate::books::repository::memory_book_repository::MemoryBookRepository;
    use crate::core::library::{Category, LibraryError};
    use crate::core::repository::Repository;
    use crate::utils::memory::MemoryTable;

    fn sut() -> MemoryBookRepository {
        MemoryBookRepository::new(MemoryTable::default())
    }

    #[tokio::test]
    async fn test_should_create_get_book() {
        let repo = sut();
        let book = BookEntity::new(1, "Dune", "Frank Herbert", Category::Fiction);
        let size = repo.create(&book).await.expect("should create book");
        assert_eq!(1, size);
        let loaded = repo.get(1).await.expect("should return book");
        assert_eq!(book, loaded);
    }

    #[tokio::test]
    async fn test_should_not_create_duplicate_book() {
        let repo = sut();
        let _ = repo.create(&BookEntity::new(1, "Dune", "Frank Herbert", Category::Fiction)).await.expect("should create book");
        let res = repo.create(&BookEntity::new(1, "Emma", "Jane Austen", Category::Fiction)).await;
        assert!(matches!(res, Err(LibraryError::DuplicateKey { .. })));
        let all = repo.find_all().await.expect("should list books");
        assert_eq!(1, all.len());
        assert_eq!("Dune", all[0].title.as_str());
    }

    #[tokio::test]
    async fn test_should_update_delete_book() {
        let repo = sut();
        let mut book = BookEntity::new(2, "Emma", "Jane Austen", Category::Fiction);
        let _ = repo.create(&book).await.expect("should create book");
        book.available = false;
        let _ = repo.update(&book).await.expect("should update book");
        assert!(!repo.get(2).await.expect("should return book").available);
        let _ = repo.delete(2).await.expect("should delete book");
        assert!(repo.get(2).await.is_err());
    }

    #[tokio::test]
    async fn test_should_find_available_books() {
        let repo = sut();
        let mut lent = BookEntity::new(1, "Dune", "Frank Herbert", Category::Fiction);
        lent.available = false;
        let _ = repo.create(&lent).await.expect("should create book");
        let _ = repo.create(&BookEntity::new(2, "Cosmos", "Carl Sagan", Category::Science)).await.expect("should create book");
        let res = repo.find_available().await.expect("should find books");
        assert_eq!(vec![2], res.iter().map(|b| b.book_id).collect::<Vec<i64>>());
    }

    #[tokio::test]
    async fn test_should_search_case_insensitively() {
        let repo = sut();
        let _ = repo.create(&BookEntity::new(1, "Dune", "Frank Herbert", Category::Fiction)).await.expect("should create book");
        let _ = repo.create(&BookEntity::new(2, "Cosmos", "Carl Sagan", Category::Science)).await.expect("should create book");
        let res = repo.search("FICTION").await.expect("should search");
        assert_eq!(1, res.len());
        assert_eq!(1, res[0].book_id);
        let res = repo.search("poetry").await.expect("should search");
        assert!(res.is_empty());
    }
}
