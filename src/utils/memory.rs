use std::fmt;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;
use tokio::sync::RwLock;
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};

// MemoryTable is an ordered, id-unique list of rows behind a shared lock.
// Rows keep insertion order; lookups are linear scans.
pub struct MemoryTable<E> {
    rows: Arc<RwLock<Vec<E>>>,
}

impl<E> MemoryTable<E> {
    pub fn new(rows: Vec<E>) -> Self {
        Self {
            rows: Arc::new(RwLock::new(rows)),
        }
    }
}

impl<E> Clone for MemoryTable<E> {
    fn clone(&self) -> Self {
        Self {
            rows: self.rows.clone(),
        }
    }
}

impl<E> Default for MemoryTable<E> {
    fn default() -> Self {
        Self::new(vec![])
    }
}

impl<E> Debug for MemoryTable<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryTable").finish_non_exhaustive()
    }
}

impl<E: Identifiable + Clone> MemoryTable<E> {
    pub(crate) async fn insert(&self, entity: &E, kind: &str) -> LibraryResult<usize> {
        let mut rows = self.rows.write().await;
        if rows.iter().any(|row| row.id() == entity.id()) {
            return Err(LibraryError::duplicate_key(
                format!("a {} with id {} already exists", kind, entity.id()).as_str()));
        }
        rows.push(entity.clone());
        Ok(1)
    }

    pub(crate) async fn replace(&self, entity: &E, kind: &str) -> LibraryResult<usize> {
        let mut rows = self.rows.write().await;
        match rows.iter_mut().find(|row| row.id() == entity.id()) {
            Some(row) => {
                *row = entity.clone();
                Ok(1)
            }
            None => Err(LibraryError::not_found(
                format!("{} with id {} not found", kind, entity.id()).as_str())),
        }
    }

    pub(crate) async fn get(&self, id: i64, kind: &str) -> LibraryResult<E> {
        self.rows.read().await.iter()
            .find(|row| row.id() == id)
            .cloned()
            .ok_or_else(|| LibraryError::not_found(
                format!("{} with id {} not found", kind, id).as_str()))
    }

    pub(crate) async fn remove(&self, id: i64, kind: &str) -> LibraryResult<usize> {
        let mut rows = self.rows.write().await;
        match rows.iter().position(|row| row.id() == id) {
            Some(pos) => {
                rows.remove(pos);
                Ok(1)
            }
            None => Err(LibraryError::not_found(
                format!("{} with id {} not found", kind, id).as_str())),
        }
    }

    pub(crate) async fn filter<P>(&self, predicate: P) -> Vec<E>
        where P: Fn(&E) -> bool + Send {
        self.rows.read().await.iter()
            .filter(|row| predicate(row))
            .cloned()
            .collect()
    }

    pub async fn snapshot(&self) -> Vec<E> {
        self.rows.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }
}
