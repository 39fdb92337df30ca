use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use crate::books::domain::model::BookEntity;
use crate::core::domain::{Configuration, Identifiable};
use crate::core::library::LibraryResult;
use crate::core::repository::RepositoryStore;
use crate::lending::domain::model::LoanEntity;
use crate::members::domain::model::MemberEntity;
use crate::persistence::records::FlatRecord;
use crate::utils::flatfile::split_record;

/// FlatFileStore reads and writes the catalog, member and loan tables as
/// plain comma separated files, one row per line and no header.
#[derive(Debug, Clone)]
pub struct FlatFileStore {
    data_dir: PathBuf,
    books_path: PathBuf,
    members_path: PathBuf,
    loans_path: PathBuf,
}

impl FlatFileStore {
    pub fn new(config: &Configuration) -> Self {
        Self {
            data_dir: config.data_dir.clone(),
            books_path: config.books_path(),
            members_path: config.members_path(),
            loans_path: config.loans_path(),
        }
    }

    /// Loads all tables. A missing file is an empty table; unreadable rows
    /// are skipped with a warning.
    pub async fn load(&self) -> LibraryResult<RepositoryStore> {
        let books: Vec<BookEntity> = load_table(&self.books_path).await?;
        let members: Vec<MemberEntity> = load_table(&self.members_path).await?;
        let loans: Vec<LoanEntity> = load_table::<LoanEntity>(&self.loans_path).await?
            .into_iter()
            .filter(|loan| {
                let lent = books.iter().any(|b| b.book_id == loan.book_id && !b.available);
                if !lent {
                    warn!(book_id = loan.book_id, member_id = loan.member_id,
                        "dropping loan for a book that is not lent out");
                }
                lent
            })
            .collect();
        info!(books = books.len(), members = members.len(), loans = loans.len(), "loaded library data");
        Ok(RepositoryStore::new(books, members, loans))
    }

    /// Writes every table, replacing each file only once its new contents
    /// are fully on disk.
    pub async fn save(&self, store: &RepositoryStore) -> LibraryResult<()> {
        tokio::fs::create_dir_all(&self.data_dir).await?;
        save_table(&self.books_path, &store.books.snapshot().await).await?;
        save_table(&self.members_path, &store.members.snapshot().await).await?;
        save_table(&self.loans_path, &store.loans.snapshot().await).await?;
        info!(data_dir = %self.data_dir.display(), "saved library data");
        Ok(())
    }
}

async fn load_table<E: FlatRecord + Identifiable>(path: &Path) -> LibraryResult<Vec<E>> {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "no data file, starting empty");
            return Ok(vec![]);
        }
        Err(err) => return Err(err.into()),
    };
    let mut rows: Vec<E> = vec![];
    for (index, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match split_record(line, E::FIELDS).and_then(|fields| E::decode(&fields)) {
            Ok(row) if rows.iter().any(|r| r.id() == row.id()) => {
                warn!(path = %path.display(), line = index + 1, id = row.id(), "skipping row with duplicate id");
            }
            Ok(row) => rows.push(row),
            Err(err) => {
                warn!(path = %path.display(), line = index + 1, error = %err, "skipping unreadable row");
            }
        }
    }
    Ok(rows)
}

async fn save_table<E: FlatRecord>(path: &Path, rows: &[E]) -> LibraryResult<()> {
    let mut content = String::new();
    for row in rows {
        content.push_str(row.encode().as_str());
        content.push('\n');
    }
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);
    tokio::fs::write(&tmp, content).await?;
    tokio::fs::rename(&tmp, path).await?;
    debug!(path = %path.display(), rows = rows.len(), "wrote data file");
    Ok(())
}
