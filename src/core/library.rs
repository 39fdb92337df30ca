use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum LibraryError {
    DuplicateKey {
        message: String,
    },
    NotFound {
        message: String,
    },
    // The book does not exist or is already lent out.
    BookNotFound {
        message: String,
    },
    MemberNotFound {
        message: String,
    },
    // The book does not exist or is sitting on the shelf.
    BookNotBorrowed {
        message: String,
    },
    InvalidCategory {
        message: String,
    },
    InvalidDate {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn duplicate_key(message: &str) -> LibraryError {
        LibraryError::DuplicateKey { message: message.to_string() }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn book_not_found(message: &str) -> LibraryError {
        LibraryError::BookNotFound { message: message.to_string() }
    }

    pub fn member_not_found(message: &str) -> LibraryError {
        LibraryError::MemberNotFound { message: message.to_string() }
    }

    pub fn book_not_borrowed(message: &str) -> LibraryError {
        LibraryError::BookNotBorrowed { message: message.to_string() }
    }

    pub fn invalid_category(message: &str) -> LibraryError {
        LibraryError::InvalidCategory { message: message.to_string() }
    }

    pub fn invalid_date(message: &str) -> LibraryError {
        LibraryError::InvalidDate { message: message.to_string() }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }

    // true for the errors that mean "no such record"
    pub fn is_not_found(&self) -> bool {
        matches!(self, LibraryError::NotFound { .. }
            | LibraryError::BookNotFound { .. }
            | LibraryError::MemberNotFound { .. })
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::runtime(
            format!("io {:?}", err).as_str(), Some(format!("{:?}", err.kind())))
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl From<String> for LibraryError {
    fn from(err: String) -> Self {
        LibraryError::serialization(
            format!("parsing {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::DuplicateKey { message } => {
                write!(f, "{}", message)
            }
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::BookNotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::MemberNotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::BookNotBorrowed { message } => {
                write!(f, "{}", message)
            }
            LibraryError::InvalidCategory { message } => {
                write!(f, "{}", message)
            }
            LibraryError::InvalidDate { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Validation { message, .. } => {
                write!(f, "{}", message)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for the library domain.
pub type LibraryResult<T> = Result<T, LibraryError>;

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum BookStatus {
    Available,
    Borrowed,
}

impl From<bool> for BookStatus {
    fn from(available: bool) -> Self {
        if available { BookStatus::Available } else { BookStatus::Borrowed }
    }
}

impl Display for BookStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            BookStatus::Available => write!(f, "Available"),
            BookStatus::Borrowed => write!(f, "Borrowed"),
        }
    }
}

// Category is the fixed shelf classification a book is filed under.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum Category {
    Fiction,
    NonFiction,
    Science,
    Biography,
    History,
    Children,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Fiction,
        Category::NonFiction,
        Category::Science,
        Category::Biography,
        Category::History,
        Category::Children,
    ];

    /// Resolves a 1-based menu selection.
    pub fn from_index(index: i64) -> LibraryResult<Category> {
        if index < 1 || index > Category::ALL.len() as i64 {
            return Err(LibraryError::invalid_category(
                format!("invalid category selection {}, expected 1 to {}",
                        index, Category::ALL.len()).as_str()));
        }
        Ok(Category::ALL[(index - 1) as usize])
    }

    pub fn parse(name: &str) -> LibraryResult<Category> {
        Category::ALL.iter()
            .find(|c| c.to_string() == name)
            .copied()
            .ok_or_else(|| LibraryError::invalid_category(
                format!("unknown category {:?}", name).as_str()))
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Category::Fiction => write!(f, "Fiction"),
            Category::NonFiction => write!(f, "Non-Fiction"),
            Category::Science => write!(f, "Science"),
            Category::Biography => write!(f, "Biography"),
            Category::History => write!(f, "History"),
            Category::Children => write!(f, "Children"),
        }
    }
}
