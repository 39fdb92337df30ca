use std::path::PathBuf;
use std::sync::Arc;
use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable : Sync + Send {
    fn id(&self) -> i64;
}

// Configuration abstracts config options for library system
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub data_dir: PathBuf,
    pub books_file: String,
    pub members_file: String,
    pub loans_file: String,
    pub borrow_period_days: i64,
    pub fine_per_day: i64,
}

impl Configuration {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Configuration {
            data_dir: data_dir.into(),
            books_file: "books.csv".to_string(),
            members_file: "members.csv".to_string(),
            loans_file: "loans.csv".to_string(),
            borrow_period_days: 3,
            fine_per_day: 5,
        }
    }

    pub fn books_path(&self) -> PathBuf {
        self.data_dir.join(&self.books_file)
    }

    pub fn members_path(&self) -> PathBuf {
        self.data_dir.join(&self.members_file)
    }

    pub fn loans_path(&self) -> PathBuf {
        self.data_dir.join(&self.loans_file)
    }
}

// Clock supplies the wall time used for loans and fines.
pub trait Clock: Sync + Send {
    fn now(&self) -> NaiveDateTime;
}

// SystemClock reads local time, since borrow dates are civil dates entered by the operator.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}
