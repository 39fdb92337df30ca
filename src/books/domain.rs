use crate::core::domain::Identifiable;
use crate::core::library::{BookStatus, Category};

pub mod model;

pub trait Book: Identifiable {
    fn category(&self) -> Category;
    fn status(&self) -> BookStatus;
}
