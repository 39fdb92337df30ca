pub mod books;
pub mod catalog;
pub mod console;
pub mod core;
pub mod gateway;
pub mod lending;
pub mod members;
pub mod persistence;
pub mod utils;
