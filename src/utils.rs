pub mod date;
pub mod flatfile;
pub mod logs;
pub mod memory;
