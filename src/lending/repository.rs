pub mod memory_loan_repository;

use crate::core::repository::Repository;
use crate::lending::domain::model::LoanEntity;

pub trait LoanRepository: Repository<LoanEntity> {}
