use crate::catalog::factory::create_catalog_service;
use crate::core::domain::{Clock, Configuration};
use crate::core::repository::RepositoryStore;
use crate::gateway::factory::create_publisher;
use crate::lending::domain::LendingService;
use crate::lending::domain::service::LendingServiceImpl;
use crate::lending::repository::LoanRepository;
use crate::lending::repository::memory_loan_repository::MemoryLoanRepository;
use crate::members::factory::create_member_service;

pub(crate) fn create_loan_repository(store: &RepositoryStore) -> Box<dyn LoanRepository> {
    Box::new(MemoryLoanRepository::new(store.loans.clone()))
}

pub fn create_lending_service(config: &Configuration, store: &RepositoryStore,
                              clock: Box<dyn Clock>) -> Box<dyn LendingService> {
    let loan_repo = create_loan_repository(store);
    let catalog_svc = create_catalog_service(config, store);
    let member_svc = create_member_service(config, store);
    Box::new(LendingServiceImpl::new(config, loan_repo, member_svc,
                                     catalog_svc, create_publisher(), clock))
}
