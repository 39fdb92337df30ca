use std::sync::Arc;
use crate::core::command::CommandError;
use crate::core::domain::{Clock, Configuration, SystemClock};
use crate::core::repository::RepositoryStore;

// AppState is what every console action needs to build its services.
#[derive(Clone)]
pub struct AppState {
    pub config: Configuration,
    pub store: RepositoryStore,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(config: Configuration, store: RepositoryStore) -> AppState {
        AppState::with_clock(config, store, Arc::new(SystemClock))
    }

    pub fn with_clock(config: Configuration, store: RepositoryStore, clock: Arc<dyn Clock>) -> AppState {
        AppState {
            config,
            store,
            clock,
        }
    }
}

// Renders a command failure as a line for the operator.
pub fn operator_message(err: &CommandError) -> String {
    match err {
        CommandError::DuplicateKey { .. } => {
            format!("{}. Please choose a different ID.", err)
        }
        CommandError::NotFound { .. } => {
            format!("Not found: {}", err)
        }
        CommandError::Validation { .. } => {
            format!("Invalid request: {}", err)
        }
        CommandError::Serialization { .. } => {
            format!("Unreadable data: {}", err)
        }
        CommandError::Runtime { .. } => {
            format!("Unexpected failure: {}", err)
        }
    }
}
