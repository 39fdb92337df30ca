use std::sync::Arc;
use async_trait::async_trait;
use tokio::sync::Mutex;
use crate::core::events::{DomainEvent, LibraryEvent};
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;

// MemoryPublisher keeps published events so tests can assert on them.
#[derive(Debug, Clone, Default)]
pub(crate) struct MemoryPublisher {
    events: Arc<Mutex<Vec<(LibraryEvent, i64)>>>,
}

impl MemoryPublisher {
    // (event, key) of every event so far
    pub(crate) async fn published(&self) -> Vec<(LibraryEvent, i64)> {
        self.events.lock().await.clone()
    }
}

#[async_trait]
impl EventPublisher for MemoryPublisher {
    async fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        self.events.lock().await.push((event.event, event.key));
        Ok(())
    }
}
