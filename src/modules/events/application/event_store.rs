// Event store: the event collection, cached in memory and persisted as a whole.
//
// Responsibilities
// - Load the collection once when opened. The cache is authoritative afterwards and
//   the file is never read again, so edits made to it by other processes are not seen.
// - Serialise every operation behind one mutex. Concurrent requests queue instead of
//   racing on id assignment or overwriting each other's writes.
// - Persist the full collection before committing a mutation to the cache. A failed
//   write leaves both the file and the cache as they were.

use crate::modules::events::application::errors::{EventNotFound, EventStoreError, NoMatchingEvents};
use crate::modules::events::core::event::Event;
use crate::modules::events::core::filter::EventFilter;
use crate::modules::events::core::patch::EventPatch;
use crate::modules::events::use_cases::create_event::command::CreateEvent;
use crate::shared::core::record::{RecordId, next_id};
use crate::shared::infrastructure::record_file::{RecordFile, RecordFileError};
use std::sync::Arc;
use tokio::sync::Mutex;

pub struct EventStore {
    file: Arc<dyn RecordFile<Event>>,
    events: Mutex<Vec<Event>>,
}

impl EventStore {
    pub async fn open(file: Arc<dyn RecordFile<Event>>) -> Result<Self, RecordFileError> {
        let events = file.load().await?;
        tracing::info!(events = events.len(), "event store loaded");
        Ok(Self {
            file,
            events: Mutex::new(events),
        })
    }

    pub async fn list(&self) -> Vec<Event> {
        self.events.lock().await.clone()
    }

    pub async fn get(&self, id: RecordId) -> Result<Event, EventNotFound> {
        self.events
            .lock()
            .await
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or(EventNotFound(id))
    }

    pub async fn create(&self, command: CreateEvent) -> Result<Event, EventStoreError> {
        let mut events = self.events.lock().await;
        let event = Event {
            id: next_id(&events)?,
            name: command.name,
            date: command.date,
        };

        let mut next = events.clone();
        next.push(event.clone());
        self.file.save(&next).await?;
        *events = next;

        tracing::info!(event_id = event.id, "event created");
        Ok(event)
    }

    pub async fn update(&self, id: RecordId, patch: EventPatch) -> Result<Event, EventStoreError> {
        let mut events = self.events.lock().await;
        let mut next = events.clone();
        let event = next
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(EventStoreError::NotFound(id))?;
        patch.apply_to(event);
        let updated = event.clone();

        self.file.save(&next).await?;
        *events = next;

        tracing::info!(event_id = id, "event updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: RecordId) -> Result<Event, EventStoreError> {
        let mut events = self.events.lock().await;
        let index = events
            .iter()
            .position(|e| e.id == id)
            .ok_or(EventStoreError::NotFound(id))?;

        let mut next = events.clone();
        let deleted = next.remove(index);
        self.file.save(&next).await?;
        *events = next;

        tracing::info!(event_id = id, "event deleted");
        Ok(deleted)
    }

    pub async fn search(&self, filter: &EventFilter) -> Result<Vec<Event>, NoMatchingEvents> {
        let results: Vec<Event> = self
            .events
            .lock()
            .await
            .iter()
            .filter(|e| filter.matches(e))
            .cloned()
            .collect();

        if results.is_empty() {
            return Err(NoMatchingEvents);
        }
        Ok(results)
    }
}
