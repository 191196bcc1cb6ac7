use crate::shared::core::record::{Record, RecordId};
use serde::{Deserialize, Serialize};

/// A person's registration for an event.
///
/// `event_id` is stored as given. It is never checked against the event store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub id: RecordId,
    pub event_id: RecordId,
    pub name: String,
    pub email: String,
}

impl Record for Registration {
    fn id(&self) -> RecordId {
        self.id
    }
}
