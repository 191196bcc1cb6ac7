// Command data type for registering someone for an event.
//
// Every field is optional: presence is checked by the decider, not by the transport layer.

use crate::shared::core::record::RecordId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForEvent {
    pub event_id: Option<RecordId>,
    pub name: Option<String>,
    pub email: Option<String>,
}
