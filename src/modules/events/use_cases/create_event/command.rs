// Command data type for creating an event.
//
// Carries the caller supplied fields only. The id is assigned by the event store.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateEvent {
    pub name: String,
    pub date: String,
}
