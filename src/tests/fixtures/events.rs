use crate::modules::events::core::event::Event;
use crate::shared::core::record::RecordId;

pub fn make_event(id: RecordId, name: &str, date: &str) -> Event {
    Event {
        id,
        name: name.to_string(),
        date: date.to_string(),
    }
}
