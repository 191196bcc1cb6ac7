use crate::modules::events::core::event::Event;

/// Search criteria. Name matches as a case-insensitive substring, date matches exactly.
/// Criteria combine with AND, and an empty criterion matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFilter {
    pub name: Option<String>,
    pub date: Option<String>,
}

impl EventFilter {
    pub fn matches(&self, event: &Event) -> bool {
        let name_matches = match self.name.as_deref().filter(|v| !v.is_empty()) {
            Some(name) => event.name.to_lowercase().contains(&name.to_lowercase()),
            None => true,
        };
        let date_matches = match self.date.as_deref().filter(|v| !v.is_empty()) {
            Some(date) => event.date == date,
            None => true,
        };
        name_matches && date_matches
    }
}
