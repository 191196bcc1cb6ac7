use crate::modules::events::core::event::Event;

/// Partial update of an event.
///
/// Only non-empty values overwrite. `None` and `""` both leave the current value in
/// place, so a field can never be cleared through a patch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventPatch {
    pub name: Option<String>,
    pub date: Option<String>,
}

impl EventPatch {
    pub fn apply_to(self, event: &mut Event) {
        if let Some(name) = self.name.filter(|v| !v.is_empty()) {
            event.name = name;
        }
        if let Some(date) = self.date.filter(|v| !v.is_empty()) {
            event.date = date;
        }
    }
}
