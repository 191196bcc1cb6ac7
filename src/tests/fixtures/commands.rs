// Builders for the commands used across store, decider and handler tests.

use crate::modules::events::use_cases::create_event::command::CreateEvent;
use crate::modules::registrations::use_cases::register_for_event::command::RegisterForEvent;
use crate::shared::core::record::RecordId;

pub struct CreateEventBuilder {
    inner: CreateEvent,
}

impl Default for CreateEventBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl CreateEventBuilder {
    pub fn new() -> Self {
        Self {
            inner: CreateEvent {
                name: "Hackathon".to_string(),
                date: "2025-01-10".to_string(),
            },
        }
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn date(mut self, v: impl Into<String>) -> Self {
        self.inner.date = v.into();
        self
    }

    pub fn build(self) -> CreateEvent {
        self.inner
    }
}

pub struct RegisterForEventBuilder {
    inner: RegisterForEvent,
}

impl Default for RegisterForEventBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl RegisterForEventBuilder {
    pub fn new() -> Self {
        Self {
            inner: RegisterForEvent {
                event_id: Some(1),
                name: Some("A".to_string()),
                email: Some("a@x.com".to_string()),
            },
        }
    }

    pub fn event_id(mut self, v: RecordId) -> Self {
        self.inner.event_id = Some(v);
        self
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = Some(v.into());
        self
    }

    pub fn email(mut self, v: impl Into<String>) -> Self {
        self.inner.email = Some(v.into());
        self
    }

    pub fn without_event_id(mut self) -> Self {
        self.inner.event_id = None;
        self
    }

    pub fn without_name(mut self) -> Self {
        self.inner.name = None;
        self
    }

    pub fn without_email(mut self) -> Self {
        self.inner.email = None;
        self
    }

    pub fn build(self) -> RegisterForEvent {
        self.inner
    }
}
