// Pure decision function for registering someone for an event.
//
// Rules
// - eventId, name and email must all be present. A zero eventId or an empty string
//   counts as missing.
// - At most one registration per (eventId, email) pair. Emails compare exactly.
// - The new registration takes the next id derived from the existing collection.
//   Running out of ids is an error, not a rejection.

use crate::modules::registrations::core::registration::Registration;
use crate::modules::registrations::use_cases::register_for_event::command::RegisterForEvent;
use crate::modules::registrations::use_cases::register_for_event::decision::{
    DecideError, Decision,
};
use crate::shared::core::record::{IdsExhausted, next_id};

pub fn decide_register(
    existing: &[Registration],
    command: RegisterForEvent,
) -> Result<Decision, IdsExhausted> {
    let (Some(event_id), Some(name), Some(email)) = (
        command.event_id.filter(|id| *id != 0),
        command.name.filter(|v| !v.is_empty()),
        command.email.filter(|v| !v.is_empty()),
    ) else {
        return Ok(Decision::Rejected {
            reason: DecideError::MissingFields,
        });
    };

    if existing
        .iter()
        .any(|r| r.event_id == event_id && r.email == email)
    {
        return Ok(Decision::Rejected {
            reason: DecideError::AlreadyRegistered,
        });
    }

    Ok(Decision::Accepted {
        registration: Registration {
            id: next_id(existing)?,
            event_id,
            name,
            email,
        },
    })
}
