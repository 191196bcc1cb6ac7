use crate::modules::registrations::core::registration::Registration;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("Missing eventId, name, or email")]
    MissingFields,

    #[error("User already registered for this event")]
    AlreadyRegistered,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Decision {
    Accepted { registration: Registration },
    Rejected { reason: DecideError },
}
