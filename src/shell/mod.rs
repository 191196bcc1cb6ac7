// Composition root for the event registrations service.
//
// Responsibilities
// - Read config from the environment.
// - Open the record files and the stores in front of them.
// - Wire the stores into the HTTP router.

pub mod config;
pub mod http;
pub mod state;
