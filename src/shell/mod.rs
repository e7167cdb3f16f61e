// Composition root for the shopping bounded context.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the in-memory stores and wire them into the orchestrator.
// - Expose the view intents over HTTP.

pub mod config;
pub mod http;
pub mod seed;
pub mod state;
