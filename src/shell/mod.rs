// Composition root for the flashcards backend.
//
// Responsibilities:
// - Install the process-wide logger.
// - Open the database pool from the static defaults.
// - Register routes on a fresh engine and start listening.
// - Release the pool and flush the logger on shutdown.

pub mod http;
pub mod state;
