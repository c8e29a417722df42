//! Quest module: the unlock progression state machine.
//!
//! Tier 1 reveals and completes the five directional projects, the optional
//! Tier 2 reviews work experiences ("chronicles"), and Tier 3 unlocks the four
//! advanced sections strictly in order. All state is session-scoped and lives
//! in memory only.

pub mod command;
pub mod direction;
mod exit;
pub mod interpreter;
pub mod progression;
pub mod section;
pub mod session;
pub mod view;

pub use session::Session;
