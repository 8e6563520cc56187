//! Pilot core
//!
//! The bounded-retry element resolver, the action primitives built on it,
//! and the sequence interpreter that replays declarative command lists.

mod actions;
mod errors;
mod resolver;
mod sequence;

pub use actions::{ActionOptions, GetOptions, Pilot, SendKeysOptions, DEFAULT_TIMEOUT};
pub use errors::PilotError;
pub use sequence::SequenceStep;
