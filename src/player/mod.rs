//! Shared playback state: the current playlist plus transport flags.

mod context;
mod state;

pub use context::*;
pub use state::*;
