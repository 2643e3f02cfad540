//! The guided coaching session: phases, in-flight slots and the HTTP handlers
//! that drive them.

pub mod handlers;
pub mod machine;
pub mod phase;
pub mod slots;

#[cfg(test)]
pub mod testing;
#[cfg(test)]
mod tests;

pub use machine::{SearchSource, SessionView, Workflow};
pub use slots::Slot;
