//! Core type definitions using newtype patterns for type safety.
//!
//! These types keep invalid ports unrepresentable and carry an unknown
//! protocol name through to the report instead of failing early.

mod port;
mod protocol;
mod target;

pub use port::{Port, PortError, PortList};
pub use protocol::Protocol;
pub use target::Target;
