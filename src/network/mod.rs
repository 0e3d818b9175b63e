//! Network layer - calls to the trade-in backend
//!
//! The Network actor receives fetch commands and sends back typed results.

pub mod actor;
pub mod client;

pub use actor::NetworkActor;
