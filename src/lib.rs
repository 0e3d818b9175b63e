//! # The Fone Buyers
//!
//! A terminal storefront for a phone trade-in business: pick your device,
//! get an instant offer.
//!
//! ## Features
//! - Cascading brand → model → storage → condition chooser
//! - Instant quotes from the pricing backend
//! - Device catalog, "how it works" steps and FAQ
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine)
//! - Network Layer (Tokio runtime)

pub mod catalog;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod ui;
pub mod messages;
pub mod app;
pub mod network;

// Re-export commonly used types
pub use models::{Condition, Device, Quote, Selection};
pub use catalog::{Selector, SelectorField};
pub use config::Config;
pub use error::{ConfigError, FetchError, SelectionError};
pub use messages::{UiEvent, NetworkCommand, NetworkResponse, RenderState, Section};
pub use app::{AppState, AppActor};
pub use network::NetworkActor;
