//! Presentation layer: pure view-model builders over store state, the
//! confirmation gate for destructive actions, the host auth bridge, and
//! text rendering for the demo binary.
//!
//! View models are rebuilt from scratch on every render; nothing here
//! caches permission decisions.

pub mod bridge;
pub mod confirm;
pub mod render;
pub mod telemetry;
pub mod views;

pub use bridge::HostAuthBridge;
pub use confirm::{ConfirmationGate, Confirmed, DestructiveAction};
