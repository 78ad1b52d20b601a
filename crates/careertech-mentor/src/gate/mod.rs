//! Per-user entitlement gate.
//!
//! ```text
//! UNMETERED (no record / consumed=false) --[end_session]--> LOCKED (consumed=true)
//! ```
//! LOCKED is terminal.

pub mod decision;
pub mod entitlement_gate;

pub use decision::{Decision, GateState};
pub use entitlement_gate::EntitlementGate;
