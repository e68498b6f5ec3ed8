//! # sensorboard-app
//!
//! Application layer — navigation, view mounting, and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `Host` — looks up the attachment point the view mount renders into
//!   - `RenderRoot` — replaces or clears the rendered view
//! - Provide **in-process infrastructure** that doesn't need IO:
//!   - `NavigationState` — current path and view, with synchronous subscribers
//! - Define the **driving/inbound** entry points:
//!   - `Navigator` — resolves paths against the route table on every navigation event
//!   - `ViewMount` — owns the attachment point and re-renders on navigation
//!   - `Shell` — bootstrap wiring: route table → view mount → navigator
//!
//! ## Dependency rule
//! Depends on `sensorboard-domain` only (plus `tracing` for diagnostics).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod navigation;
pub mod navigator;
pub mod ports;
pub mod shell;
pub mod view_mount;

#[cfg(test)]
pub(crate) mod testing;
