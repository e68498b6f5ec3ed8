//! # sensorboard-domain
//!
//! Pure domain model for the sensorboard dashboard shell.
//!
//! ## Responsibilities
//! - Foundational types: validated route paths, view identifiers, error conventions
//! - Define **Routes** (path → view bindings) and the ordered **Route table**
//! - Resolve a path to exactly one view, or to the `NotFound` sentinel
//! - Describe the **Dashboard layout** (navbar, sidebar, main content) as data
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or browser crates.
//! Rendering and navigation boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod path;
pub mod view;

pub mod layout;
pub mod route;
