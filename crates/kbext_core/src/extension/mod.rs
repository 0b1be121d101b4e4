//! Knowledge-base extension contracts and registry.
//!
//! Extensions are supplied by the host as trait objects. How they are built
//! or discovered is outside this crate.

pub mod capability;
pub mod contract;
pub mod registry;
