//! Collaborator model passed through capability dispatch.
//!
//! # Responsibility
//! - Define the request context an extension receives on `disambiguate`.
//! - Define the candidate entity shape an extension returns.
//!
//! # Invariants
//! - The registry never inspects these values; they flow through untouched.

pub mod annotation;
pub mod knowledge_base;
