//! Networking modules for the storefront's REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and `types` defines the wire schema. The
//! backend is an external collaborator — nothing here assumes more than
//! its envelope shape and endpoint paths.

pub mod api;
pub mod types;
