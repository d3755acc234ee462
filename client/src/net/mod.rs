//! Networking modules for the blog REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` owns the configured client and its interceptor, `api` maps one
//! function to each REST operation, `types` defines the wire schema, and
//! `error` the failure taxonomy shared by all of them.

pub mod api;
pub mod error;
pub mod http;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;
