//! usergraph-core: Shared types, configuration, and error handling for usergraph.
//!
//! This crate provides the pieces every other usergraph crate agrees on:
//! - The `User` record and the request bodies of the HTTP API
//! - Layered configuration (file, environment, defaults)
//! - The top-level error type

pub mod config;
pub mod error;
pub mod types;

pub use config::Settings;
pub use error::UsergraphError;
pub use types::{Age, AgeUpdate, NewUser, User};
