//! usergraph-graph — Neo4j client for the `User` label.
//!
//! Every read and write against the graph goes through [`GraphClient`], one
//! parameterized Cypher query per call. The [`UserStore`] trait is the seam
//! the HTTP layer depends on.

pub mod client;
pub mod mutations;
pub mod queries;
pub mod store;

pub use client::{GraphClient, GraphConfig, GraphError};
pub use store::UserStore;

