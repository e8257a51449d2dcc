//! Neo4j connection management and shared graph client.

use neo4rs::{query, ConfigBuilder, Graph, Query};

use usergraph_core::config::Neo4jSettings;

/// Errors from graph operations.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("Neo4j connection error: {0}")]
    Connection(String),

    #[error("Neo4j query error: {0}")]
    Query(#[from] neo4rs::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Configuration for connecting to Neo4j.
#[derive(Debug, Clone)]
pub struct GraphConfig {
    pub uri: String,
    pub user: String,
    pub password: String,
    pub max_connections: u32,
    pub fetch_size: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Neo4jSettings::default().into()
    }
}

impl From<Neo4jSettings> for GraphConfig {
    fn from(s: Neo4jSettings) -> Self {
        Self {
            uri: s.uri,
            user: s.user,
            password: s.password,
            max_connections: s.max_connections,
            fetch_size: s.fetch_size,
        }
    }
}

/// Thread-safe Neo4j graph client.
///
/// The driver checks a pooled connection out per query and returns it when
/// the query completes; that checkout is the per-request session.
/// Clone is cheap (inner Arc).
#[derive(Clone)]
pub struct GraphClient {
    graph: Graph,
}

impl GraphClient {
    /// Connect to Neo4j with the given configuration.
    pub async fn connect(config: &GraphConfig) -> Result<Self, GraphError> {
        let neo_config = ConfigBuilder::default()
            .uri(&config.uri)
            .user(&config.user)
            .password(&config.password)
            .max_connections(config.max_connections as usize)
            .fetch_size(config.fetch_size)
            .build()
            .map_err(|e| GraphError::Connection(e.to_string()))?;

        let graph = Graph::connect(neo_config)
            .await
            .map_err(|e| GraphError::Connection(e.to_string()))?;

        tracing::debug!(uri = %config.uri, "Neo4j driver initialized");
        Ok(Self { graph })
    }

    /// Round-trip `RETURN 1` to prove the database answers.
    pub async fn ping(&self) -> Result<i64, GraphError> {
        let row = self
            .query_one(query("RETURN 1 AS ok"))
            .await?
            .ok_or_else(|| GraphError::Serialization("RETURN 1 produced no row".to_string()))?;

        row.get::<i64>("ok")
            .map_err(|e| GraphError::Serialization(format!("Failed to read ping value: {e}")))
    }

    /// Run a statement whose result is discarded, as `create_user` does.
    pub async fn run(&self, statement: Query) -> Result<(), GraphError> {
        self.graph.run(statement).await?;
        Ok(())
    }

    /// Drain every row of a `MATCH ... RETURN u` lookup.
    pub async fn query_rows(&self, lookup: Query) -> Result<Vec<neo4rs::Row>, GraphError> {
        let mut rows = Vec::new();
        let mut stream = self.graph.execute(lookup).await?;
        while let Some(row) = stream.next().await? {
            rows.push(row);
        }
        Ok(rows)
    }

    /// First row only. Used for single-row results: the `RETURN 1` ping
    /// and the `count(u)` of update/delete.
    pub async fn query_one(&self, single: Query) -> Result<Option<neo4rs::Row>, GraphError> {
        let mut stream = self.graph.execute(single).await?;
        Ok(stream.next().await?)
    }
}
