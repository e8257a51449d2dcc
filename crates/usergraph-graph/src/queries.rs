//! Read operations on `User` nodes.

use neo4rs::query;

use usergraph_core::User;

use crate::client::{GraphClient, GraphError};

impl GraphClient {
    /// All `User` nodes, in whatever order the database yields them.
    pub async fn list_users(&self) -> Result<Vec<User>, GraphError> {
        let rows = self.query_rows(query("MATCH (u:User) RETURN u")).await?;
        rows_to_users(rows)
    }

    /// Every `User` whose `name` equals `name`.
    pub async fn find_users(&self, name: &str) -> Result<Vec<User>, GraphError> {
        let q = query("MATCH (u:User {name: $name}) RETURN u").param("name", name.to_string());

        let rows = self.query_rows(q).await?;
        rows_to_users(rows)
    }
}

fn rows_to_users(rows: Vec<neo4rs::Row>) -> Result<Vec<User>, GraphError> {
    let mut users = Vec::with_capacity(rows.len());
    for row in rows {
        let node: neo4rs::Node = row.get("u").map_err(|e| {
            GraphError::Serialization(format!("Failed to deserialize user node: {e}"))
        })?;
        users.push(node_to_user(&node));
    }
    Ok(users)
}

/// Convert a neo4rs::Node to a [`User`].
///
/// A property that is absent, or `name` stored as a non-string, is left
/// out. `age` decodes through JSON so any stored type is returned as is.
fn node_to_user(node: &neo4rs::Node) -> User {
    User {
        name: node.get("name").ok(),
        age: node.get("age").ok(),
    }
}
