//! Write operations on `User` nodes.
//!
//! Update and delete match by `name` and touch every match. Zero matches is
//! not an error.

use neo4rs::{query, BoltNull, BoltType, Query};

use usergraph_core::{Age, NewUser};

use crate::client::{GraphClient, GraphError};

impl GraphClient {
    /// Insert one `User` node. No duplicate check; absent fields are bound
    /// as null, which Neo4j does not store.
    pub async fn create_user(&self, user: &NewUser) -> Result<(), GraphError> {
        let q = query("CREATE (u:User {name: $name, age: $age})")
            .param("name", user.name.clone())
            .param("age", opt_age_param(user.age.as_ref())?);

        self.run(q).await
    }

    /// Set `age` on every `User` named `name`; `None` removes it.
    /// Returns the number matched.
    pub async fn update_user_age(&self, name: &str, age: Option<&Age>) -> Result<u64, GraphError> {
        let q = query(
            "MATCH (u:User {name: $name})
             SET u.age = $age
             RETURN count(u) AS matched",
        )
        .param("name", name.to_string())
        .param("age", opt_age_param(age)?);

        self.matched_count(q).await
    }

    /// Delete every `User` named `name`. Returns the number matched.
    pub async fn delete_users(&self, name: &str) -> Result<u64, GraphError> {
        let q = query(
            "MATCH (u:User {name: $name})
             DETACH DELETE u
             RETURN count(u) AS matched",
        )
        .param("name", name.to_string());

        self.matched_count(q).await
    }

    async fn matched_count(&self, q: Query) -> Result<u64, GraphError> {
        match self.query_one(q).await? {
            Some(row) => {
                let matched: i64 = row.get("matched").map_err(|e| {
                    GraphError::Serialization(format!("Failed to read match count: {e}"))
                })?;
                Ok(matched.max(0) as u64)
            }
            None => Ok(0),
        }
    }
}

/// Bind an [`Age`] with the Bolt type matching how it arrived.
///
/// Fails only when the value has no Bolt encoding, i.e. an integer past
/// `i64::MAX`. Shapes Bolt can carry but Neo4j will not store as a
/// property, such as maps, are left for the database to reject.
pub fn age_param(age: &Age) -> Result<BoltType, GraphError> {
    match age {
        Age::Integer(n) => Ok((*n).into()),
        Age::Float(n) => Ok((*n).into()),
        Age::Bool(b) => Ok((*b).into()),
        Age::Text(s) => Ok(s.clone().into()),
        Age::Other(value) => BoltType::try_from(value.clone()).map_err(|e| {
            GraphError::Serialization(format!("age {value} cannot be sent to Neo4j: {e}"))
        }),
    }
}

fn opt_age_param(age: Option<&Age>) -> Result<BoltType, GraphError> {
    match age {
        Some(age) => age_param(age),
        None => Ok(BoltType::Null(BoltNull)),
    }
}
