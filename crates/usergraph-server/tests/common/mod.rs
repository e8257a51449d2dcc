//! Test doubles for the `UserStore` seam.

#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;

use serde_json::Value;

use usergraph_core::{Age, NewUser, User};
use usergraph_graph::mutations::age_param;
use usergraph_graph::{GraphError, UserStore};

/// Vec-backed store with the same match-by-name semantics as Neo4j.
///
/// Ages go through the real Bolt binding, and maps are refused the way
/// Neo4j refuses non-primitive property values.
#[derive(Default)]
pub struct MemoryStore {
    users: Mutex<Vec<User>>,
}

impl MemoryStore {
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Mutex::new(users),
        }
    }

    pub fn snapshot(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }
}

pub const MAP_REJECTED: &str = "Property values can only be of primitive types or arrays thereof";

fn storable(age: Option<&Age>) -> Result<(), GraphError> {
    let Some(age) = age else {
        return Ok(());
    };
    age_param(age)?;
    match age {
        Age::Other(Value::Object(_)) => Err(GraphError::Serialization(MAP_REJECTED.to_string())),
        _ => Ok(()),
    }
}

fn named(user: &User, name: &str) -> bool {
    user.name.as_deref() == Some(name)
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn create_user(&self, user: &NewUser) -> Result<(), GraphError> {
        storable(user.age.as_ref())?;
        self.users.lock().unwrap().push(user.clone().into());
        Ok(())
    }

    async fn list_users(&self) -> Result<Vec<User>, GraphError> {
        Ok(self.snapshot())
    }

    async fn find_users(&self, name: &str) -> Result<Vec<User>, GraphError> {
        Ok(self
            .snapshot()
            .into_iter()
            .filter(|u| named(u, name))
            .collect())
    }

    async fn update_user_age(&self, name: &str, age: Option<&Age>) -> Result<u64, GraphError> {
        storable(age)?;
        let mut users = self.users.lock().unwrap();
        let mut matched = 0;
        for user in users.iter_mut().filter(|u| named(u, name)) {
            user.age = age.cloned();
            matched += 1;
        }
        Ok(matched)
    }

    async fn delete_users(&self, name: &str) -> Result<u64, GraphError> {
        let mut users = self.users.lock().unwrap();
        let before = users.len();
        users.retain(|u| !named(u, name));
        Ok((before - users.len()) as u64)
    }
}

/// Store whose every call fails like an unreachable database.
pub struct FailingStore;

pub const FAILURE: &str = "Connection refused (os error 111)";

fn unreachable_db() -> GraphError {
    GraphError::Connection(FAILURE.to_string())
}

#[async_trait]
impl UserStore for FailingStore {
    async fn create_user(&self, _user: &NewUser) -> Result<(), GraphError> {
        Err(unreachable_db())
    }

    async fn list_users(&self) -> Result<Vec<User>, GraphError> {
        Err(unreachable_db())
    }

    async fn find_users(&self, _name: &str) -> Result<Vec<User>, GraphError> {
        Err(unreachable_db())
    }

    async fn update_user_age(&self, _name: &str, _age: Option<&Age>) -> Result<u64, GraphError> {
        Err(unreachable_db())
    }

    async fn delete_users(&self, _name: &str) -> Result<u64, GraphError> {
        Err(unreachable_db())
    }
}
