//! The storage seam used by the HTTP layer.

use async_trait::async_trait;

use usergraph_core::{Age, NewUser, User};

use crate::client::{GraphClient, GraphError};

/// Operations the API needs from a `User` backend.
///
/// [`GraphClient`] is the production implementation. Update and delete
/// report how many records matched; callers must not turn zero into an
/// error. An update with `None` removes the `age` property.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn create_user(&self, user: &NewUser) -> Result<(), GraphError>;

    async fn list_users(&self) -> Result<Vec<User>, GraphError>;

    async fn find_users(&self, name: &str) -> Result<Vec<User>, GraphError>;

    async fn update_user_age(&self, name: &str, age: Option<&Age>) -> Result<u64, GraphError>;

    async fn delete_users(&self, name: &str) -> Result<u64, GraphError>;
}

#[async_trait]
impl UserStore for GraphClient {
    async fn create_user(&self, user: &NewUser) -> Result<(), GraphError> {
        GraphClient::create_user(self, user).await
    }

    async fn list_users(&self) -> Result<Vec<User>, GraphError> {
        GraphClient::list_users(self).await
    }

    async fn find_users(&self, name: &str) -> Result<Vec<User>, GraphError> {
        GraphClient::find_users(self, name).await
    }

    async fn update_user_age(&self, name: &str, age: Option<&Age>) -> Result<u64, GraphError> {
        GraphClient::update_user_age(self, name, age).await
    }

    async fn delete_users(&self, name: &str) -> Result<u64, GraphError> {
        GraphClient::delete_users(self, name).await
    }
}
