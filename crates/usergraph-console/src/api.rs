//! Blocking HTTP calls, one per menu action.

use reqwest::blocking::Client;
use reqwest::Url;

use usergraph_core::{Age, AgeUpdate, NewUser};

use crate::error::ClientError;

/// Status and raw body of one API call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

/// The calls the menu can make. Ages are the text the user typed.
pub trait UserApi {
    fn create_user(&self, name: &str, age: &str) -> Result<ApiResponse, ClientError>;

    fn read_user(&self, name: &str) -> Result<ApiResponse, ClientError>;

    fn update_user(&self, name: &str, age: &str) -> Result<ApiResponse, ClientError>;

    fn delete_user(&self, name: &str) -> Result<ApiResponse, ClientError>;

    fn list_users(&self) -> Result<ApiResponse, ClientError>;
}

/// [`UserApi`] over reqwest's blocking client.
///
/// Must not be created or used from inside an async runtime worker; wrap in
/// `spawn_blocking` there.
pub struct HttpApi {
    client: Client,
    base: Url,
}

impl HttpApi {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base = Url::parse(base_url).map_err(|e| ClientError::Url(format!("{base_url}: {e}")))?;
        if base.cannot_be_a_base() {
            return Err(ClientError::Url(format!("{base_url}: cannot be a base")));
        }
        let client = Client::builder().build()?;
        Ok(Self { client, base })
    }

    /// Append path segments to the base URL, percent-encoding each one.
    fn url(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::Url(format!("{}: cannot be a base", self.base)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn finish(response: reqwest::blocking::Response) -> Result<ApiResponse, ClientError> {
        let status = response.status().as_u16();
        let body = response.text()?;
        tracing::debug!(status, "Response received");
        Ok(ApiResponse { status, body })
    }
}

impl UserApi for HttpApi {
    fn create_user(&self, name: &str, age: &str) -> Result<ApiResponse, ClientError> {
        let body = NewUser {
            name: Some(name.to_string()),
            age: Some(Age::from(age)),
        };
        let response = self.client.post(self.url(&["users"])?).json(&body).send()?;
        Self::finish(response)
    }

    fn read_user(&self, name: &str) -> Result<ApiResponse, ClientError> {
        let response = self.client.get(self.url(&["users", name])?).send()?;
        Self::finish(response)
    }

    fn update_user(&self, name: &str, age: &str) -> Result<ApiResponse, ClientError> {
        let body = AgeUpdate {
            age: Some(Age::from(age)),
        };
        let response = self
            .client
            .put(self.url(&["users", name])?)
            .json(&body)
            .send()?;
        Self::finish(response)
    }

    fn delete_user(&self, name: &str) -> Result<ApiResponse, ClientError> {
        let response = self.client.delete(self.url(&["users", name])?).send()?;
        Self::finish(response)
    }

    fn list_users(&self) -> Result<ApiResponse, ClientError> {
        let response = self.client.get(self.url(&["users"])?).send()?;
        Self::finish(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_appends_encoded_segments() {
        let api = HttpApi::new("http://localhost:3000").unwrap();
        let url = api.url(&["users", "Ana Maria/2"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/users/Ana%20Maria%2F2");
    }

    #[test]
    fn url_keeps_base_path() {
        let api = HttpApi::new("http://localhost:3000/api/").unwrap();
        let url = api.url(&["users"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/api/users");
    }

    #[test]
    fn rejects_unparseable_base() {
        assert!(matches!(
            HttpApi::new("not a url"),
            Err(ClientError::Url(_))
        ));
        assert!(matches!(
            HttpApi::new("mailto:ana@example.com"),
            Err(ClientError::Url(_))
        ));
    }
}
