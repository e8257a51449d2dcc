//! Mapping of request failures onto HTTP responses.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use usergraph_graph::GraphError;

/// Any failure while serving a request. Always rendered as 500 + message.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Store(#[from] GraphError),

    /// A body that is not JSON, or whose `name` is not a string.
    #[error("{}", .0.body_text())]
    Body(#[from] JsonRejection),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        tracing::error!(error = %message, "Request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
    }
}
