//! usergraph-server: HTTP API over the `User` label.
//!
//! Each route runs one [`UserStore`] call and answers with plain text or a
//! JSON array. Store failures surface as 500 with the error text as body.

pub mod error;
pub mod routes;

use std::sync::Arc;

use tokio::net::TcpListener;

use usergraph_graph::UserStore;

pub use error::ApiError;
pub use routes::router;

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserStore>,
}

impl AppState {
    pub fn new(store: impl UserStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

/// Serve the API on an already-bound listener until the task is dropped.
pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    axum::serve(listener, router(state)).await
}
