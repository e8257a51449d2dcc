//! usergraph-console: Interactive text menu over the usergraph HTTP API.
//!
//! [`menu::Menu`] turns input lines into prompts and actions,
//! [`session::run`] drives it over any reader/writer pair, and
//! [`api::HttpApi`] performs the blocking round-trip for each action.

pub mod api;
pub mod error;
pub mod menu;
pub mod session;

pub use api::{ApiResponse, HttpApi, UserApi};
pub use error::ClientError;

/// Run the menu on stdin/stdout against the API at `base_url`.
pub fn run_stdio(base_url: &str) -> Result<(), ClientError> {
    let api = HttpApi::new(base_url)?;
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    session::run(&api, stdin.lock(), stdout.lock())
}
