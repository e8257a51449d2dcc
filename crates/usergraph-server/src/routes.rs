//! Route table and handlers.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use tower_http::trace::TraceLayer;

use usergraph_core::{AgeUpdate, NewUser, User};

use crate::{ApiError, AppState};

pub const HEALTH_BODY: &str = "Servidor Rodando";
pub const CREATED_BODY: &str = "Usuário adicionado";
pub const UPDATED_BODY: &str = "Usuário atualizado";
pub const DELETED_BODY: &str = "Usuário deletado";

/// Build the API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(healthcheck))
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/:name",
            get(get_user).put(update_user).delete(delete_user),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthcheck() -> &'static str {
    HEALTH_BODY
}

async fn create_user(
    State(state): State<AppState>,
    body: Result<Json<NewUser>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(user) = body?;
    state.store.create_user(&user).await?;
    tracing::info!(name = ?user.name, "User created");
    Ok((StatusCode::CREATED, CREATED_BODY))
}

async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = state.store.list_users().await?;
    Ok(Json(users))
}

async fn get_user(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Vec<User>>, ApiError> {
    let users = state.store.find_users(&name).await?;
    Ok(Json(users))
}

async fn update_user(
    State(state): State<AppState>,
    Path(name): Path<String>,
    body: Result<Json<AgeUpdate>, JsonRejection>,
) -> Result<&'static str, ApiError> {
    let Json(update) = body?;
    let matched = state.store.update_user_age(&name, update.age.as_ref()).await?;
    tracing::debug!(name = %name, age = ?update.age, matched, "User age updated");
    Ok(UPDATED_BODY)
}

async fn delete_user(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<&'static str, ApiError> {
    let matched = state.store.delete_users(&name).await?;
    tracing::debug!(name = %name, matched, "Users deleted");
    Ok(DELETED_BODY)
}
