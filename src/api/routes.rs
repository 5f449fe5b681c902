/*
 * Responsibility
 * - URL 構造を定義 (GET /graphiql のみ)
 * - それ以外の path は axum のデフォルト (404) に任せる
 */
use axum::{Router, routing::get};

use crate::{api::handlers::graphiql::graphiql, config::GRAPHIQL_PATH, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route(GRAPHIQL_PATH, get(graphiql))
}
