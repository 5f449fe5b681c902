/*
 * Responsibility
 * - GET /graphiql
 * - リクエストごとに AppState から HTML を生成して返す (200, text/html)
 */
use axum::{extract::State, response::Html};

use crate::{services::graphiql::graphiql_source, state::AppState};

pub async fn graphiql(State(state): State<AppState>) -> Html<String> {
    Html(graphiql_source(&state.endpoint, &state.auth_header_line))
}
