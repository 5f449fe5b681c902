/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - 起動時に一度だけ計算した endpoint と auth header line
 * - Clone 前提で持つ (内部は Arc / 不変)
 */
use std::sync::Arc;

use crate::services::{basic_auth, endpoint::Endpoint};

#[derive(Clone, Debug)]
pub struct AppState {
    /// Endpoint URL with credentials removed.
    pub endpoint: Arc<str>,
    /// `'Authorization': '...',` or empty.
    pub auth_header_line: Arc<str>,
}

impl AppState {
    pub fn new(endpoint: &Endpoint) -> Self {
        let header = basic_auth::header_value(endpoint.username(), endpoint.password());

        Self {
            endpoint: Arc::from(endpoint.as_str()),
            auth_header_line: Arc::from(basic_auth::header_line(&header)),
        }
    }
}
