/*
 * Responsibility
 * - 起動時の致命的エラー (AppError) の定義
 * - main では anyhow 経由で表示 → exit code 1
 * - リクエスト処理は失敗しないので IntoResponse は持たない
 */
use std::io;
use std::net::SocketAddr;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid GraphQL endpoint URL {input:?}: {source}")]
    InvalidEndpoint {
        input: String,
        #[source]
        source: url::ParseError,
    },

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] io::Error),
}

impl AppError {
    pub fn invalid_endpoint(input: impl Into<String>, source: url::ParseError) -> Self {
        Self::InvalidEndpoint {
            input: input.into(),
            source,
        }
    }
}
