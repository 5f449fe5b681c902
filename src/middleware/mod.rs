/*
 * Responsibility
 * - middleware の公開インターフェース
 * - http::apply (trace / request id / timeout), security_headers::apply
 */
pub mod http;
pub mod security_headers;
