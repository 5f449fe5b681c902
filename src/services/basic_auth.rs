/*
 * Responsibility
 * - username / password → `Basic <base64(username:password)>`
 * - ページの fetch headers に差し込む行 (`'Authorization': '...',`) の生成
 * - username が空なら header は出さない (password だけでは credential とみなさない)
 */
use base64::{Engine as _, engine::general_purpose::STANDARD};

/// `Authorization` header value, or an empty string when `username` is empty.
pub fn header_value(username: &str, password: &str) -> String {
    if username.is_empty() {
        return String::new();
    }

    let encoded = STANDARD.encode(format!("{username}:{password}"));
    format!("Basic {encoded}")
}

/// Entry for the page's fetch headers object, or an empty string when there is no header.
pub fn header_line(header_value: &str) -> String {
    if header_value.is_empty() {
        return String::new();
    }

    format!("'Authorization': '{header_value}',")
}
