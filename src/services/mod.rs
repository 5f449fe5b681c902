/*
 * Responsibility
 * - 起動時に一度だけ行う変換 (URL の credential 除去, Basic header 生成)
 * - GraphiQL ページの HTML 生成
 */
pub mod basic_auth;
pub mod endpoint;
pub mod graphiql;
