/*
 * Responsibility
 * - middleware の公開インターフェース
 * - guard: 認証 + media type の検証/交渉 (route 単位)
 * - http / cors / security_headers: 全 route 共通
 */
pub mod cors;
pub mod guard;
pub mod http;
pub mod security_headers;
