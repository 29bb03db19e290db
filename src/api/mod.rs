/*
 * Responsibility
 * - API version ごとの module 公開
 */
pub mod v1;
