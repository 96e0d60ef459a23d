/*!
 * Request authentication middleware.
 *
 * Responsibility:
 * - Bearer トークンの検証 (ヘッダ抽出 → 検証 → 拒否)
 * - 成功時に AuthCtx を request extensions に載せる
 *
 * Public API:
 * - access::apply
 */

pub mod access;
