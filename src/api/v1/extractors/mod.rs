/*!
 * Request extractors
 *
 * Public API:
 * - CurrentAdmin
 */
mod current_admin;

pub use current_admin::CurrentAdmin;
