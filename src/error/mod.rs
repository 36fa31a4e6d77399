/**
 * API Error Types
 *
 * Every handler returns `Result<_, ApiError>`. The variants cover the full
 * error taxonomy of the HTTP surface; `conversion.rs` maps each variant to
 * its status code and JSON body.
 */

pub mod conversion;
pub mod types;

pub use types::ApiError;
