/// Deterministic avatar derivation
pub mod avatar;

/// Registration handler
pub mod register;

/// Account table operations
pub mod store;

pub use register::register;
pub use store::Account;
