/// Token issuance and verification
pub mod tokens;

/// Login handler
pub mod login;

/// Current-user handler
pub mod me;

/// Request/response types shared by the auth handlers
pub mod types;

pub use login::login;
pub use me::current_user;
