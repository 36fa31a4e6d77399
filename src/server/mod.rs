/// Server configuration loaded from the environment
pub mod config;

/// Database pool and startup schema
pub mod db;

/// Application assembly
pub mod init;

/// Shared application state
pub mod state;

pub use init::create_app;
