/// Post route handlers
pub mod handlers;

/// Post document model
pub mod model;

/// Post document store
pub mod store;

pub use model::{Comment, Like, Post};
