/// GitHub repository lookup
pub mod github;

/// Profile route handlers
pub mod handlers;

/// Profile document model
pub mod model;

/// Profile document store
pub mod store;

pub use model::{Education, Experience, Profile, ProfileUpdate, SocialLinks};
