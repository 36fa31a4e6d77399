//! devconnect — REST backend for a social-profile application.
//!
//! User registration and login, profile CRUD with experience/education
//! sub-lists, posts with likes and comments, and a GitHub repository lookup.
//! One axum process over SQLite via sqlx, secured with signed tokens carried
//! in an `x-auth-token` header.
//!
//! # Module Structure
//!
//! ```text
//! src/
//! ├── server/       - configuration, pool + schema, state, app assembly
//! ├── routes/       - route table
//! ├── middleware/   - auth gate (token extractor)
//! ├── auth/         - token issue/verify, login, current user
//! ├── users/        - accounts, registration, avatar derivation
//! ├── profiles/     - profile documents, sub-lists, github lookup
//! ├── posts/        - post documents, likes, comments
//! ├── error/        - error taxonomy and HTTP conversion
//! └── validation    - request field validation
//! ```
//!
//! Requests flow auth gate (on private routes) → handler → store → JSON
//! response; no other coupling exists between the route groups.

/// Token handling and auth handlers
pub mod auth;

/// Error taxonomy and HTTP conversion
pub mod error;

/// Authentication gate
pub mod middleware;

/// Posts, likes, comments
pub mod posts;

/// Profiles and the GitHub lookup
pub mod profiles;

/// Route configuration
pub mod routes;

/// Server setup and shared state
pub mod server;

/// Accounts and registration
pub mod users;

/// Request field validation
pub mod validation;

pub use error::ApiError;
pub use server::create_app;
