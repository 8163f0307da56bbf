//! Authentication Module
//!
//! This module handles user registration, login and bearer-token sessions.
//!
//! # Architecture
//!
//! - **`users`** - Credential record, `CredentialStore` contract, bcrypt helpers
//! - **`sessions`** - Token minting and verification (`TokenCodec`)
//! - **`credentials`** - The login flow: lookup, password check, mint
//! - **`handlers`** - HTTP handlers for authentication endpoints
//!
//! # Authentication Flow
//!
//! 1. **Register**: email, username and password → password hashed → user stored
//! 2. **Login**: email or username plus password → credentials verified → token returned
//! 3. **Me**: token verified by the auth middleware → user info returned
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Tokens are stateless HS256 JWTs and expire after the configured lifetime
//! - Invalid credentials return 401 (no information leakage)

/// Credential record and store operations
pub mod users;

/// Token generation and validation
pub mod sessions;

/// Login flow
pub mod credentials;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use credentials::LoginError;
pub use handlers::{get_me, login, register};
pub use sessions::{Claims, TokenCodec, TokenError};
pub use users::{Credential, CredentialFilter, CredentialStore};
