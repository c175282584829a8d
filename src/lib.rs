//! # Token Keeper Library
//!
//! Keeps an OAuth2/OIDC client-credentials access token fresh in the
//! background and serves the cached value to any number of concurrent
//! readers without blocking on the network.
//!
//! Modules:
//! - `cache` — token value and non-blocking token cache
//! - `sources` — credential provider contract and the OAuth2 confidential client
//! - `scheduler` — refresh deadline policy and the background maintainer loop
//! - `token_source` — the public `MaintainedTokenSource` facade

pub mod cache;
pub mod error;
pub mod resilience;
pub mod scheduler;
pub mod sources;
pub mod token_source;
pub mod utils;

#[cfg(test)]
pub mod tests;


pub use crate::cache::token::Token;
pub use crate::error::{ConfigurationError, RefreshError};
pub use crate::sources::oauth2::ConfidentialClient;
pub use crate::sources::FetchToken;
pub use crate::token_source::{MaintainedTokenSource, RefreshOptions};
