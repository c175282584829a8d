/// Sources module
///
/// Defines the credential provider contract and the production OAuth2
/// confidential client implementing it.

pub mod oauth2;

use crate::cache::token::Token;
use crate::error::RefreshError;

/// Contract of the external credential provider.
///
/// Implementations must report failure explicitly; a usable-looking empty
/// token is never a valid way to signal an error.
pub trait FetchToken: Send + Sync + 'static {
    fn fetch_token(
        &self,
    ) -> impl std::future::Future<Output = Result<Token, RefreshError>> + Send;
}
