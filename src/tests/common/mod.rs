// tests/common/mod.rs
pub use httpmock::prelude::*;
pub use serde_json::json;

use httpmock::Mock;

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::cache::token::Token;
use crate::error::RefreshError;
use crate::sources::FetchToken;

/// Mount a discovery document pointing at `token_path` on the same server.
pub fn mock_discovery<'a>(server: &'a MockServer, token_path: &str) -> Mock<'a> {
    let token_endpoint = format!("{}{}", server.base_url(), token_path);
    server.mock(|when, then| {
        when.method(GET).path("/.well-known/openid-configuration");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({
                "issuer": server.base_url(),
                "token_endpoint": token_endpoint,
            }));
    })
}

/// Mount a token endpoint answering every form-encoded POST with one token.
pub fn mock_token_endpoint<'a>(
    server: &'a MockServer,
    token_path: &str,
    value: &str,
    expires_in: u64,
) -> Mock<'a> {
    let value = value.to_owned();
    server.mock(|when, then| {
        when.method(POST)
            .path(token_path)
            .header("content-type", "application/x-www-form-urlencoded");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({
                "access_token": value,
                "token_type": "Bearer",
                "expires_in": expires_in,
            }));
    })
}

/// One scripted provider reaction.
#[derive(Debug, Clone)]
pub enum FetchStep {
    Succeed { value: String, valid_for_secs: u64 },
    Fail,
}

impl FetchStep {
    pub fn succeed(value: &str, valid_for_secs: u64) -> Self {
        Self::Succeed {
            value: value.to_owned(),
            valid_for_secs,
        }
    }
}

/// In-memory provider that replays a script of reactions and repeats the
/// last one once the script is drained. Counts every call.
#[derive(Debug)]
pub struct ScriptedProvider {
    steps: Mutex<VecDeque<FetchStep>>,
    fallback: FetchStep,
    pub calls: Arc<AtomicUsize>,
}

impl ScriptedProvider {
    pub fn new(steps: Vec<FetchStep>) -> Self {
        let fallback = steps.last().cloned().unwrap_or(FetchStep::Fail);
        Self {
            steps: Mutex::new(steps.into()),
            fallback,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl FetchToken for ScriptedProvider {
    async fn fetch_token(&self) -> Result<Token, RefreshError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let step = self
            .steps
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone());
        match step {
            FetchStep::Succeed {
                value,
                valid_for_secs,
            } => Ok(Token::new(value, Duration::from_secs(valid_for_secs))),
            FetchStep::Fail => Err(RefreshError::Status(
                reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            )),
        }
    }
}
