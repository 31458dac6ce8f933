//! Test helpers: a scripted [`SpacesApi`] and a scheduler settle helper.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::api::{FetchError, SpacesApi};
use crate::spaces::Space;

/// One scripted answer: wait `delay`, then return `result`.
#[derive(Clone)]
pub(crate) struct ScriptedResponse {
    pub delay: Duration,
    pub result: Result<Vec<Space>, FetchError>,
}

impl ScriptedResponse {
    pub fn ok(spaces: Vec<Space>) -> Self {
        Self {
            delay: Duration::ZERO,
            result: Ok(spaces),
        }
    }

    pub fn err(error: FetchError) -> Self {
        Self {
            delay: Duration::ZERO,
            result: Err(error),
        }
    }

    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// Answers calls in order; once the script runs out the last entry repeats.
pub(crate) struct ScriptedApi {
    script: Vec<ScriptedResponse>,
    calls: AtomicUsize,
    tokens_seen: Mutex<Vec<Option<String>>>,
    username: Result<Option<String>, FetchError>,
}

impl ScriptedApi {
    pub fn new(script: Vec<ScriptedResponse>) -> Self {
        Self {
            script,
            calls: AtomicUsize::new(0),
            tokens_seen: Mutex::new(Vec::new()),
            username: Ok(None),
        }
    }

    pub fn with_username(mut self, username: Result<Option<String>, FetchError>) -> Self {
        self.username = username;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn tokens_seen(&self) -> Vec<Option<String>> {
        self.tokens_seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl SpacesApi for ScriptedApi {
    async fn fetch_spaces(&self, token: Option<&str>) -> Result<Vec<Space>, FetchError> {
        let index = self.calls.fetch_add(1, Ordering::SeqCst);
        self.tokens_seen
            .lock()
            .unwrap()
            .push(token.map(str::to_string));

        let response = self
            .script
            .get(index)
            .or_else(|| self.script.last())
            .cloned()
            .unwrap_or_else(|| ScriptedResponse::ok(Vec::new()));

        if !response.delay.is_zero() {
            tokio::time::sleep(response.delay).await;
        }
        response.result
    }

    async fn fetch_username(&self, token: &str) -> Result<Option<String>, FetchError> {
        self.tokens_seen
            .lock()
            .unwrap()
            .push(Some(token.to_string()));
        self.username.clone()
    }
}

/// Let spawned tasks run until they block again.
pub(crate) async fn settle() {
    for _ in 0..20 {
        tokio::task::yield_now().await;
    }
}
