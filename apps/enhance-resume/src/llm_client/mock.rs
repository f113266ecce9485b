//! Canned `CompletionClient` for tests. Counts calls and records the last prompt.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::{CompletionClient, LlmError};

enum Reply {
    Text(String),
    Status(u16, String),
}

pub struct MockCompletionClient {
    reply: Reply,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
}

impl MockCompletionClient {
    /// Replies with `text` on every call.
    pub fn replying(text: impl Into<String>) -> Self {
        Self::with(Reply::Text(text.into()))
    }

    /// Fails every call as if the API answered with `status`.
    pub fn failing(status: u16, body: impl Into<String>) -> Self {
        Self::with(Reply::Status(status, body.into()))
    }

    fn with(reply: Reply) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionClient for MockCompletionClient {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());

        match &self.reply {
            Reply::Text(text) => Ok(text.clone()),
            Reply::Status(status, body) => Err(LlmError::Api {
                status: *status,
                body: body.clone(),
            }),
        }
    }
}
