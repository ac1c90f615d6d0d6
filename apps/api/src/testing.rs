//! Test doubles shared by unit and router tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::llm_client::{Inference, LlmError};
use crate::state::AppState;
use crate::store::memory::MemoryStore;

/// Inference backend that replays canned replies and counts calls.
/// Once the script runs out, the last reply is repeated.
pub struct ScriptedInference {
    replies: Mutex<VecDeque<Option<String>>>,
    last: Mutex<Option<String>>,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedInference {
    pub fn new(replies: Vec<Option<&str>>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().map(|r| r.map(String::from)).collect()),
            last: Mutex::new(None),
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(reply: &str) -> Self {
        Self::new(vec![Some(reply)])
    }

    /// Every call fails as if the provider were unreachable.
    pub fn failing() -> Self {
        Self::new(vec![None])
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl Inference for ScriptedInference {
    async fn complete_json(&self, _system: &str, prompt: &str) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());

        let next = self.replies.lock().unwrap().pop_front();
        let reply = match next {
            Some(reply) => {
                *self.last.lock().unwrap() = reply.clone();
                reply
            }
            None => self.last.lock().unwrap().clone(),
        };

        reply.ok_or(LlmError::Api {
            status: 503,
            message: "scripted outage".to_string(),
        })
    }
}

/// App state over an in-memory store and a scripted model.
pub fn test_state(store: Arc<MemoryStore>, llm: Arc<ScriptedInference>) -> AppState {
    AppState { store, llm }
}
