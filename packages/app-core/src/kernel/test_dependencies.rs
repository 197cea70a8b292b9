// TestDependencies - mock implementations for testing
//
// Provides a recording account service that can be injected into AppDeps
// for unit and integration tests.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::{BaseAccountService, NewAccount, SignupResponse};

/// Scripted response for the next `sign_up_user` call
#[derive(Debug, Clone)]
enum ScriptedResponse {
    Success,
    Failure(Option<String>),
    Error(String),
}

pub struct MockAccountService {
    responses: Arc<Mutex<Vec<ScriptedResponse>>>,
    calls: Arc<Mutex<Vec<NewAccount>>>,
}

impl MockAccountService {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_success(self) -> Self {
        self.responses.lock().unwrap().push(ScriptedResponse::Success);
        self
    }

    /// Script a reported failure, optionally with a service-provided message
    pub fn with_failure(self, error: Option<&str>) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push(ScriptedResponse::Failure(error.map(str::to_string)));
        self
    }

    /// Script a transport-level error
    pub fn with_error(self, message: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push(ScriptedResponse::Error(message.to_string()));
        self
    }

    /// Get all accounts that were submitted
    pub fn calls(&self) -> Vec<NewAccount> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Default for MockAccountService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseAccountService for MockAccountService {
    async fn sign_up_user(&self, account: &NewAccount) -> Result<SignupResponse> {
        // Record the call
        self.calls.lock().unwrap().push(account.clone());

        let mut responses = self.responses.lock().unwrap();
        let scripted = if responses.is_empty() {
            ScriptedResponse::Success
        } else {
            responses.remove(0)
        };

        match scripted {
            ScriptedResponse::Success => Ok(SignupResponse {
                success: true,
                error: None,
            }),
            ScriptedResponse::Failure(error) => Ok(SignupResponse {
                success: false,
                error,
            }),
            ScriptedResponse::Error(message) => Err(anyhow::anyhow!(message)),
        }
    }
}
